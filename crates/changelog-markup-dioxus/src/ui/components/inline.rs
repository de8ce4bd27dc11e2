use changelog_markup_engine::InlineSpan;
use dioxus::prelude::*;

/// Renders scanned inline spans
#[component]
pub fn InlineSpans(spans: Vec<InlineSpan>) -> Element {
    rsx! {
        for span in spans.iter() {
            {render_span(span)}
        }
    }
}

/// Render a single span, recursing into emphasis
fn render_span(span: &InlineSpan) -> Element {
    match span {
        InlineSpan::Text(text) => rsx! { "{text}" },
        InlineSpan::Bold(children) => rsx! {
            strong {
                for child in children.iter() {
                    {render_span(child)}
                }
            }
        },
        InlineSpan::Italic(children) => rsx! {
            em {
                for child in children.iter() {
                    {render_span(child)}
                }
            }
        },
        InlineSpan::Code(code) => rsx! { code { "{code}" } },
        InlineSpan::Link { text, url } => rsx! {
            a {
                class: "external-link",
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{text}"
            }
        },
    }
}
