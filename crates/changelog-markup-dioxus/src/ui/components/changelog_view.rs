use changelog_markup_engine::{Document, NodeKind, RenderMode, RenderNode};
use dioxus::prelude::*;

use super::{ImageFigure, InlineSpans, VideoEmbed};

/// Renders a raw entry source. All three views (full page, preview card and
/// live editor) go through here with the same source string.
#[component]
pub fn ChangelogView(source: String, mode: RenderMode, preview_max_lines: usize) -> Element {
    let nodes = Document::parse(&source).render(mode);

    // Preview clipping is purely visual
    let (class, style) = match mode {
        RenderMode::Full => ("changelog", String::new()),
        RenderMode::Preview => (
            "changelog changelog--preview",
            format!("max-height: {}em; overflow: hidden;", preview_max_lines as f32 * 1.5),
        ),
    };

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            for node in nodes.iter() {
                {render_node(node)}
            }
        }
    }
}

fn render_node(node: &RenderNode) -> Element {
    let key = node.key.clone();
    match &node.kind {
        NodeKind::Heading { content } => rsx! {
            h2 { key: "{key}", InlineSpans { spans: content.clone() } }
        },
        NodeKind::Paragraph { content } => rsx! {
            p { key: "{key}", InlineSpans { spans: content.clone() } }
        },
        NodeKind::OrderedList { items } => rsx! {
            ol {
                key: "{key}",
                for (i, item) in items.iter().enumerate() {
                    {
                        let li_key = item_key(&key, i);
                        rsx! {
                            li { key: "{li_key}", InlineSpans { spans: item.clone() } }
                        }
                    }
                }
            }
        },
        NodeKind::UnorderedList { items } => rsx! {
            ul {
                key: "{key}",
                for (i, item) in items.iter().enumerate() {
                    {
                        let li_key = item_key(&key, i);
                        rsx! {
                            li { key: "{li_key}", InlineSpans { spans: item.clone() } }
                        }
                    }
                }
            }
        },
        NodeKind::Image(tag) => rsx! {
            ImageFigure { key: "{key}", tag: tag.clone() }
        },
        NodeKind::Video(tag) => rsx! {
            VideoEmbed { key: "{key}", tag: tag.clone() }
        },
        NodeKind::Spacer => rsx! {
            div { key: "{key}", class: "changelog-spacer" }
        },
    }
}

/// Key of the `i`th item of the list keyed `list_key`
fn item_key(list_key: &str, i: usize) -> String {
    format!("{list_key}-{i}")
}
