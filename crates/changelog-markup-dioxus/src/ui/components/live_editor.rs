use changelog_markup_engine::{
    RenderMode,
    media::{image_placeholder_tag, video_placeholder_tag},
};
use dioxus::prelude::*;

use super::ChangelogView;

/// Source textarea with a toolbar and a live preview below it.
///
/// The buffer is local until saved; every input re-renders the preview from
/// the whole buffer.
#[component]
pub fn LiveEditor(
    initial_source: String,
    preview_max_lines: usize,
    on_save: Callback<String>,
    on_cancel: Callback<()>,
) -> Element {
    let mut source = use_signal(|| initial_source.clone());
    let mut mode = use_signal(|| RenderMode::Full);

    rsx! {
        div {
            class: "live-editor",
            div {
                class: "editor-toolbar",
                button {
                    class: "insert-image",
                    onclick: move |_| {
                        let next = with_line(&source.read(), &image_placeholder_tag());
                        source.set(next);
                    },
                    "Image"
                }
                button {
                    class: "insert-video",
                    onclick: move |_| {
                        let next = with_line(&source.read(), &video_placeholder_tag());
                        source.set(next);
                    },
                    "Video"
                }
                button {
                    class: "toggle-mode",
                    onclick: move |_| {
                        let next = match *mode.read() {
                            RenderMode::Full => RenderMode::Preview,
                            RenderMode::Preview => RenderMode::Full,
                        };
                        mode.set(next);
                    },
                    if mode.read().is_preview() { "Show full" } else { "Show preview" }
                }
                button {
                    class: "save",
                    onclick: move |_| on_save.call(source.read().clone()),
                    "Save"
                }
                button {
                    class: "cancel",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
            textarea {
                class: "editor-textarea",
                value: source.read().clone(),
                spellcheck: false,
                rows: calculate_textarea_rows(&source.read()),
                autofocus: true,
                oninput: move |event: Event<FormData>| {
                    source.set(event.value());
                },
            }
            div {
                class: "editor-preview",
                ChangelogView {
                    source: source.read().clone(),
                    mode: *mode.read(),
                    preview_max_lines,
                }
            }
        }
    }
}

/// `source` with `line` appended as a line of its own
fn with_line(source: &str, line: &str) -> String {
    let mut next = source.to_string();
    if !next.is_empty() && !next.ends_with('\n') {
        next.push('\n');
    }
    next.push_str(line);
    next
}

/// Calculate appropriate number of rows for textarea based on content
fn calculate_textarea_rows(content: &str) -> u32 {
    let line_count = content.split('\n').count().max(3);
    (line_count as u32).min(30)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_with_line() {
        assert_eq!(with_line("", "[image][][x]"), "[image][][x]");
        assert_eq!(with_line("intro", "[image][][x]"), "intro\n[image][][x]");
        assert_eq!(with_line("intro\n", "[image][][x]"), "intro\n[image][][x]");
    }

    #[test]
    fn test_calculate_textarea_rows() {
        assert_eq!(calculate_textarea_rows(""), 3);
        assert_eq!(calculate_textarea_rows("a\nb\nc\nd"), 4);
        assert_eq!(calculate_textarea_rows(&"x\n".repeat(100)), 30);
    }

    fn editor_host() -> Element {
        rsx! {
            LiveEditor {
                initial_source: "# Draft\n- one\n[video][][Insert YouTube video URL here]".to_string(),
                preview_max_lines: 6,
                on_save: move |_| {},
                on_cancel: move |_| {},
            }
        }
    }

    #[test]
    fn test_editor_shows_source_and_live_preview() {
        let mut dom = VirtualDom::new(editor_host);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("<textarea"));
        assert!(html.contains("Draft</h2>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("Video: no YouTube URL yet"));
        assert!(html.contains("Show preview"));
    }
}
