//! Plain-text output: leaf text of inline spans, and a line-per-block adapter.

use crate::{
    document::{ImageDisplay, ImageTag, VideoDisplay, VideoTag},
    parsing::inline::InlineSpan,
};

use super::{NodeKind, RenderNode};

/// Concatenates the leaf text of `spans` with all markup delimiters removed.
///
/// Links contribute their text, not their url.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    push_plain_text(&mut out, spans);
    out
}

fn push_plain_text(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        match span {
            InlineSpan::Text(t) | InlineSpan::Code(t) => out.push_str(t),
            InlineSpan::Bold(children) | InlineSpan::Italic(children) => {
                push_plain_text(out, children)
            }
            InlineSpan::Link { text, .. } => out.push_str(text),
        }
    }
}

/// Renders instructions as plain text, one or more lines per node.
///
/// Ordered lists are renumbered from 1.
pub fn to_text(nodes: &[RenderNode]) -> String {
    let mut lines: Vec<String> = vec![];
    for node in nodes {
        match &node.kind {
            NodeKind::Heading { content } => lines.push(plain_text(content).to_uppercase()),
            NodeKind::Paragraph { content } => lines.push(plain_text(content)),
            NodeKind::OrderedList { items } => lines.extend(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| format!("{}. {}", i + 1, plain_text(item))),
            ),
            NodeKind::UnorderedList { items } => {
                lines.extend(items.iter().map(|item| format!("• {}", plain_text(item))))
            }
            NodeKind::Image(tag) => lines.push(image_line(tag)),
            NodeKind::Video(tag) => lines.push(video_line(tag)),
            NodeKind::Spacer => lines.push(String::new()),
        }
    }
    lines.join("\n")
}

/// `[image: label]`, or `[image]` when the label is empty.
pub fn media_label(kind: &str, label: &str) -> String {
    if label.is_empty() {
        format!("[{kind}]")
    } else {
        format!("[{kind}: {label}]")
    }
}

pub fn image_line(tag: &ImageTag) -> String {
    let label = media_label("image", &tag.label);
    match tag.display() {
        ImageDisplay::Placeholder => format!("{label} (no image URL yet)"),
        ImageDisplay::Image(url) => format!("{label} {url}"),
    }
}

pub fn video_line(tag: &VideoTag) -> String {
    let label = media_label("video", &tag.label);
    match tag.display() {
        VideoDisplay::Placeholder => format!("{label} (no YouTube URL yet)"),
        VideoDisplay::Embed(embed) => format!("{label} {embed}"),
        VideoDisplay::Invalid => format!("{label} invalid YouTube URL: {}", tag.url),
    }
}
