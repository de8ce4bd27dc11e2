//! HTML adapter for render instructions.
//!
//! Writes one element per instruction, one per output line, inside a
//! `changelog` container. Preview output adds the `changelog--preview` class;
//! clipping it is left to the stylesheet.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    document::{ImageDisplay, ImageTag, VideoDisplay, VideoTag},
    parsing::inline::InlineSpan,
};

use super::{NodeKind, RenderMode, RenderNode};

/// Renders instructions to an HTML fragment. The container class follows
/// `mode` even when `nodes` is empty.
pub fn to_html(nodes: &[RenderNode], mode: RenderMode) -> String {
    let mut out = String::new();
    out.push_str(match mode {
        RenderMode::Full => "<div class=\"changelog\">\n",
        RenderMode::Preview => "<div class=\"changelog changelog--preview\">\n",
    });
    for node in nodes {
        push_node(&mut out, node);
        out.push('\n');
    }
    out.push_str("</div>\n");
    out
}

fn push_node(out: &mut String, node: &RenderNode) {
    match &node.kind {
        NodeKind::Heading { content } => {
            out.push_str("<h2>");
            push_spans(out, content);
            out.push_str("</h2>");
        }
        NodeKind::Paragraph { content } => {
            out.push_str("<p>");
            push_spans(out, content);
            out.push_str("</p>");
        }
        NodeKind::OrderedList { items } => push_list(out, "ol", items),
        NodeKind::UnorderedList { items } => push_list(out, "ul", items),
        NodeKind::Image(tag) => push_image(out, tag),
        NodeKind::Video(tag) => push_video(out, tag),
        NodeKind::Spacer => out.push_str("<div class=\"changelog-spacer\"></div>"),
    }
}

fn push_list(out: &mut String, tag: &str, items: &[Vec<InlineSpan>]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for item in items {
        out.push_str("<li>");
        push_spans(out, item);
        out.push_str("</li>");
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_image(out: &mut String, tag: &ImageTag) {
    match tag.display() {
        ImageDisplay::Placeholder => {
            out.push_str("<div class=\"changelog-placeholder\">Image: no image URL yet</div>");
        }
        ImageDisplay::Image(url) => {
            out.push_str("<figure class=\"changelog-image\"><img src=\"");
            out.push_str(&encode_double_quoted_attribute(url));
            out.push_str("\" alt=\"");
            out.push_str(&encode_double_quoted_attribute(&tag.label));
            out.push_str("\">");
            push_caption(out, &tag.label);
            out.push_str("</figure>");
        }
    }
}

fn push_video(out: &mut String, tag: &VideoTag) {
    match tag.display() {
        VideoDisplay::Placeholder => {
            out.push_str("<div class=\"changelog-placeholder\">Video: no YouTube URL yet</div>");
        }
        VideoDisplay::Invalid => {
            out.push_str("<div class=\"changelog-invalid\">Invalid YouTube URL: ");
            out.push_str(&encode_text(&tag.url));
            out.push_str("</div>");
        }
        VideoDisplay::Embed(embed) => {
            out.push_str("<figure class=\"changelog-video\"><iframe src=\"");
            out.push_str(&encode_double_quoted_attribute(embed));
            out.push_str("\" title=\"");
            out.push_str(&encode_double_quoted_attribute(&tag.label));
            out.push_str("\" allowfullscreen></iframe>");
            push_caption(out, &tag.label);
            out.push_str("</figure>");
        }
    }
}

fn push_caption(out: &mut String, label: &str) {
    if !label.is_empty() {
        out.push_str("<figcaption>");
        out.push_str(&encode_text(label));
        out.push_str("</figcaption>");
    }
}

/// Writes inline spans as HTML.
pub fn push_spans(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        match span {
            InlineSpan::Text(text) => out.push_str(&encode_text(text)),
            InlineSpan::Bold(children) => {
                out.push_str("<strong>");
                push_spans(out, children);
                out.push_str("</strong>");
            }
            InlineSpan::Italic(children) => {
                out.push_str("<em>");
                push_spans(out, children);
                out.push_str("</em>");
            }
            InlineSpan::Code(code) => {
                out.push_str("<code>");
                out.push_str(&encode_text(code));
                out.push_str("</code>");
            }
            InlineSpan::Link { text, url } => {
                out.push_str("<a href=\"");
                out.push_str(&encode_double_quoted_attribute(url));
                out.push_str("\">");
                out.push_str(&encode_text(text));
                out.push_str("</a>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use pretty_assertions::assert_eq;

    fn html(source: &str, mode: RenderMode) -> String {
        to_html(&Document::parse(source).render(mode), mode)
    }

    #[test]
    fn escapes_text_and_attributes() {
        let out = html("a <b> & [x](https://e.test/?a=1&b=\"2\")", RenderMode::Full);
        assert_eq!(
            out,
            "<div class=\"changelog\">\n\
             <p>a &lt;b&gt; &amp; <a href=\"https://e.test/?a=1&amp;b=&quot;2&quot;\">x</a></p>\n\
             </div>\n"
        );
    }

    #[test]
    fn preview_container_class() {
        let out = html("hi", RenderMode::Preview);
        assert!(out.starts_with("<div class=\"changelog changelog--preview\">\n"));
        assert!(out.contains("<p>hi</p>"));
    }

    #[test]
    fn empty_node_list_keeps_mode_container() {
        assert_eq!(
            to_html(&[], RenderMode::Preview),
            "<div class=\"changelog changelog--preview\">\n</div>\n"
        );
        assert_eq!(to_html(&[], RenderMode::Full), "<div class=\"changelog\">\n</div>\n");
    }

    #[test]
    fn code_content_is_escaped_not_interpreted() {
        let out = html("`<T> **x**`", RenderMode::Full);
        assert!(out.contains("<p><code>&lt;T&gt; **x**</code></p>"));
    }

    #[test]
    fn placeholder_and_invalid_video_differ() {
        let out = html(
            "[video][][Insert YouTube video URL here]\n[video][][https://vimeo.com/1]",
            RenderMode::Full,
        );
        assert!(out.contains("<div class=\"changelog-placeholder\">Video: no YouTube URL yet</div>"));
        assert!(out.contains("<div class=\"changelog-invalid\">Invalid YouTube URL: https://vimeo.com/1</div>"));
    }

    #[test]
    fn image_without_label_has_no_caption() {
        let out = html("[image][][https://cdn.test/a.png]", RenderMode::Full);
        assert!(out.contains(
            "<figure class=\"changelog-image\"><img src=\"https://cdn.test/a.png\" alt=\"\"></figure>"
        ));
    }
}
