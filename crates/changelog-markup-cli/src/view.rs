//! Terminal adapter: render instructions to styled ratatui lines.

use changelog_markup_engine::{
    ImageDisplay, InlineSpan, NodeKind, RenderNode, VideoDisplay,
    render::text::{image_line, video_line},
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const PREVIEW_ELLIPSIS: &str = "…";

/// Converts render instructions to lines. Preview nodes are clipped to
/// `preview_max_lines`, with an ellipsis line when anything was cut.
pub fn document_lines(nodes: &[RenderNode], preview_max_lines: usize) -> Vec<Line<'static>> {
    let mut lines = vec![];
    for node in nodes {
        push_node_lines(&mut lines, node);
    }

    let preview = nodes.first().is_some_and(|n| n.mode.is_preview());
    if preview && lines.len() > preview_max_lines {
        lines.truncate(preview_max_lines);
        lines.push(Line::from(Span::styled(
            PREVIEW_ELLIPSIS,
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    lines
}

fn push_node_lines(lines: &mut Vec<Line<'static>>, node: &RenderNode) {
    match &node.kind {
        NodeKind::Heading { content } => {
            let style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            lines.push(inline_line(vec![], content, style));
        }
        NodeKind::Paragraph { content } => {
            lines.push(inline_line(vec![], content, Style::default()));
        }
        NodeKind::OrderedList { items } => {
            for (i, item) in items.iter().enumerate() {
                let marker = Span::raw(format!("{}. ", i + 1));
                lines.push(inline_line(vec![marker], item, Style::default()));
            }
        }
        NodeKind::UnorderedList { items } => {
            for item in items {
                let marker = Span::raw("• ");
                lines.push(inline_line(vec![marker], item, Style::default()));
            }
        }
        NodeKind::Image(tag) => {
            let style = match tag.display() {
                ImageDisplay::Placeholder => placeholder_style(),
                ImageDisplay::Image(_) => Style::default().fg(Color::Green),
            };
            lines.push(Line::from(Span::styled(image_line(tag), style)));
        }
        NodeKind::Video(tag) => {
            let style = match tag.display() {
                VideoDisplay::Placeholder => placeholder_style(),
                VideoDisplay::Embed(_) => Style::default().fg(Color::Magenta),
                VideoDisplay::Invalid => Style::default().fg(Color::Red),
            };
            lines.push(Line::from(Span::styled(video_line(tag), style)));
        }
        NodeKind::Spacer => lines.push(Line::default()),
    }
}

fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

fn inline_line(mut prefix: Vec<Span<'static>>, spans: &[InlineSpan], base: Style) -> Line<'static> {
    push_inline_spans(&mut prefix, spans, base);
    Line::from(prefix)
}

/// Flattens nested inline spans, accumulating modifiers on the way down.
fn push_inline_spans(out: &mut Vec<Span<'static>>, spans: &[InlineSpan], style: Style) {
    for span in spans {
        match span {
            InlineSpan::Text(text) => out.push(Span::styled(text.clone(), style)),
            InlineSpan::Bold(children) => {
                push_inline_spans(out, children, style.add_modifier(Modifier::BOLD))
            }
            InlineSpan::Italic(children) => {
                push_inline_spans(out, children, style.add_modifier(Modifier::ITALIC))
            }
            InlineSpan::Code(code) => out.push(Span::styled(code.clone(), style.fg(Color::Yellow))),
            InlineSpan::Link { text, url } => {
                out.push(Span::styled(
                    text.clone(),
                    style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                ));
                out.push(Span::styled(
                    format!(" ({url})"),
                    style.add_modifier(Modifier::DIM),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelog_markup_engine::{Document, RenderMode};
    use pretty_assertions::assert_eq;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn lines_for(source: &str, mode: RenderMode, max: usize) -> Vec<Line<'static>> {
        document_lines(&Document::parse(source).render(mode), max)
    }

    #[test]
    fn lists_are_renumbered_and_bulleted() {
        let lines = lines_for("5. a\n9. b\n- c", RenderMode::Full, 10);
        assert_eq!(plain(&lines), vec!["1. a", "2. b", "• c"]);
    }

    #[test]
    fn nested_emphasis_accumulates_modifiers() {
        let lines = lines_for("**bold *both* x**", RenderMode::Full, 10);
        let spans = &lines[0].spans;
        assert_eq!(spans[0].content, "bold ");
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[0].style.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(spans[1].content, "both");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD | Modifier::ITALIC));
    }

    #[test]
    fn link_shows_text_then_url() {
        let lines = lines_for("[docs](https://d.test)", RenderMode::Full, 10);
        assert_eq!(plain(&lines), vec!["docs (https://d.test)"]);
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn media_notices() {
        let lines = lines_for(
            "[video][][Insert YouTube video URL here]\n[video][Clip][https://vimeo.com/1]\n[image][Logo][https://cdn.test/l.png]",
            RenderMode::Full,
            10,
        );
        assert_eq!(
            plain(&lines),
            vec![
                "[video] (no YouTube URL yet)",
                "[video: Clip] invalid YouTube URL: https://vimeo.com/1",
                "[image: Logo] https://cdn.test/l.png",
            ]
        );
        assert_eq!(lines[1].spans[0].style.fg, Some(Color::Red));
    }

    #[test]
    fn preview_is_clipped_with_ellipsis() {
        let source = "# T\na\nb\nc\nd";
        let full = lines_for(source, RenderMode::Full, 2);
        let preview = lines_for(source, RenderMode::Preview, 2);
        assert_eq!(full.len(), 5);
        assert_eq!(plain(&preview), vec!["T", "a", "…"]);
    }

    #[test]
    fn short_preview_is_not_clipped() {
        let preview = lines_for("a\nb", RenderMode::Preview, 2);
        assert_eq!(plain(&preview), vec!["a", "b"]);
    }
}
