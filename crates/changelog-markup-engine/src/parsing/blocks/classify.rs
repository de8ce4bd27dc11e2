use super::kinds::{Heading, MediaKind, MediaTag, OrderedItem, UnorderedItem};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block scanning: each line is classified independently
/// without reference to surrounding lines. Borrowed slices point into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// A whole-line `[image][label][url]` tag.
    Image { label: &'a str, url: &'a str },
    /// A whole-line `[video][label][url]` tag.
    Video { label: &'a str, url: &'a str },
    /// A `# ` line; holds the text after the prefix.
    Heading(&'a str),
    /// A `1. ` line; holds the text after the marker.
    OrderedItem(&'a str),
    /// A `- ` line; holds the text after the marker.
    UnorderedItem(&'a str),
    /// Anything else; holds the full line.
    Text(&'a str),
}

/// Classifies individual lines for the block scanning phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line (without its trailing `\n`) into a [`LineClass`].
    ///
    /// First match wins: blank, image tag, video tag, heading, ordered item,
    /// unordered item, text. Tags are anchored to the whole line and checked
    /// before the prefix rules.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some((label, url)) = MediaTag::captures(MediaKind::Image, line) {
            return LineClass::Image { label, url };
        }
        if let Some((label, url)) = MediaTag::captures(MediaKind::Video, line) {
            return LineClass::Video { label, url };
        }
        if let Some(rest) = Heading::strip(line) {
            return LineClass::Heading(rest);
        }
        if let Some(rest) = OrderedItem::strip(line) {
            return LineClass::OrderedItem(rest);
        }
        if let Some(rest) = UnorderedItem::strip(line) {
            return LineClass::UnorderedItem(rest);
        }
        LineClass::Text(line)
    }
}
