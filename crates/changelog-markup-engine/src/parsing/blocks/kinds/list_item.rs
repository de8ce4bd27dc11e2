use std::sync::LazyLock;

use regex::Regex;

/// Ordered list item: one or more digits, a dot, then one whitespace character.
///
/// The number itself is discarded; lists are renumbered when rendered.
pub struct OrderedItem;

static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("ordered marker pattern is valid"));

impl OrderedItem {
    /// Returns the item text with the marker removed.
    pub fn strip(line: &str) -> Option<&str> {
        ORDERED_MARKER.find(line).map(|m| &line[m.end()..])
    }
}

/// Unordered list item: a line starting with `- `.
pub struct UnorderedItem;

impl UnorderedItem {
    pub const PREFIX: &'static str = "- ";

    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
