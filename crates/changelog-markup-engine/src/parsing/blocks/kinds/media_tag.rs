use std::sync::LazyLock;

use regex::Regex;

/// Which media tag a line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Whole-line media tags: `[image][label][url]` and `[video][label][url]`.
///
/// Both captures are non-greedy and the pattern is anchored to the whole line,
/// so anything around the tag demotes the line to a paragraph.
pub struct MediaTag;

static IMAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[image\]\[(.*?)\]\[(.*?)\]$").expect("image tag pattern is valid")
});

static VIDEO_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[video\]\[(.*?)\]\[(.*?)\]$").expect("video tag pattern is valid")
});

impl MediaTag {
    pub const IMAGE_OPEN: &'static str = "[image]";
    pub const VIDEO_OPEN: &'static str = "[video]";

    /// Matches `line` against one tag kind, returning `(label, url)`.
    pub fn captures(kind: MediaKind, line: &str) -> Option<(&str, &str)> {
        let re = match kind {
            MediaKind::Image => &*IMAGE_TAG,
            MediaKind::Video => &*VIDEO_TAG,
        };
        let caps = re.captures(line)?;
        let label = caps.get(1).map_or("", |m| m.as_str());
        let url = caps.get(2).map_or("", |m| m.as_str());
        Some((label, url))
    }

    /// Builds the markup for a tag. Inverse of [`MediaTag::captures`].
    pub fn format(kind: MediaKind, label: &str, url: &str) -> String {
        let open = match kind {
            MediaKind::Image => Self::IMAGE_OPEN,
            MediaKind::Video => Self::VIDEO_OPEN,
        };
        format!("{open}[{label}][{url}]")
    }
}
