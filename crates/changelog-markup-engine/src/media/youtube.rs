use std::sync::LazyLock;

use regex::Regex;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Accepted url shapes, tried in order. Each captures the video id.
static PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"^(?:https?://)?(?:[\w-]+\.)?youtube\.com/watch\?v=([^&#\s]+)",
        r"^(?:https?://)?(?:www\.)?youtu\.be/([^?&#/\s]+)",
        r"^(?:https?://)?(?:[\w-]+\.)?youtube(?:-nocookie)?\.com/embed/([^?&#/\s]+)",
    ]
    .map(|p| Regex::new(p).expect("youtube pattern is valid"))
});

/// Canonicalises a YouTube url to its `https://www.youtube.com/embed/<id>` form.
///
/// Accepts `watch?v=<id>`, `youtu.be/<id>` and `/embed/<id>` urls with or
/// without a scheme. `youtube.com` urls may carry one subdomain (`www.`,
/// `m.`, `music.`) and embeds may come from `youtube-nocookie.com`. Query
/// parameters after the id are dropped.
/// Returns `None` for anything else, including the editor placeholder.
pub fn resolve_youtube(url: &str) -> Option<String> {
    PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|id| format!("{EMBED_BASE}{}", id.as_str()))
}
