//! Tag lines produced by the editor toolbar.
//!
//! The toolbar only produces markup; it never needs to understand it. These
//! builders keep what it produces in step with what the block scanner accepts.

use crate::parsing::blocks::kinds::{MediaKind, MediaTag};

use super::{IMAGE_URL_PLACEHOLDER, VIDEO_URL_PLACEHOLDER};

pub fn image_tag(label: &str, url: &str) -> String {
    MediaTag::format(MediaKind::Image, label, url)
}

pub fn video_tag(label: &str, url: &str) -> String {
    MediaTag::format(MediaKind::Video, label, url)
}

/// The line inserted by the image toolbar button before an upload finishes.
pub fn image_placeholder_tag() -> String {
    image_tag("", IMAGE_URL_PLACEHOLDER)
}

/// The line inserted by the video toolbar button before a link is pasted.
pub fn video_placeholder_tag() -> String {
    video_tag("", VIDEO_URL_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Document, VideoDisplay};

    #[test]
    fn placeholder_tags_scan_as_placeholders() {
        let source = format!("{}\n{}", image_placeholder_tag(), video_placeholder_tag());
        let doc = Document::parse(&source);
        assert_eq!(doc.blocks.len(), 2);
        assert!(matches!(&doc.blocks[0], Block::ImageTag(t) if t.is_placeholder));
        match &doc.blocks[1] {
            Block::VideoTag(t) => assert_eq!(t.display(), VideoDisplay::Placeholder),
            other => panic!("expected VideoTag, got {other:?}"),
        }
    }

    #[test]
    fn uploaded_image_tag() {
        assert_eq!(
            image_tag("Dashboard", "https://cdn.example.com/d.png"),
            "[image][Dashboard][https://cdn.example.com/d.png]"
        );
    }
}
