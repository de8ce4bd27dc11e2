//! # Document Model
//!
//! A [`Document`] is the ordered list of [`Block`]s scanned from one changelog
//! entry. It is rebuilt from the raw source on every render and never mutated
//! in place; only the source string is persisted.

use serde::Serialize;

use crate::{
    media,
    parsing::{self, inline::InlineSpan},
    render::{self, RenderMode, RenderNode},
};

/// One block of a changelog entry, in source line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// A `# ` line.
    Heading { content: Vec<InlineSpan> },
    /// Any line no other block rule claimed.
    Paragraph { content: Vec<InlineSpan> },
    /// Consecutive `1. ` lines. Source numbers are discarded.
    OrderedList { items: Vec<Vec<InlineSpan>> },
    /// Consecutive `- ` lines.
    UnorderedList { items: Vec<Vec<InlineSpan>> },
    /// A whole-line `[image][label][url]` tag.
    ImageTag(ImageTag),
    /// A whole-line `[video][label][url]` tag.
    VideoTag(VideoTag),
    /// A blank source line.
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageTag {
    pub label: String,
    pub url: String,
    /// True when `url` is still the editor's "Insert image URL here" text.
    pub is_placeholder: bool,
}

/// How an adapter should present an [`ImageTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDisplay<'a> {
    Placeholder,
    Image(&'a str),
}

impl ImageTag {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
            is_placeholder: url == media::IMAGE_URL_PLACEHOLDER,
        }
    }

    pub fn display(&self) -> ImageDisplay<'_> {
        if self.is_placeholder {
            ImageDisplay::Placeholder
        } else {
            ImageDisplay::Image(&self.url)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoTag {
    pub label: String,
    /// The url exactly as written in the source.
    pub url: String,
    /// Canonical embed url, or `None` when `url` is not a recognised YouTube url.
    pub embed_url: Option<String>,
    /// True when `url` is still the editor's "Insert YouTube video URL here" text.
    pub is_placeholder: bool,
}

/// How an adapter should present a [`VideoTag`].
///
/// `Invalid` (an unrecognised url) is distinct from `Placeholder` (no url
/// filled in yet); hosts show different notices for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoDisplay<'a> {
    Placeholder,
    Embed(&'a str),
    Invalid,
}

impl VideoTag {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
            embed_url: media::resolve_youtube(url),
            is_placeholder: url == media::VIDEO_URL_PLACEHOLDER,
        }
    }

    pub fn display(&self) -> VideoDisplay<'_> {
        if self.is_placeholder {
            return VideoDisplay::Placeholder;
        }
        match &self.embed_url {
            Some(embed) => VideoDisplay::Embed(embed),
            None => VideoDisplay::Invalid,
        }
    }
}

/// A parsed changelog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Scans `source` into blocks. Total: every input has a parse.
    pub fn parse(source: &str) -> Self {
        let blocks = parsing::scan(source);
        log::trace!("parsed changelog source into {} blocks", blocks.len());
        Self { blocks }
    }

    pub fn render(&self, mode: RenderMode) -> Vec<RenderNode> {
        render::render(&self.blocks, mode)
    }
}
