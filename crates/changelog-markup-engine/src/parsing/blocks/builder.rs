use crate::{
    document::{Block, ImageTag, VideoTag},
    parsing::inline::{InlineSpan, scan_inline},
};

use super::classify::LineClass;

/// Builds the block list from classified lines.
///
/// Holds one accumulator per list family. At most one is non-empty at a time:
/// pushing an item of one family flushes the other first.
pub struct BlockBuilder {
    ordered_items: Vec<Vec<InlineSpan>>,
    unordered_items: Vec<Vec<InlineSpan>>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            ordered_items: vec![],
            unordered_items: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'_>) {
        match c {
            LineClass::Blank => {
                self.flush_lists();
                self.out.push(Block::Spacer);
            }
            LineClass::Image { label, url } => {
                self.flush_lists();
                self.out.push(Block::ImageTag(ImageTag::new(label, url)));
            }
            LineClass::Video { label, url } => {
                self.flush_lists();
                let tag = VideoTag::new(label, url);
                if tag.embed_url.is_none() && !tag.is_placeholder {
                    log::debug!("video tag url is not a recognised YouTube url: {url}");
                }
                self.out.push(Block::VideoTag(tag));
            }
            LineClass::Heading(rest) => {
                self.flush_lists();
                self.out.push(Block::Heading {
                    content: scan_inline(rest),
                });
            }
            LineClass::OrderedItem(rest) => {
                self.flush_unordered();
                self.ordered_items.push(scan_inline(rest));
            }
            LineClass::UnorderedItem(rest) => {
                self.flush_ordered();
                self.unordered_items.push(scan_inline(rest));
            }
            LineClass::Text(line) => {
                self.flush_lists();
                self.out.push(Block::Paragraph {
                    content: scan_inline(line),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_lists();
        self.out
    }

    fn flush_lists(&mut self) {
        self.flush_ordered();
        self.flush_unordered();
    }

    fn flush_ordered(&mut self) {
        if !self.ordered_items.is_empty() {
            let items = std::mem::take(&mut self.ordered_items);
            self.out.push(Block::OrderedList { items });
        }
    }

    fn flush_unordered(&mut self) {
        if !self.unordered_items.is_empty() {
            let items = std::mem::take(&mut self.unordered_items);
            self.out.push(Block::UnorderedList { items });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
