//! # Rendering
//!
//! Turns a scanned block list into abstract render instructions, one per
//! block. Nothing is parsed here and no UI toolkit is involved; hosts adapt
//! the instructions at their boundary.
//!
//! ## Modules
//!
//! - **`html`**: HTML string adapter (escaped through `html-escape`)
//! - **`text`**: leaf-text extraction and a plain-text adapter
//!
//! ## Preview mode
//!
//! `RenderMode::Preview` produces the same node sequence as `Full`; it only
//! marks each node so the adapter can clip the presentation.

pub mod html;
pub mod text;

use serde::Serialize;

use crate::{
    document::{Block, ImageTag, VideoTag},
    parsing::inline::InlineSpan,
};

/// Which call site the output is for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RenderMode {
    /// The entry page.
    #[default]
    Full,
    /// A clipped card, e.g. in an entry list.
    Preview,
}

impl RenderMode {
    pub fn is_preview(self) -> bool {
        matches!(self, RenderMode::Preview)
    }
}

/// The block data a render instruction carries, keyed by block kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Heading { content: Vec<InlineSpan> },
    Paragraph { content: Vec<InlineSpan> },
    OrderedList { items: Vec<Vec<InlineSpan>> },
    UnorderedList { items: Vec<Vec<InlineSpan>> },
    Image(ImageTag),
    Video(VideoTag),
    Spacer,
}

/// One render instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    /// Display key, unique within one render: `block-<index>`.
    pub key: String,
    pub mode: RenderMode,
    pub kind: NodeKind,
}

/// Maps blocks to render instructions, one per block, in order.
pub fn render(blocks: &[Block], mode: RenderMode) -> Vec<RenderNode> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| RenderNode {
            key: format!("block-{index}"),
            mode,
            kind: node_kind(block),
        })
        .collect()
}

fn node_kind(block: &Block) -> NodeKind {
    match block {
        Block::Heading { content } => NodeKind::Heading {
            content: content.clone(),
        },
        Block::Paragraph { content } => NodeKind::Paragraph {
            content: content.clone(),
        },
        Block::OrderedList { items } => NodeKind::OrderedList {
            items: items.clone(),
        },
        Block::UnorderedList { items } => NodeKind::UnorderedList {
            items: items.clone(),
        },
        Block::ImageTag(tag) => NodeKind::Image(tag.clone()),
        Block::VideoTag(tag) => NodeKind::Video(tag.clone()),
        Block::Spacer => NodeKind::Spacer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_node_per_block_with_positional_keys() {
        let doc = Document::parse("# A\n\n- x\n- y\ntext");
        let nodes = render(&doc.blocks, RenderMode::Full);
        assert_eq!(nodes.len(), doc.blocks.len());
        let keys: Vec<_> = nodes.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, vec!["block-0", "block-1", "block-2", "block-3"]);
        assert!(matches!(nodes[0].kind, NodeKind::Heading { .. }));
        assert!(matches!(nodes[1].kind, NodeKind::Spacer));
        assert!(matches!(nodes[2].kind, NodeKind::UnorderedList { ref items } if items.len() == 2));
        assert!(matches!(nodes[3].kind, NodeKind::Paragraph { .. }));
    }

    #[test]
    fn preview_only_sets_the_mode_flag() {
        let doc = Document::parse("# A\n[video][Demo][https://youtu.be/abc]\n1. x");
        let full = render(&doc.blocks, RenderMode::Full);
        let preview = render(&doc.blocks, RenderMode::Preview);

        assert_eq!(full.len(), preview.len());
        for (f, p) in full.iter().zip(&preview) {
            assert_eq!(f.key, p.key);
            assert_eq!(f.kind, p.kind);
            assert_eq!(f.mode, RenderMode::Full);
            assert_eq!(p.mode, RenderMode::Preview);
        }
    }

    #[test]
    fn empty_block_list_renders_nothing() {
        assert!(render(&[], RenderMode::Preview).is_empty());
    }
}
