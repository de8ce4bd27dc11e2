//! # Block Kinds
//!
//! Block-specific types that own their line syntax. The classifier asks these
//! types whether a line opens their block; it never hardcodes `# ` or `- `.

pub mod heading;
pub mod list_item;
pub mod media_tag;

pub use heading::Heading;
pub use list_item::{OrderedItem, UnorderedItem};
pub use media_tag::{MediaKind, MediaTag};
