pub mod document;
pub mod media;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use document::{Block, Document, ImageDisplay, ImageTag, VideoDisplay, VideoTag};
pub use parsing::inline::InlineSpan;
pub use render::{NodeKind, RenderMode, RenderNode};
