//! # Media
//!
//! Image and video tag support shared with the editor toolbar:
//!
//! - **`youtube`**: `resolve_youtube` canonicalises watch, short, and embed urls
//! - **`snippets`**: the exact tag lines the toolbar splices into the source
//!
//! The two placeholder sentinels are a contract with the editor. Changing either
//! string breaks entries already saved with a placeholder in them.

pub mod snippets;
pub mod youtube;

pub use snippets::{image_placeholder_tag, image_tag, video_placeholder_tag, video_tag};
pub use youtube::resolve_youtube;

/// Url the editor inserts for an image tag that has no upload yet.
pub const IMAGE_URL_PLACEHOLDER: &str = "Insert image URL here";

/// Url the editor inserts for a video tag that has no link yet.
pub const VIDEO_URL_PLACEHOLDER: &str = "Insert YouTube video URL here";
