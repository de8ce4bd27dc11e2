//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "*"`
//! - **`CodeSpan`**: `` TICK = "`" `` - raw zone that suppresses other scanning
//! - **`Link`**: `OPEN = "["`, `MIDDLE = "]("`, `CLOSE = ")"`
//!
//! The scanner calls these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
