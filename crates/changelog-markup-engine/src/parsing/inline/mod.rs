//! # Inline Scanning
//!
//! Cursor-based, recursive inline scanning of a single line of block text.
//!
//! ## Architecture
//!
//! Inline scanning runs once per text-bearing line (heading text, paragraph
//! line, list item text). At each position the constructs are tried in a fixed
//! order: bold, italic, code, link. A matched pair consumes through its closing
//! delimiter; bold and italic recurse into their inner text.
//!
//! - Code spans are raw zones: their content is never rescanned
//! - Link text is taken verbatim, not rescanned
//! - A delimiter without a close is plain text, never dropped
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, Italic, Code, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (Emphasis, CodeSpan, Link)
//! - **`cursor`**: `Cursor` for byte-wise scanning with lookback and forward search
//! - **`parser`**: `scan_inline()` main entry point with `try_scan_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::scan_inline;
pub use types::InlineSpan;
