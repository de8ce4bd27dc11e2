//! # Block Scanning
//!
//! Two-phase, line-oriented block scanning.
//!
//! ## Scanning Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a `LineClass`
//!    from local facts only (blank, whole-line image/video tag, heading prefix,
//!    list marker), applying the fixed precedence order.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` holds the two list
//!    accumulators and emits `Block`s as lists open and close.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, list items, media tags)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for list accumulation
//!
//! ## Key Invariants
//!
//! - Blocks are flat: no block nests inside another
//! - A list marker family switch, a blank line, or any non-list line closes the open list
//! - Every line yields exactly one block or one list item

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
