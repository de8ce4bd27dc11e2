pub mod blocks;
pub mod inline;
pub mod invariants;

use blocks::{BlockBuilder, MarkdownLineClassifier};

use crate::document::Block;

/// Scans a changelog source into blocks.
///
/// The source is split on `\n` with empty lines preserved, so the empty string
/// is a single blank line. Every line contributes exactly one block or one
/// list item; nothing is rejected.
pub fn scan(source: &str) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in source.split('\n') {
        let lc = classifier.classify(line);
        builder.push(lc);
    }

    builder.finish()
}
