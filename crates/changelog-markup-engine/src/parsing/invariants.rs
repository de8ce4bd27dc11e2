use crate::document::{Block, Document};

/// Validates scanner output invariants against the source it came from.
///
/// Asserts that:
/// - Every source line is accounted for by exactly one block or list item
/// - No list block is empty
/// - Two lists of the same family are never adjacent (they would have merged)
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, doc: &Document) {
    let lines = source.split('\n').count();
    let mut accounted = 0;
    for (i, b) in doc.blocks.iter().enumerate() {
        accounted += match b {
            Block::OrderedList { items } | Block::UnorderedList { items } => {
                assert!(!items.is_empty(), "empty list block at index {i}");
                items.len()
            }
            _ => 1,
        };
    }
    assert_eq!(
        accounted, lines,
        "blocks account for {accounted} lines but source has {lines}"
    );

    for (i, pair) in doc.blocks.windows(2).enumerate() {
        let same_family = matches!(
            pair,
            [Block::OrderedList { .. }, Block::OrderedList { .. }]
                | [Block::UnorderedList { .. }, Block::UnorderedList { .. }]
        );
        assert!(
            !same_family,
            "adjacent lists of the same family at indices {i} and {}",
            i + 1
        );
    }
}
