use serde::Serialize;

/// A scanned inline span.
///
/// Spans own their text so a block can outlive the source it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineSpan {
    /// Plain text that isn't part of any recognised construct.
    Text(String),
    /// `**...**`, with its inner text scanned again.
    Bold(Vec<InlineSpan>),
    /// `*...*`, with its inner text scanned again.
    Italic(Vec<InlineSpan>),
    /// `` `...` ``. A raw zone: content is kept verbatim.
    Code(String),
    /// `[text](url)`. Both parts verbatim.
    Link { text: String, url: String },
}
