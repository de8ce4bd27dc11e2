use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
    types::InlineSpan,
};

/// Scans one line of block text into a sequence of [`InlineSpan`]s.
///
/// # Precedence
/// At each position: bold, italic, code, link, then plain text. Bold and
/// italic recurse on their inner text; code and link content is verbatim.
///
/// # Unmatched delimiters
/// A delimiter without a matching close is kept as plain text.
///
/// # Returns
/// Spans covering the whole input. Text between constructs is emitted as
/// `InlineSpan::Text`; an empty input yields no spans.
pub fn scan_inline(s: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text span
    fn flush_text(out: &mut Vec<InlineSpan>, text: &str) {
        if !text.is_empty() {
            out.push(InlineSpan::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let span = try_scan_bold(&mut cur)
            .or_else(|| try_scan_italic(&mut cur))
            .or_else(|| try_scan_code_span(&mut cur))
            .or_else(|| try_scan_link(&mut cur));

        if let Some(span) = span {
            flush_text(&mut out, cur.slice(text_start, start));
            out.push(span);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, cur.slice(text_start, s.len()));
    out
}

/// `**inner**`. The close is the next `**` after the opener.
fn try_scan_bold(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(Emphasis::BOLD) {
        return None;
    }
    let inner_start = cur.pos() + Emphasis::BOLD.len();
    let close = cur.find_from(inner_start, Emphasis::BOLD)?;
    let inner = cur.slice(inner_start, close);
    cur.seek(close + Emphasis::BOLD.len());
    Some(InlineSpan::Bold(scan_inline(inner)))
}

/// `*inner*`. Not attempted when the preceding byte is also `*`.
///
/// The lookback is a single byte, so runs of three or more asterisks nest
/// unevenly (`***x***` is bold `*x` followed by a literal `*`). Persisted
/// entries depend on this output.
fn try_scan_italic(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(Emphasis::ITALIC_BYTE) || cur.prev() == Some(Emphasis::ITALIC_BYTE) {
        return None;
    }
    let inner_start = cur.pos() + Emphasis::ITALIC.len();
    let close = cur.find_from(inner_start, Emphasis::ITALIC)?;
    let inner = cur.slice(inner_start, close);
    cur.seek(close + Emphasis::ITALIC.len());
    Some(InlineSpan::Italic(scan_inline(inner)))
}

/// `` `inner` ``, kept verbatim.
fn try_scan_code_span(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(CodeSpan::TICK) {
        return None;
    }
    let inner_start = cur.pos() + CodeSpan::TICK.len();
    let close = cur.find_from(inner_start, CodeSpan::TICK)?;
    let inner = cur.slice(inner_start, close);
    cur.seek(close + CodeSpan::TICK.len());
    Some(InlineSpan::Code(inner.to_string()))
}

/// `[text](url)`. The url ends at the first `)` after `](`.
fn try_scan_link(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(Link::OPEN) {
        return None;
    }
    let start = cur.pos();
    let middle = cur.find_from(start, Link::MIDDLE)?;
    let url_start = middle + Link::MIDDLE.len();
    let close = cur.find_from(url_start, Link::CLOSE)?;

    let text = cur.slice(start + Link::OPEN.len(), middle);
    let url = cur.slice(url_start, close);
    cur.seek(close + Link::CLOSE.len());
    Some(InlineSpan::Link {
        text: text.to_string(),
        url: url.to_string(),
    })
}
