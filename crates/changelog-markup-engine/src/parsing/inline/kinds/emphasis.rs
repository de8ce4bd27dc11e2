/// Bold and italic delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
    pub const ITALIC_BYTE: u8 = b'*';
}
