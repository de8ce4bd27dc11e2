/// `[text](url)` link delimiters.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";
}
