/// Heading block type. A heading is a single line starting with `# `.
pub struct Heading;

impl Heading {
    pub const PREFIX: &'static str = "# ";

    /// Returns the heading text with the prefix removed.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix() {
        assert_eq!(Heading::strip("# Release 2.0"), Some("Release 2.0"));
        assert_eq!(Heading::strip("# "), Some(""));
    }

    #[test]
    fn requires_space_after_hash() {
        assert_eq!(Heading::strip("#Release"), None);
        assert_eq!(Heading::strip("## Release"), None);
        assert_eq!(Heading::strip(" # Release"), None);
    }
}
