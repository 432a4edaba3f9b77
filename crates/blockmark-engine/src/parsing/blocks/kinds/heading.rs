use super::{strip_indent, strip_required_whitespace};

/// ATX heading: `#` to `######`, then whitespace, then content.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses a heading line into `(level, content)`.
    ///
    /// Seven or more `#`, or a `#` run not followed by whitespace, is not a
    /// heading. The content is trimmed and may be empty.
    pub fn parse(line: &str, max_indent: usize) -> Option<(u8, &str)> {
        let rest = strip_indent(line, max_indent)?;
        let level = rest.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let content = strip_required_whitespace(&rest[level..])?;
        Some((level as u8, content.trim_end()))
    }
}
