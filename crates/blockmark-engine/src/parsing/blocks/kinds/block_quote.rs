use super::strip_indent;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the `>` prefix (and at most one following space) from a line.
    ///
    /// Returns `None` when the line is not a quote line, including when the
    /// `>` is indented more than `max_indent` spaces.
    pub fn strip_prefix(line: &str, max_indent: usize) -> Option<&str> {
        let rest = strip_indent(line, max_indent)?.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }

    /// Joins stripped lines with single spaces. Blank lines (a bare `>`)
    /// contribute nothing.
    pub fn join_lines(lines: &[&str]) -> String {
        lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
