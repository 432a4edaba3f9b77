//! # Block Kinds
//!
//! Each block kind owns its markers and the grammar for recognising one
//! line (or the whole block, for fences and tables). The classifier only
//! orders these rules; it never hardcodes `#` or `>`.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FencedCode};
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
pub use paragraph::Paragraph;
pub use table::{Alignment, Table, TableBlock};

/// Strips up to `max` leading spaces. `None` when the line is indented deeper.
pub fn strip_indent(line: &str, max: usize) -> Option<&str> {
    let spaces = line.bytes().take_while(|&b| b == b' ').count();
    if spaces > max {
        return None;
    }
    Some(&line[spaces..])
}

/// Strips a run of at least one space or tab. `None` if there is none.
pub fn strip_required_whitespace(s: &str) -> Option<&str> {
    let rest = s.trim_start_matches([' ', '\t']);
    (rest.len() < s.len()).then_some(rest)
}
