use std::sync::LazyLock;

use regex::Regex;

use super::{strip_indent, strip_required_whitespace};

/// `- item` lines.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: char = '-';

    /// Returns the item content: `-`, required whitespace, non-empty content.
    pub fn item(line: &str, max_indent: usize) -> Option<&str> {
        let rest = strip_indent(line, max_indent)?.strip_prefix(Self::MARKER)?;
        let content = strip_required_whitespace(rest)?.trim_end();
        (!content.is_empty()).then_some(content)
    }
}

/// `1. item` lines. Numbers need not be sequential, unique or start at 1.
pub struct OrderedList;

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.[ \t]+(\S.*)$").expect("valid ordered item regex"));

impl OrderedList {
    /// Returns `(number, content)` for an ordered item line.
    pub fn item(line: &str, max_indent: usize) -> Option<(&str, &str)> {
        let rest = strip_indent(line, max_indent)?;
        let caps = ORDERED_ITEM.captures(rest)?;
        let number = caps.get(1)?.as_str();
        let content = caps.get(2)?.as_str().trim_end();
        Some((number, content))
    }
}
