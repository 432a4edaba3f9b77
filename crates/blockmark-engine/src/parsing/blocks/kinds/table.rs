use std::sync::LazyLock;

use regex::Regex;

/// Column alignment derived from a separator cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Value of the `align` attribute. Left is the default, so it has none.
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
            Alignment::None | Alignment::Left => None,
        }
    }
}

/// A table block: header cells, one alignment per header column, body rows.
///
/// Body rows keep their own length; reconciling them against the header is
/// left to rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub header: Vec<String>,
    pub alignments: Vec<Alignment>,
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    pub fn columns(&self) -> usize {
        self.header.len()
    }

    /// Alignment for column `index`; columns past the header have none.
    pub fn alignment(&self, index: usize) -> Alignment {
        self.alignments.get(index).copied().unwrap_or_default()
    }
}

pub struct Table;

static SEPARATOR_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-{3,}:?$").expect("valid separator cell regex"));

impl Table {
    pub const PIPE: char = '|';

    /// Parses `block` as a table.
    ///
    /// Needs two or more non-blank lines where the second is a separator row
    /// with exactly as many cells as the first. Anything else is `None`.
    pub fn parse(block: &str) -> Option<TableBlock> {
        let mut lines = block.lines().filter(|l| !l.trim().is_empty());
        let header = Self::split_row(lines.next()?);
        let separator = Self::split_row(lines.next()?);

        if separator.is_empty() || separator.len() != header.len() {
            return None;
        }
        let alignments = separator
            .iter()
            .map(|cell| Self::alignment(cell))
            .collect::<Option<Vec<_>>>()?;

        Some(TableBlock {
            header,
            alignments,
            rows: lines.map(Self::split_row).collect(),
        })
    }

    /// Alignment of a separator cell, or `None` if it is not one.
    pub fn alignment(cell: &str) -> Option<Alignment> {
        let cell = cell.trim();
        if !SEPARATOR_CELL.is_match(cell) {
            return None;
        }
        Some(match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            (true, false) => Alignment::Left,
            (false, false) => Alignment::None,
        })
    }

    /// Splits a row on unescaped pipes and trims each cell.
    ///
    /// A leading or trailing pipe does not produce an empty edge cell. `\|`
    /// is a literal pipe inside a cell; other escapes are left for inline
    /// parsing.
    pub fn split_row(line: &str) -> Vec<String> {
        let line = line.trim();
        let mut cells = Vec::new();
        let mut cell = String::new();
        let mut ends_with_pipe = false;
        let mut chars = line.chars();

        while let Some(c) = chars.next() {
            ends_with_pipe = false;
            match c {
                '\\' => match chars.next() {
                    Some(Self::PIPE) => cell.push(Self::PIPE),
                    Some(other) => {
                        cell.push(c);
                        cell.push(other);
                    }
                    None => cell.push(c),
                },
                Self::PIPE => {
                    cells.push(cell.trim().to_string());
                    cell.clear();
                    ends_with_pipe = true;
                }
                _ => cell.push(c),
            }
        }
        cells.push(cell.trim().to_string());

        if line.starts_with(Self::PIPE) {
            cells.remove(0);
        }
        if ends_with_pipe {
            cells.pop();
        }
        cells
    }
}
