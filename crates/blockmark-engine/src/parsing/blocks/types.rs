use serde::Serialize;

use super::kinds::TableBlock;

/// The kind of a block, without its captured content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockType {
    Paragraph,
    /// Heading level, 1 to 6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Table,
}

/// A classified block together with what its rule captured, so rendering
/// never re-matches the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Paragraph {
        text: &'a str,
    },
    Heading {
        level: u8,
        /// Heading content followed by any continuation lines of the block.
        lines: Vec<&'a str>,
    },
    Code {
        language: Option<&'a str>,
        content: &'a str,
    },
    Quote {
        /// Lines with their `>` prefix stripped.
        lines: Vec<&'a str>,
    },
    UnorderedList {
        items: Vec<&'a str>,
    },
    OrderedList {
        items: Vec<&'a str>,
    },
    Table(TableBlock),
}

impl Block<'_> {
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Paragraph { .. } => BlockType::Paragraph,
            Block::Heading { level, .. } => BlockType::Heading(*level),
            Block::Code { .. } => BlockType::Code,
            Block::Quote { .. } => BlockType::Quote,
            Block::UnorderedList { .. } => BlockType::UnorderedList,
            Block::OrderedList { .. } => BlockType::OrderedList,
            Block::Table(_) => BlockType::Table,
        }
    }
}
