//! # blockmark-engine
//!
//! Converts one markdown document into a tree of HTML element nodes.
//!
//! ```text
//! markdown ─► segment ─► classify ─► block_to_node ─► Node ─► render ─► HTML
//!            (blank     (ordered     (inline spans,
//!             lines)     rules)       tables)
//! ```
//!
//! The conversion is a pure function of its input: it reads no files, keeps
//! no state between calls and either returns a complete tree or an error.
//! Reading markdown and writing HTML belong to the caller.

pub mod error;
pub mod html;
pub mod options;
pub mod parsing;

pub use error::{ConvertError, InlineError, RenderError};
pub use html::{Attributes, Node};
pub use options::{IndentLimits, InlineOptions, ItalicDelimiters, ParseOptions};
pub use parsing::{
    blocks::{Block, BlockType, block_to_block_type, classify},
    inline::{TextKind, TextSpan, text_to_spans},
    parse_document,
    segment::markdown_to_blocks,
};

/// Parses `markdown` into its root node.
pub fn markdown_to_html_node(markdown: &str, options: &ParseOptions) -> Result<Node, ConvertError> {
    Ok(parse_document(markdown, options)?)
}

/// Parses and renders `markdown` to an HTML fragment (no document scaffold).
pub fn markdown_to_html(markdown: &str, options: &ParseOptions) -> Result<String, ConvertError> {
    let node = markdown_to_html_node(markdown, options)?;
    Ok(node.render()?)
}
