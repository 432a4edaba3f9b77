//! # Parsing
//!
//! The document pipeline: segment → classify → render each block → wrap.
//!
//! - **`segment`**: splits the document on blank lines
//! - **`blocks`**: ordered block classification with captured content
//! - **`inline`**: span tokenizing inside blocks

pub mod blocks;
pub mod inline;
pub mod segment;

use crate::{error::InlineError, html::Node, options::ParseOptions};

use blocks::classify;
use segment::markdown_to_blocks;

/// Tag of the root container holding every block.
pub const ROOT_TAG: &str = "div";

/// Parses a whole document into one root node.
///
/// Either every block converts or the first failure is returned; no partial
/// tree escapes. An empty document yields an empty root.
pub fn parse_document(markdown: &str, options: &ParseOptions) -> Result<Node, InlineError> {
    let blocks = markdown_to_blocks(markdown);
    log::debug!("{} blocks", blocks.len());

    let children = blocks
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let block = classify(text, options);
            log::debug!("block {index}: {:?}", block.block_type());
            crate::html::block_to_node(&block, &options.inline)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if children.is_empty() {
        return Ok(Node::leaf(ROOT_TAG, ""));
    }
    Ok(Node::parent(ROOT_TAG, children))
}
