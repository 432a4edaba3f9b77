//! # HTML Node Tree
//!
//! - **`node`**: the `Node` element tree and its `render` serializer
//! - **`convert`**: turns inline spans and classified blocks into nodes

pub mod convert;
pub mod node;

pub use convert::{block_to_node, spans_to_nodes, table_to_node, text_span_to_node};
pub use node::{Attributes, Node};
