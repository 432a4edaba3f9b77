//! # Block Parsing
//!
//! Blocks are classified whole, after segmentation, by an ordered list of
//! grammar rules.
//!
//! ## Rule Order
//!
//! 1. Heading
//! 2. Fenced code
//! 3. Table
//! 4. Quote
//! 5. Unordered list
//! 6. Ordered list
//! 7. Paragraph (fallback)
//!
//! ## Modules
//!
//! - **`types`**: `BlockType` and the capturing `Block` enum
//! - **`kinds`**: per-kind markers and line grammar (`Heading`, `CodeFence`,
//!   `Table`, `BlockQuote`, lists, `Paragraph`)
//! - **`classify`**: the ordered rule list
//!
//! ## Key Invariants
//!
//! - Classification is total and never fails
//! - Fenced code content is never re-classified or inline parsed
//! - A table whose separator cell count differs from its header is not a table

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::{block_to_block_type, classify};
pub use types::{Block, BlockType};
