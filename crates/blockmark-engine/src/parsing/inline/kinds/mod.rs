//! # Inline Kinds
//!
//! Inline span types that own their syntax markers. The passes in
//! [`super::delimiter`] and [`super::links`] read these constants; they never
//! hardcode `**` or `![`.
//!
//! - **`emphasis`**: paired delimiter rules (bold, italic, code spans)
//! - **`link`**: `[text](url)` and `![alt](url)` markers
//! - **`escape`**: characters a backslash can escape

pub mod emphasis;
pub mod escape;
pub mod link;

pub use emphasis::DelimiterRule;
pub use escape::Escape;
pub use link::{Image, Link};
