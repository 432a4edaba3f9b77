//! # Inline Parsing
//!
//! Turns the text of one block into an ordered list of [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Tokenizing is a pipeline of passes, each a `Vec<TextSpan> -> Vec<TextSpan>`
//! transform that only looks inside spans still of kind `Plain`:
//!
//! 1. `**` bold
//! 2. `_` and/or `*` italic (see [`ItalicDelimiters`](crate::options::ItalicDelimiters))
//! 3. ``` `` ``` then `` ` `` code spans
//! 4. `![alt](url)` images
//! 5. `[text](url)` links
//! 6. backslash unescaping
//!
//! Passes 1-3 fail on an odd marker count; 4-5 leave anything unmatched as
//! plain text. A backslash suppresses the character after it in every pass.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `TextKind`
//! - **`kinds`**: inline markers and escape rules
//! - **`cursor`**: escape-aware byte cursor shared by the passes
//! - **`delimiter`**: paired-delimiter split pass
//! - **`links`**: image and link carve passes

pub mod cursor;
pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod types;

use crate::{error::InlineError, options::InlineOptions};

pub use delimiter::split_delimiter;
pub use kinds::{DelimiterRule, Escape};
pub use links::{split_images, split_links};
pub use types::{TextKind, TextSpan};

/// Tokenizes `text` into spans covering all of it, minus consumed markers.
///
/// # Errors
/// Any unmatched bold, italic or code delimiter aborts the whole call.
pub fn text_to_spans(text: &str, options: &InlineOptions) -> Result<Vec<TextSpan>, InlineError> {
    log::trace!("tokenizing inline text {text:?}");

    let mut spans = vec![TextSpan::plain(text)];
    spans = split_delimiter(spans, &DelimiterRule::BOLD)?;
    for marker in options.italic.delimiters() {
        spans = split_delimiter(
            spans,
            &DelimiterRule::italic(marker, options.underscore_flanking),
        )?;
    }
    spans = split_delimiter(spans, &DelimiterRule::CODE_DOUBLE)?;
    spans = split_delimiter(spans, &DelimiterRule::CODE)?;
    spans = split_images(spans);
    spans = split_links(spans);
    Ok(unescape_spans(spans))
}

/// Final pass: removes escape backslashes from span text and urls.
pub fn unescape_spans(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    spans
        .into_iter()
        .map(|span| {
            let kind = match span.kind {
                TextKind::Link { url } => TextKind::Link {
                    url: Escape::unescape(&url),
                },
                TextKind::Image { url } => TextKind::Image {
                    url: Escape::unescape(&url),
                },
                other => other,
            };
            TextSpan::new(Escape::unescape(&span.text), kind)
        })
        .collect()
}
