use crate::error::InlineError;

use super::{
    cursor::Cursor,
    kinds::DelimiterRule,
    types::{TextKind, TextSpan},
};

/// Splits every plain span on `rule`'s marker, alternating plain and styled
/// pieces. Non-plain spans pass through untouched.
///
/// Escaped occurrences (`\*`) are not markers. Empty pieces are dropped.
///
/// # Errors
/// [`InlineError::UnmatchedDelimiter`] when a plain span holds an odd
/// number of markers.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    rule: &DelimiterRule,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let positions = marker_positions(&span.text, rule);
        if positions.is_empty() {
            if !span.text.is_empty() {
                out.push(span);
            }
            continue;
        }
        if positions.len() % 2 == 1 {
            return Err(InlineError::UnmatchedDelimiter {
                delimiter: rule.marker,
                text: span.text,
            });
        }

        let text = span.text.as_str();
        let mut start = 0;
        for (n, &pos) in positions.iter().enumerate() {
            let piece = &text[start..pos];
            if !piece.is_empty() {
                let kind = if n % 2 == 0 {
                    TextKind::Plain
                } else {
                    rule.kind.clone()
                };
                out.push(TextSpan::new(piece, kind));
            }
            start = pos + rule.marker.len();
        }
        let tail = &text[start..];
        if !tail.is_empty() {
            out.push(TextSpan::plain(tail));
        }
    }

    Ok(out)
}

/// Byte offsets of every unescaped, non-overlapping occurrence of the marker.
fn marker_positions(text: &str, rule: &DelimiterRule) -> Vec<usize> {
    let marker = rule.marker.as_bytes();
    let mut cur = Cursor::new(text);
    let mut found = vec![];

    while !cur.eof() {
        if cur.skip_escape() {
            continue;
        }
        if cur.starts_with(marker) && !(rule.flanking && rule.is_intraword(text, cur.pos())) {
            found.push(cur.pos());
            cur.bump_n(marker.len());
            continue;
        }
        cur.bump();
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn code_span() {
        let spans = vec![TextSpan::plain("This is text with a `code block` word")];
        assert_eq!(
            split_delimiter(spans, &DelimiterRule::CODE).unwrap(),
            vec![
                TextSpan::plain("This is text with a "),
                TextSpan::new("code block", TextKind::Code),
                TextSpan::plain(" word"),
            ]
        );
    }

    #[test]
    fn bold() {
        let spans = vec![TextSpan::plain("This is text with a **bold** word")];
        assert_eq!(
            split_delimiter(spans, &DelimiterRule::BOLD).unwrap(),
            vec![
                TextSpan::plain("This is text with a "),
                TextSpan::new("bold", TextKind::Bold),
                TextSpan::plain(" word"),
            ]
        );
    }

    #[test]
    fn asterisk_italic() {
        let spans = vec![TextSpan::plain("This is text with an *italic* word")];
        assert_eq!(
            split_delimiter(spans, &DelimiterRule::ITALIC_ASTERISK).unwrap(),
            vec![
                TextSpan::plain("This is text with an "),
                TextSpan::new("italic", TextKind::Italic),
                TextSpan::plain(" word"),
            ]
        );
    }

    #[test]
    fn multiple_pairs_in_one_span() {
        let spans = vec![TextSpan::plain("a `b` c `d`")];
        assert_eq!(
            split_delimiter(spans, &DelimiterRule::CODE).unwrap(),
            vec![
                TextSpan::plain("a "),
                TextSpan::new("b", TextKind::Code),
                TextSpan::plain(" c "),
                TextSpan::new("d", TextKind::Code),
            ]
        );
    }

    #[test]
    fn empty_pieces_are_dropped() {
        let spans = vec![TextSpan::plain("`code block` word")];
        assert_eq!(
            split_delimiter(spans, &DelimiterRule::CODE).unwrap(),
            vec![
                TextSpan::new("code block", TextKind::Code),
                TextSpan::plain(" word"),
            ]
        );

        let spans = vec![TextSpan::plain("``")];
        assert_eq!(split_delimiter(spans, &DelimiterRule::CODE).unwrap(), vec![]);
    }

    #[test]
    fn non_plain_spans_pass_through() {
        let spans = vec![TextSpan::new("This is a `bold` node", TextKind::Bold)];
        assert_eq!(
            split_delimiter(spans.clone(), &DelimiterRule::CODE).unwrap(),
            spans
        );
    }

    #[test]
    fn no_spans_in_no_spans_out() {
        assert_eq!(split_delimiter(vec![], &DelimiterRule::CODE).unwrap(), vec![]);
    }

    #[test]
    fn each_input_span_split_independently() {
        let spans = vec![
            TextSpan::plain("This is text with a `code block` word"),
            TextSpan::plain("This is another text with a *italic* word"),
        ];
        assert_eq!(
            split_delimiter(spans, &DelimiterRule::CODE).unwrap(),
            vec![
                TextSpan::plain("This is text with a "),
                TextSpan::new("code block", TextKind::Code),
                TextSpan::plain(" word"),
                TextSpan::plain("This is another text with a *italic* word"),
            ]
        );
    }

    #[test]
    fn unclosed_marker_fails() {
        let spans = vec![TextSpan::plain("This is text with a `code block")];
        assert_eq!(
            split_delimiter(spans, &DelimiterRule::CODE),
            Err(InlineError::UnmatchedDelimiter {
                delimiter: "`",
                text: "This is text with a `code block".to_string(),
            })
        );
    }

    #[test]
    fn escaped_marker_is_not_counted() {
        let spans = vec![TextSpan::plain(r"a \*b\* c")];
        assert_eq!(
            split_delimiter(spans, &DelimiterRule::ITALIC_ASTERISK).unwrap(),
            vec![TextSpan::plain(r"a \*b\* c")]
        );
    }

    #[test]
    fn escaped_backslash_does_not_escape_marker() {
        let spans = vec![TextSpan::plain(r"\\*x*")];
        assert_eq!(
            split_delimiter(spans, &DelimiterRule::ITALIC_ASTERISK).unwrap(),
            vec![
                TextSpan::plain(r"\\"),
                TextSpan::new("x", TextKind::Italic),
            ]
        );
    }

    #[test]
    fn flanking_ignores_intraword_underscores() {
        let rule = DelimiterRule::italic("_", true);
        let spans = vec![TextSpan::plain("call snake_case_name or _this_")];
        assert_eq!(
            split_delimiter(spans, &rule).unwrap(),
            vec![
                TextSpan::plain("call snake_case_name or "),
                TextSpan::new("this", TextKind::Italic),
            ]
        );
    }

    #[test]
    fn without_flanking_intraword_underscores_split() {
        let rule = DelimiterRule::italic("_", false);
        let spans = vec![TextSpan::plain("snake_case_name")];
        assert_eq!(
            split_delimiter(spans, &rule).unwrap(),
            vec![
                TextSpan::plain("snake"),
                TextSpan::new("case", TextKind::Italic),
                TextSpan::plain("name"),
            ]
        );
    }
}
