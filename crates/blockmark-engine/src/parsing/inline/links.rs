use super::{
    cursor::Cursor,
    kinds::{Image, Link},
    types::TextSpan,
};

/// Carves every `![alt](url)` out of the plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    carve(spans, try_parse_image)
}

/// Carves every `[text](url)` not preceded by `!` out of the plain spans.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    carve(spans, try_parse_link)
}

/// Runs `try_parse` at each position of each plain span, keeping the text
/// between matches as plain spans. Non-plain spans pass through.
fn carve(
    spans: Vec<TextSpan>,
    try_parse: fn(&mut Cursor<'_>, &str) -> Option<TextSpan>,
) -> Vec<TextSpan> {
    // Helper to flush accumulated text as a plain span
    fn flush(out: &mut Vec<TextSpan>, text: &str) {
        if !text.is_empty() {
            out.push(TextSpan::plain(text));
        }
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut cur = Cursor::new(text);
        let mut text_start = 0;

        while !cur.eof() {
            let start = cur.pos();
            if let Some(found) = try_parse(&mut cur, text) {
                flush(&mut out, &text[text_start..start]);
                out.push(found);
                text_start = cur.pos();
                continue;
            }
            cur.advance();
        }

        flush(&mut out, &text[text_start..]);
    }
    out
}

/// Attempts `![alt](url)` at the cursor. Restores the cursor on failure.
fn try_parse_image(cur: &mut Cursor<'_>, text: &str) -> Option<TextSpan> {
    if !cur.starts_with(Image::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Image::OPEN.len());

    let parsed = scan_label(cur).and_then(|(alt_start, alt_end)| {
        let (url_start, url_end) = scan_flat_url(cur)?;
        Some(TextSpan::image(
            &text[alt_start..alt_end],
            &text[url_start..url_end],
        ))
    });

    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

/// Attempts `[text](url)` at the cursor. Restores the cursor on failure.
fn try_parse_link(cur: &mut Cursor<'_>, text: &str) -> Option<TextSpan> {
    if cur.peek() != Some(Link::OPEN) || cur.last_unescaped() == Some(Link::IMAGE_BANG) {
        return None;
    }

    let saved = cur.clone();
    cur.bump();

    let parsed = scan_label(cur).and_then(|(label_start, label_end)| {
        let (url_start, url_end) = scan_nested_url(cur)?;
        Some(TextSpan::link(
            &text[label_start..label_end],
            &text[url_start..url_end],
        ))
    });

    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

/// Scans label text up to the closing `]`, leaving the cursor after it.
///
/// An unescaped `[` inside the label aborts, so the innermost bracket pair
/// wins when brackets nest.
fn scan_label(cur: &mut Cursor<'_>) -> Option<(usize, usize)> {
    let start = cur.pos();
    loop {
        if cur.skip_escape() {
            continue;
        }
        match cur.peek()? {
            Link::CLOSE => break,
            Link::OPEN => return None,
            _ => {
                cur.bump();
            }
        }
    }
    let end = cur.pos();
    cur.bump(); // ]
    Some((start, end))
}

/// Scans an image url: `(` then anything but unescaped parentheses, then `)`.
fn scan_flat_url(cur: &mut Cursor<'_>) -> Option<(usize, usize)> {
    if cur.peek() != Some(Link::URL_OPEN) {
        return None;
    }
    cur.bump();
    let start = cur.pos();
    loop {
        if cur.skip_escape() {
            continue;
        }
        match cur.peek()? {
            Link::URL_CLOSE => break,
            Link::URL_OPEN => return None,
            _ => {
                cur.bump();
            }
        }
    }
    let end = cur.pos();
    cur.bump(); // )
    Some((start, end))
}

/// Scans a link url: balanced parentheses allowed, whitespace not.
fn scan_nested_url(cur: &mut Cursor<'_>) -> Option<(usize, usize)> {
    if cur.peek() != Some(Link::URL_OPEN) {
        return None;
    }
    cur.bump();
    let start = cur.pos();
    let mut depth = 0usize;
    loop {
        if cur.skip_escape() {
            continue;
        }
        match cur.peek()? {
            Link::URL_CLOSE if depth == 0 => break,
            Link::URL_CLOSE => depth -= 1,
            Link::URL_OPEN => depth += 1,
            b if b.is_ascii_whitespace() => return None,
            _ => {}
        }
        cur.bump();
    }
    let end = cur.pos();
    cur.bump(); // )
    Some((start, end))
}
