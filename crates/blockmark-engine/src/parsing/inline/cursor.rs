/// A byte cursor over inline text that understands backslash escapes.
///
/// Every marker the inline passes look for is ASCII, so positions where a
/// marker is found are always char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    i: usize,
    /// The last byte stepped over outside an escape, if any.
    last: Option<u8>,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            last: None,
        }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// The previous byte, or `None` at the start or right after an escape.
    pub fn last_unescaped(&self) -> Option<u8> {
        self.last
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        self.last = Some(b);
        Some(b)
    }

    /// Advances by `n` bytes. Caller guarantees they are there.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
        self.last = self.s.as_bytes().get(self.i.wrapping_sub(1)).copied();
    }

    /// Steps over `\` and the whole character after it.
    ///
    /// Returns `false` (and does not move) when not at an escape. A trailing
    /// lone backslash is not an escape.
    pub fn skip_escape(&mut self) -> bool {
        if self.peek() != Some(b'\\') {
            return false;
        }
        let Some(escaped) = self.s[self.i + 1..].chars().next() else {
            return false;
        };
        self.i += 1 + escaped.len_utf8();
        self.last = None;
        true
    }

    /// Advances over one unit of text: an escape pair or a single byte.
    pub fn advance(&mut self) {
        if !self.skip_escape() {
            self.bump();
        }
    }
}
