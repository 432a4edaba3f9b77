/// Backslash escapes for inline markers.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: char = '\\';

    /// Characters whose escaping removes the backslash from the output.
    pub const ESCAPABLE: &'static [char] = &['\\', '*', '_', '`', '!', '[', ']', '(', ')'];

    pub fn is_escapable(c: char) -> bool {
        Self::ESCAPABLE.contains(&c)
    }

    /// Drops the backslash in front of every escapable character.
    ///
    /// A backslash before any other character is kept as written.
    pub fn unescape(s: &str) -> String {
        if !s.contains(Self::BACKSLASH) {
            return s.to_string();
        }
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == Self::BACKSLASH
                && let Some(&next) = chars.peek()
            {
                if Self::is_escapable(next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
                // Any other escaped char keeps its backslash; step over it so
                // `\\` pairs stay intact.
                out.push(c);
                out.push(next);
                chars.next();
                continue;
            }
            out.push(c);
        }
        out
    }
}
