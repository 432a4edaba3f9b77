/// `[text](url)` markers. The url may hold balanced parentheses.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    /// A `[` right after this byte belongs to an image, never a link.
    pub const IMAGE_BANG: u8 = b'!';
}

/// `![alt](url)` markers. The url may not hold unescaped parentheses.
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8; 2] = b"![";
}
