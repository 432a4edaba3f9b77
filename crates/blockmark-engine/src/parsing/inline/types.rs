use serde::Serialize;

/// The kind of an inline span. Only links and images carry a url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TextKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A contiguous run of inline text tagged with its kind.
///
/// For images `text` is the alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub text: String,
    pub kind: TextKind,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, TextKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, TextKind::Image { url: url.into() })
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, TextKind::Plain)
    }

    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            TextKind::Link { url } | TextKind::Image { url } => Some(url),
            _ => None,
        }
    }
}
