use serde::{Deserialize, Serialize};

/// Which single-character delimiters produce italic spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItalicDelimiters {
    /// `_italic_` only.
    Underscore,
    /// `*italic*` only.
    Asterisk,
    /// `_` pass first, then `*`.
    #[default]
    Both,
}

impl ItalicDelimiters {
    pub fn delimiters(self) -> &'static [&'static str] {
        match self {
            ItalicDelimiters::Underscore => &["_"],
            ItalicDelimiters::Asterisk => &["*"],
            ItalicDelimiters::Both => &["_", "*"],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineOptions {
    pub italic: ItalicDelimiters,
    /// Ignore `_` between two alphanumeric characters (`snake_case_word`).
    pub underscore_flanking: bool,
}

/// Leading spaces tolerated before a block marker, per block kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentLimits {
    pub heading: usize,
    pub quote: usize,
    pub list: usize,
}

impl Default for IndentLimits {
    fn default() -> Self {
        Self {
            heading: 3,
            quote: 3,
            list: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub inline: InlineOptions,
    pub indent: IndentLimits,
}
