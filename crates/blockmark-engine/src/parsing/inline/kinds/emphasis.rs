use crate::parsing::inline::types::TextKind;

/// A paired delimiter whose occurrences alternate plain and styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterRule {
    pub marker: &'static str,
    pub kind: TextKind,
    /// Skip occurrences with an alphanumeric character on both sides.
    pub flanking: bool,
}

impl DelimiterRule {
    pub const BOLD: DelimiterRule = DelimiterRule {
        marker: "**",
        kind: TextKind::Bold,
        flanking: false,
    };

    pub const ITALIC_UNDERSCORE: DelimiterRule = DelimiterRule {
        marker: "_",
        kind: TextKind::Italic,
        flanking: false,
    };

    pub const ITALIC_ASTERISK: DelimiterRule = DelimiterRule {
        marker: "*",
        kind: TextKind::Italic,
        flanking: false,
    };

    /// Double backticks let a code span contain a single literal backtick.
    pub const CODE_DOUBLE: DelimiterRule = DelimiterRule {
        marker: "``",
        kind: TextKind::Code,
        flanking: false,
    };

    pub const CODE: DelimiterRule = DelimiterRule {
        marker: "`",
        kind: TextKind::Code,
        flanking: false,
    };

    /// Builds the italic rule for `marker`, applying `flanking` to `_` only.
    pub fn italic(marker: &str, flanking: bool) -> DelimiterRule {
        if marker == Self::ITALIC_UNDERSCORE.marker {
            DelimiterRule {
                flanking,
                ..Self::ITALIC_UNDERSCORE
            }
        } else {
            Self::ITALIC_ASTERISK
        }
    }

    /// Whether an occurrence at byte `pos` of `text` is intraword.
    pub fn is_intraword(&self, text: &str, pos: usize) -> bool {
        let before = text[..pos].chars().next_back();
        let after = text[pos + self.marker.len()..].chars().next();
        matches!((before, after), (Some(b), Some(a)) if b.is_alphanumeric() && a.is_alphanumeric())
    }
}
