/// A fenced region found inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedCode<'a> {
    /// First word of the info string on the opening fence line, if any.
    pub language: Option<&'a str>,
    /// Everything between the fences, verbatim.
    pub content: &'a str,
    /// Trimmed block text outside the fences. Not rendered.
    pub before: &'a str,
    pub after: &'a str,
}

impl FencedCode<'_> {
    pub fn has_outside_text(&self) -> bool {
        !self.before.is_empty() || !self.after.is_empty()
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Finds the first fenced region in `block`.
    ///
    /// The first ```` ``` ```` opens and the next one closes, possibly on a
    /// later line. When a newline follows the opening fence before the close,
    /// the text up to it is the info string and the content starts after it.
    pub fn find(block: &str) -> Option<FencedCode<'_>> {
        let open = block.find(Self::BACKTICKS)?;
        let after_open = &block[open + Self::BACKTICKS.len()..];
        let close = after_open.find(Self::BACKTICKS)?;
        let inner = &after_open[..close];
        let before = block[..open].trim();
        let after = after_open[close + Self::BACKTICKS.len()..].trim();

        let (language, content) = match inner.split_once('\n') {
            Some((info, content)) => (info.split_whitespace().next(), content),
            None => (None, inner),
        };
        Some(FencedCode {
            language,
            content,
            before,
            after,
        })
    }
}
