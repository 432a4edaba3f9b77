/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback when no other rule
/// matches. Their line breaks fold into single spaces before inline parsing.
pub struct Paragraph;

impl Paragraph {
    pub fn fold_lines(text: &str) -> String {
        text.replace('\n', " ")
    }
}
