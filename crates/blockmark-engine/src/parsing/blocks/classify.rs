use crate::options::ParseOptions;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Table, UnorderedList},
    types::{Block, BlockType},
};

/// One grammar rule: the captured block when it matches, `None` otherwise.
type Rule = for<'a> fn(&'a str, &ParseOptions) -> Option<Block<'a>>;

/// Rules in priority order. The first match wins; paragraph is the fallback.
const RULES: [Rule; 6] = [
    heading,
    code,
    table,
    quote,
    unordered_list,
    ordered_list,
];

/// Classifies one block. Total: every string maps to exactly one block.
pub fn classify<'a>(block: &'a str, options: &ParseOptions) -> Block<'a> {
    if block.trim().is_empty() {
        return Block::Paragraph { text: block };
    }
    RULES
        .iter()
        .find_map(|rule| rule(block, options))
        .unwrap_or(Block::Paragraph { text: block })
}

/// The [`BlockType`] of a block under default options.
pub fn block_to_block_type(block: &str) -> BlockType {
    classify(block, &ParseOptions::default()).block_type()
}

fn heading<'a>(block: &'a str, options: &ParseOptions) -> Option<Block<'a>> {
    let mut lines = block.lines();
    let (level, content) = Heading::parse(lines.next()?, options.indent.heading)?;
    let lines = std::iter::once(content)
        .chain(lines.map(str::trim))
        .filter(|l| !l.is_empty())
        .collect();
    Some(Block::Heading { level, lines })
}

fn code<'a>(block: &'a str, _options: &ParseOptions) -> Option<Block<'a>> {
    let fenced = CodeFence::find(block)?;
    if fenced.has_outside_text() {
        log::debug!(
            "dropping text outside code fence: before {:?}, after {:?}",
            fenced.before,
            fenced.after
        );
    }
    Some(Block::Code {
        language: fenced.language,
        content: fenced.content,
    })
}

fn table<'a>(block: &'a str, _options: &ParseOptions) -> Option<Block<'a>> {
    Table::parse(block).map(Block::Table)
}

fn quote<'a>(block: &'a str, options: &ParseOptions) -> Option<Block<'a>> {
    let lines = block
        .lines()
        .map(|line| BlockQuote::strip_prefix(line, options.indent.quote))
        .collect::<Option<Vec<_>>>()?;
    Some(Block::Quote { lines })
}

fn unordered_list<'a>(block: &'a str, options: &ParseOptions) -> Option<Block<'a>> {
    let items = block
        .lines()
        .map(|line| UnorderedList::item(line, options.indent.list))
        .collect::<Option<Vec<_>>>()?;
    Some(Block::UnorderedList { items })
}

fn ordered_list<'a>(block: &'a str, options: &ParseOptions) -> Option<Block<'a>> {
    let items = block
        .lines()
        .map(|line| OrderedList::item(line, options.indent.list).map(|(_, content)| content))
        .collect::<Option<Vec<_>>>()?;
    Some(Block::OrderedList { items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::Alignment;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Heading 1", BlockType::Heading(1))]
    #[case("## Heading 2", BlockType::Heading(2))]
    #[case("### Heading 3", BlockType::Heading(3))]
    #[case("#### Heading 4", BlockType::Heading(4))]
    #[case("##### Heading 5", BlockType::Heading(5))]
    #[case("###### Heading 6", BlockType::Heading(6))]
    #[case("## Heading 2 ##", BlockType::Heading(2))]
    #[case("# ", BlockType::Heading(1))]
    #[case("   # H1", BlockType::Heading(1))]
    #[case("    # H1", BlockType::Paragraph)]
    #[case(" #Not a heading", BlockType::Paragraph)]
    #[case("##Heading 2", BlockType::Paragraph)]
    #[case("####### Heading 7", BlockType::Paragraph)]
    fn headings(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(block_to_block_type(block), expected);
    }

    #[rstest]
    #[case("```code\nblock\n```", BlockType::Code)]
    #[case("```\nprint('hello')\n```", BlockType::Code)]
    #[case("```  \nsome code\n  ```", BlockType::Code)]
    #[case("```code block\n\n```", BlockType::Code)]
    #[case("```\n```", BlockType::Code)]
    #[case("``````", BlockType::Code)]
    #[case("```python\nprint('hi')\n```", BlockType::Code)]
    #[case("code block```", BlockType::Paragraph)]
    #[case("```code block", BlockType::Paragraph)]
    fn code_blocks(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(block_to_block_type(block), expected);
    }

    #[rstest]
    #[case("> This is a quote", BlockType::Quote)]
    #[case("> Line 1\n> Line 2", BlockType::Quote)]
    #[case(">  indented quote", BlockType::Quote)]
    #[case("> ", BlockType::Quote)]
    #[case("> \n> ", BlockType::Quote)]
    #[case("   > Quote", BlockType::Quote)]
    #[case("> Line 1\nLine 2", BlockType::Paragraph)]
    #[case("This is not > a quote", BlockType::Paragraph)]
    #[case("     > Quote", BlockType::Paragraph)]
    fn quotes(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(block_to_block_type(block), expected);
    }

    #[rstest]
    #[case("- Item 1\n- Item 2", BlockType::UnorderedList)]
    #[case("- Another item", BlockType::UnorderedList)]
    #[case("-   indented item", BlockType::UnorderedList)]
    #[case("- Item 1\nItem 2", BlockType::Paragraph)]
    #[case("Not - a list item", BlockType::Paragraph)]
    #[case("-Item", BlockType::Paragraph)]
    #[case("- ", BlockType::Paragraph)]
    fn unordered_lists(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(block_to_block_type(block), expected);
    }

    #[rstest]
    #[case("1. Item 1\n2. Item 2", BlockType::OrderedList)]
    #[case("1. Item", BlockType::OrderedList)]
    #[case("1. Item 1\n2. Item 2\n3. Item 3", BlockType::OrderedList)]
    #[case("1. Item 1\n3. Item 2", BlockType::OrderedList)]
    #[case("2. a\n3. b", BlockType::OrderedList)]
    #[case("1. a\n1. b", BlockType::OrderedList)]
    #[case("1. Item 1\n2.Item 2", BlockType::Paragraph)]
    #[case("1 Item 1\n2. Item 2", BlockType::Paragraph)]
    #[case("1. Ordered\n- Unordered", BlockType::Paragraph)]
    fn ordered_lists(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(block_to_block_type(block), expected);
    }

    #[rstest]
    #[case("| A | B |\n|---|---|\n| a | b |", BlockType::Table)]
    #[case("| A | B |\n|:---:|---:|", BlockType::Table)]
    #[case("A | B\n---", BlockType::Paragraph)]
    #[case("| A | B |\n|---|---|---|", BlockType::Paragraph)]
    #[case("| A | B |", BlockType::Paragraph)]
    fn tables(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(block_to_block_type(block), expected);
    }

    #[rstest]
    #[case("This is a normal paragraph.")]
    #[case("A paragraph with\nmultiple lines.")]
    #[case("A line with # but not a heading")]
    #[case("A line with - but not a list")]
    #[case("A line with > but not a quote")]
    #[case("A line with 1. but not an ordered list")]
    #[case("")]
    #[case("   ")]
    fn paragraphs(#[case] block: &str) {
        assert_eq!(block_to_block_type(block), BlockType::Paragraph);
    }

    #[test]
    fn heading_wins_over_code() {
        assert_eq!(block_to_block_type("# Title with ```fence```"), BlockType::Heading(1));
    }

    #[test]
    fn code_wins_over_quote() {
        assert_eq!(block_to_block_type("> ```\n> x\n> ```"), BlockType::Code);
    }

    #[test]
    fn classification_is_deterministic() {
        let block = "| A |\n|---|\n| a |";
        assert_eq!(block_to_block_type(block), block_to_block_type(block));
    }

    #[test]
    fn heading_captures_level_and_content() {
        let options = ParseOptions::default();
        assert_eq!(
            classify("## Some *title*\ncontinued", &options),
            Block::Heading {
                level: 2,
                lines: vec!["Some *title*", "continued"],
            }
        );
    }

    #[test]
    fn quote_captures_stripped_lines() {
        let options = ParseOptions::default();
        assert_eq!(
            classify("> one\n>two\n>", &options),
            Block::Quote {
                lines: vec!["one", "two", ""],
            }
        );
    }

    #[test]
    fn lists_capture_items() {
        let options = ParseOptions::default();
        assert_eq!(
            classify("- a\n- b", &options),
            Block::UnorderedList {
                items: vec!["a", "b"],
            }
        );
        assert_eq!(
            classify("7. x\n3. y", &options),
            Block::OrderedList {
                items: vec!["x", "y"],
            }
        );
    }

    #[test]
    fn table_captures_alignment() {
        let options = ParseOptions::default();
        match classify("| A | B |\n|---|---:|", &options) {
            Block::Table(table) => {
                assert_eq!(table.alignments, vec![Alignment::None, Alignment::Right])
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn list_indent_threshold_is_separate() {
        let mut options = ParseOptions::default();
        assert_eq!(classify(" - a", &options).block_type(), BlockType::Paragraph);
        options.indent.list = 1;
        assert_eq!(classify(" - a", &options).block_type(), BlockType::UnorderedList);
        assert_eq!(options.indent.quote, 3);
    }
}
