use crate::{
    error::InlineError,
    options::InlineOptions,
    parsing::{
        blocks::{
            Block,
            kinds::{Alignment, BlockQuote, Paragraph, TableBlock},
        },
        inline::{TextKind, TextSpan, text_to_spans},
    },
};

use super::node::Node;

/// Maps one inline span to its element.
pub fn text_span_to_node(span: TextSpan) -> Node {
    match span.kind {
        TextKind::Plain => Node::text(span.text),
        TextKind::Bold => Node::leaf("b", span.text),
        TextKind::Italic => Node::leaf("i", span.text),
        TextKind::Code => Node::leaf("code", span.text),
        TextKind::Link { url } => Node::leaf("a", span.text).with_attr("href", url),
        TextKind::Image { url } => Node::leaf("img", "")
            .with_attr("src", url)
            .with_attr("alt", span.text),
    }
}

pub fn spans_to_nodes(spans: Vec<TextSpan>) -> Vec<Node> {
    spans.into_iter().map(text_span_to_node).collect()
}

/// Wraps the inline nodes of `text` in `tag`.
///
/// Text with no spans (empty, or only markers) becomes an empty leaf, which
/// renders as `<tag></tag>` rather than an invalid empty container.
fn inline_container(
    tag: &str,
    text: &str,
    options: &InlineOptions,
) -> Result<Node, InlineError> {
    let children = spans_to_nodes(text_to_spans(text, options)?);
    Ok(container_or_empty(tag, children))
}

fn container_or_empty(tag: &str, children: Vec<Node>) -> Node {
    if children.is_empty() {
        Node::leaf(tag, "")
    } else {
        Node::parent(tag, children)
    }
}

/// Renders one classified block.
pub fn block_to_node(block: &Block<'_>, options: &InlineOptions) -> Result<Node, InlineError> {
    match block {
        Block::Paragraph { text } => inline_container("p", &Paragraph::fold_lines(text), options),
        Block::Heading { level, lines } => {
            inline_container(&format!("h{level}"), &lines.join(" "), options)
        }
        Block::Code { language, content } => {
            let mut code = Node::leaf("code", *content);
            if let Some(language) = language {
                code = code.with_attr("class", format!("language-{language}"));
            }
            Ok(Node::parent("pre", vec![code]))
        }
        Block::Quote { lines } => {
            inline_container("blockquote", &BlockQuote::join_lines(lines), options)
        }
        Block::UnorderedList { items } => list_to_node("ul", items, options),
        Block::OrderedList { items } => list_to_node("ol", items, options),
        Block::Table(table) => table_to_node(table, options),
    }
}

fn list_to_node(tag: &str, items: &[&str], options: &InlineOptions) -> Result<Node, InlineError> {
    let items = items
        .iter()
        .map(|item| inline_container("li", item, options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(container_or_empty(tag, items))
}

/// Builds `table > thead > tr > th*` and, when there are body rows,
/// `tbody > tr > td*`.
///
/// Short body rows are padded with empty cells up to the header width; long
/// rows keep their extra cells, which get no alignment.
pub fn table_to_node(table: &TableBlock, options: &InlineOptions) -> Result<Node, InlineError> {
    let header_cells = table
        .header
        .iter()
        .enumerate()
        .map(|(i, cell)| table_cell("th", cell, table.alignment(i), options))
        .collect::<Result<Vec<_>, _>>()?;
    let thead = Node::parent("thead", vec![Node::parent("tr", header_cells)]);

    let mut sections = vec![thead];

    if !table.rows.is_empty() {
        let rows = table
            .rows
            .iter()
            .map(|row| table_row(table, row, options))
            .collect::<Result<Vec<_>, _>>()?;
        sections.push(Node::parent("tbody", rows));
    }

    Ok(Node::parent("table", sections))
}

fn table_row(table: &TableBlock, row: &[String], options: &InlineOptions) -> Result<Node, InlineError> {
    let width = row.len().max(table.columns());
    let cells = (0..width)
        .map(|i| {
            let text = row.get(i).map(String::as_str).unwrap_or_default();
            table_cell("td", text, table.alignment(i), options)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(container_or_empty("tr", cells))
}

fn table_cell(
    tag: &str,
    text: &str,
    alignment: Alignment,
    options: &InlineOptions,
) -> Result<Node, InlineError> {
    let cell = inline_container(tag, text, options)?;
    Ok(match alignment.attribute() {
        Some(align) => cell.with_attr("align", align),
        None => cell,
    })
}
