/// Splits a document into blocks on runs of blank lines.
///
/// Line endings are normalised to `\n` first. Each block is trimmed, empty
/// blocks are dropped and order is kept.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let normalized = markdown.replace("\r\n", "\n").replace('\r', "\n");

    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
        if current.is_empty() {
            return;
        }
        let joined = current.join("\n");
        let trimmed = joined.trim();
        if !trimmed.is_empty() {
            blocks.push(trimmed.to_string());
        }
        current.clear();
    }

    for line in normalized.split('\n') {
        if line.trim().is_empty() {
            flush(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    flush(&mut blocks, &mut current);

    blocks
}
