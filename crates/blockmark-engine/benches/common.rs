// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code`.\nA [link](https://example.com) on the next line.\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> A quote\n> over two lines\n\n| Name | Count |\n|------|:-----:|\n| a    | 1     |\n| b    | 2     |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_paragraph(words: usize) -> String {
    let mut content = String::new();
    for i in 0..words {
        match i % 5 {
            0 => content.push_str(&format!("**w{i}** ")),
            1 => content.push_str(&format!("_w{i}_ ")),
            2 => content.push_str(&format!("`w{i}` ")),
            3 => content.push_str(&format!("[w{i}](/p/{i}) ")),
            _ => content.push_str(&format!("w{i} ")),
        }
    }
    content
}
