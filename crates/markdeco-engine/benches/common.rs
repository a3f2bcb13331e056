// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title with **strong** text\n\nParagraph with *emphasis*, `code` and ~~struck~~ words.\n\n> Quoted **line**\n> > nested *quote*\n\n- Bullet point\n  - Nested item\n- [x] Done task\n\n99. ordered\n100. items\n\n";
    base.repeat(size)
}

/// Deeply nested containers: every level adds a quote and a list item.
#[allow(dead_code)]
pub fn generate_nested_containers(depth: usize) -> String {
    let mut prefix = String::new();
    let mut content = String::new();
    for level in 0..depth {
        prefix.push_str(if level % 2 == 0 { "> " } else { "- " });
        content.push_str(&format!("{prefix}level {level} with **mark**\n"));
    }
    content
}

/// One host block per line, the way an editor holding paragraphs sees it.
#[allow(dead_code)]
pub fn generate_line_blocks(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 4 {
            0 => format!("## Heading {i}"),
            1 => format!("Some **bold** and *italic* text on line {i}"),
            2 => format!("> quoted `code` {i}"),
            _ => format!("- item {i}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
