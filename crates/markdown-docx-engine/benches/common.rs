// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\n**Status:** Draft\n\nParagraph with **bold** and `code` content.\n\n- **Key:** bullet point\n- Another item\n\n1. First step\n2. Second step\n\n| Name | Value |\n|------|-------|\n| a | 1 |\n| b | 2 |\n\n```sql\nSELECT 1;\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!("plain {i} **bold {i}** and `code {i}` "));
    }
    line
}
