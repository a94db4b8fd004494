// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "## Section\n\nParagraph with **some** content and a [link](https://example.com).\n\n- Bullet point\n- Another *item*\n\n> Quoted line\n> with a second line\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    format!("# Title\n\n{}", base.repeat(size))
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::from("# Benchmark\n\n");

    for section in 0..sections {
        content.push_str(&format!("## Section {}\n\n", section));
        content.push_str(&generate_nested_content(depth, 3));
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    let header_prefix = "#".repeat(current_level);

    content.push_str(&format!(
        "{} Subsection Level {}\n\n",
        header_prefix, current_level
    ));
    content.push_str("Some paragraph content with `inline code` and *emphasis*. This helps create realistic document structure for benchmarking.\n\n");

    for i in 1..=12 {
        content.push_str(&format!("{}. Item {} at level {}\n", i, i, current_level));
    }
    content.push('\n');

    if current_level % 3 == 0 {
        content.push_str("```rust\nfn benchmark_function() {\n    let value = 42;\n    println!(\"{}\", value);\n}\n```\n\n");
    }

    if remaining_depth > 1 && current_level < 6 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_complex_markdown(50, 4)
}
