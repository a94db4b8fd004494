/// Blank-line boundary between blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Cuts a document into trimmed blocks at each blank line.
///
/// Pieces that are empty after trimming are dropped, so runs of blank lines
/// never produce empty blocks. Document order is preserved.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
