/// Blockquote block type with owned delimiter constants.
///
/// All blockquote syntax knowledge lives here, not in the classifier or the
/// converter.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Inserted between quote lines once their prefixes are stripped.
    pub const LINE_BREAK: &'static str = "<br>";

    /// Whether every line of the block carries the quote prefix.
    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips one `>` and at most one following space from a line.
    ///
    /// Lines without the prefix are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// Joins the stripped lines of a quote block with [`Self::LINE_BREAK`].
    pub fn join_lines(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join(Self::LINE_BREAK)
    }
}
