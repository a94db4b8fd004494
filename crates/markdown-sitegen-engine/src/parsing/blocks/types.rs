/// The kind of a block, decided by [`MarkdownBlockClassifier`].
///
/// [`MarkdownBlockClassifier`]: super::MarkdownBlockClassifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `######` followed by a space.
    Heading,
    /// Opened and closed by a backtick fence.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `* ` or `- `.
    UnorderedList,
    /// Line `i` starts with `i. `.
    OrderedList,
    /// Fallback when no other kind matches.
    Paragraph,
}

/// A trimmed, non-empty block of the source document with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Block text, borrowed from the document.
    pub text: &'a str,
    pub kind: BlockKind,
}
