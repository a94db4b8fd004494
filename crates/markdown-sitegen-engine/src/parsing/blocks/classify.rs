use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies whole blocks for the conversion phase.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    /// Classifies a trimmed block into exactly one [`BlockKind`].
    ///
    /// Predicates are tried in priority order and the first match wins:
    /// heading, code, quote, unordered list, ordered list. Anything else is
    /// a paragraph, so classification never fails.
    pub fn classify(&self, block: &str) -> BlockKind {
        if Heading::matches(block) {
            BlockKind::Heading
        } else if CodeFence::encloses(block) {
            BlockKind::Code
        } else if BlockQuote::matches(block) {
            BlockKind::Quote
        } else if UnorderedList::matches(block) {
            BlockKind::UnorderedList
        } else if OrderedList::matches(block) {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        }
    }
}
