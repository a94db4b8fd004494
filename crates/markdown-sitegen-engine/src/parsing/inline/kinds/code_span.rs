use crate::parsing::inline::types::TextSpan;

/// Code span inline type with owned delimiter constant.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const DELIMITER: &'static str = "`";

    pub fn span(text: String) -> TextSpan {
        TextSpan::Code(text)
    }
}
