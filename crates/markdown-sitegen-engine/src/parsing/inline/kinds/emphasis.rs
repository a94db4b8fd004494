use crate::parsing::inline::types::TextSpan;

/// Strong emphasis, `**text**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";

    pub fn span(text: String) -> TextSpan {
        TextSpan::Bold(text)
    }
}

/// Emphasis, `*text*`.
///
/// Split after [`Bold`], so a lone `*` never sees a `**` pair.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "*";

    pub fn span(text: String) -> TextSpan {
        TextSpan::Italic(text)
    }
}
