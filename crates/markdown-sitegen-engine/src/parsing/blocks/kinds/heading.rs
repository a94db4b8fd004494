use std::sync::OnceLock;

use regex::Regex;

use crate::error::ConvertError;

/// ATX heading block type (`# Title` .. `###### Title`).
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest supported heading level.
    pub const MAX_LEVEL: usize = 6;

    /// Whether the block opens with 1-6 markers followed by a space.
    pub fn matches(block: &str) -> bool {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX
            .get_or_init(|| Regex::new(r"^#{1,6} ").expect("Invalid heading regex"))
            .is_match(block)
    }

    /// Splits a heading block into its level and the text after the markers.
    ///
    /// The single space after the markers is removed; the rest of the block,
    /// including any further lines, is returned untouched.
    ///
    /// # Errors
    /// [`ConvertError::InvalidHeadingLevel`] when the marker run is not 1-6 long.
    pub fn split(block: &str) -> Result<(usize, &str), ConvertError> {
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return Err(ConvertError::InvalidHeadingLevel { level });
        }
        // MARKER is ASCII, so `level` is also a byte offset.
        let rest = &block[level..];
        Ok((level, rest.strip_prefix(' ').unwrap_or(rest)))
    }
}
