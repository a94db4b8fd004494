/// Unordered list block type (`* item` / `- item`).
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    pub fn matches(block: &str) -> bool {
        block
            .lines()
            .all(|line| Self::strip_marker(line).is_some())
    }

    /// Returns the item text after its marker, or `None` if the line has none.
    pub fn strip_marker(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }
}

/// Ordered list block type (`1. item`, `2. item`, ...).
///
/// Numbering must start at 1 and increase by one per line.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// The marker expected on the 1-based line `number`.
    pub fn marker(number: usize) -> String {
        format!("{number}{}", Self::SEPARATOR)
    }

    pub fn matches(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| Self::strip_marker(line, i + 1).is_some())
    }

    /// Returns the item text after the marker for line `number`.
    ///
    /// The marker width follows the number, so `10. ` is stripped as
    /// four characters.
    pub fn strip_marker(line: &str, number: usize) -> Option<&str> {
        line.strip_prefix(Self::marker(number).as_str())
    }
}
