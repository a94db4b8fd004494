use std::fmt;

use crate::error::ConvertError;

/// HTML element names emitted by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    P,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    B,
    I,
    Code,
    Pre,
    A,
    Img,
    Blockquote,
    Ul,
    Ol,
    Li,
}

impl Tag {
    /// The element name as written in markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::P => "p",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
            Tag::B => "b",
            Tag::I => "i",
            Tag::Code => "code",
            Tag::Pre => "pre",
            Tag::A => "a",
            Tag::Img => "img",
            Tag::Blockquote => "blockquote",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Li => "li",
        }
    }

    /// Maps a heading level to `h1`..`h6`.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidHeadingLevel`] outside `1..=6`.
    pub fn heading(level: usize) -> Result<Tag, ConvertError> {
        match level {
            1 => Ok(Tag::H1),
            2 => Ok(Tag::H2),
            3 => Ok(Tag::H3),
            4 => Ok(Tag::H4),
            5 => Ok(Tag::H5),
            6 => Ok(Tag::H6),
            _ => Err(ConvertError::InvalidHeadingLevel { level }),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
