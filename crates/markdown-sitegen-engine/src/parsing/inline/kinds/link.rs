use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::types::TextSpan;

/// Inline image, `![alt](url)`.
pub struct Image;

impl Image {
    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
    }

    pub fn span(alt: &str, url: &str) -> TextSpan {
        TextSpan::Image {
            alt: alt.to_string(),
            url: url.to_string(),
        }
    }
}

/// Inline link, `[text](url)`.
///
/// The pattern also matches the tail of image syntax, so images must be
/// extracted first.
pub struct Link;

impl Link {
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
    }

    pub fn span(text: &str, url: &str) -> TextSpan {
        TextSpan::Link {
            text: text.to_string(),
            url: url.to_string(),
        }
    }
}
