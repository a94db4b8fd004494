use crate::html::{HtmlNode, LeafNode, Tag};

/// A run of inline text with one semantic role.
///
/// Only `Link` and `Image` carry a url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl TextSpan {
    /// The span's text (alt text for images).
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(text)
            | TextSpan::Bold(text)
            | TextSpan::Italic(text)
            | TextSpan::Code(text)
            | TextSpan::Link { text, .. } => text,
            TextSpan::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, TextSpan::Plain(_))
    }

    /// Converts the span into a leaf node.
    ///
    /// Plain text becomes a raw leaf; code text is escaped like a code
    /// block; images become an empty `img` element carrying `src` then `alt`.
    pub fn to_html_node(&self) -> HtmlNode {
        let leaf = match self {
            TextSpan::Plain(text) => LeafNode::raw(text.as_str()),
            TextSpan::Bold(text) => LeafNode::new(Tag::B, text.as_str()),
            TextSpan::Italic(text) => LeafNode::new(Tag::I, text.as_str()),
            TextSpan::Code(text) => LeafNode::new(Tag::Code, html_escape::encode_text(text)),
            TextSpan::Link { text, url } => {
                LeafNode::new(Tag::A, text.as_str()).with_attribute("href", url.as_str())
            }
            TextSpan::Image { alt, url } => LeafNode::new(Tag::Img, "")
                .with_attribute("src", url.as_str())
                .with_attribute("alt", alt.as_str()),
        };
        leaf.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            TextSpan::Link {
                text: "a".into(),
                url: "u".into()
            },
            TextSpan::Link {
                text: "a".into(),
                url: "u".into()
            }
        );
        assert_ne!(
            TextSpan::Plain("This is a text".into()),
            TextSpan::Bold("This is a text".into())
        );
        assert_ne!(
            TextSpan::Plain("This is a text".into()),
            TextSpan::Plain("This is a different text".into())
        );
    }

    #[test]
    fn url_only_on_links_and_images() {
        assert_eq!(TextSpan::Bold("b".into()).url(), None);
        assert_eq!(
            TextSpan::Image {
                alt: "a".into(),
                url: "u".into()
            }
            .url(),
            Some("u")
        );
    }

    #[rstest]
    #[case(TextSpan::Plain("I am normal".into()), "I am normal")]
    #[case(TextSpan::Bold("I am bold".into()), "<b>I am bold</b>")]
    #[case(TextSpan::Italic("I am italic".into()), "<i>I am italic</i>")]
    #[case(
        TextSpan::Code("I am some code line\nHello World".into()),
        "<code>I am some code line\nHello World</code>"
    )]
    #[case(TextSpan::Code("<br> & co".into()), "<code>&lt;br&gt; &amp; co</code>")]
    #[case(
        TextSpan::Link { text: "I am a hyperlink, deal with it".into(), url: "https://superlink.org".into() },
        r#"<a href="https://superlink.org">I am a hyperlink, deal with it</a>"#
    )]
    #[case(
        TextSpan::Image { alt: "image of something".into(), url: "https://imglink.com".into() },
        r#"<img src="https://imglink.com" alt="image of something"></img>"#
    )]
    fn span_to_html(#[case] span: TextSpan, #[case] expected: &str) {
        assert_eq!(span.to_html_node().to_html().unwrap(), expected);
    }
}
