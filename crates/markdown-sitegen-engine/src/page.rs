//! Title extraction and template substitution for whole pages.

use crate::{convert::markdown_to_html, error::ConvertError, parsing::blocks::kinds::Heading};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Returns the text of the level-1 heading that opens the document.
///
/// # Errors
/// - [`ConvertError::MisplacedTitle`] when the first non-blank line is a
///   heading of another level
/// - [`ConvertError::MissingTitle`] for any other first line, or an empty
///   document
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    let first = markdown
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or(ConvertError::MissingTitle)?;

    if !Heading::matches(first) {
        return Err(ConvertError::MissingTitle);
    }
    match Heading::split(first)? {
        (1, title) => Ok(title.trim().to_string()),
        (level, _) => Err(ConvertError::MisplacedTitle { level }),
    }
}

/// Substitutes every title and content placeholder in `template`.
pub fn render_page(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Converts a document and embeds it in `template`.
pub fn generate_page_html(markdown: &str, template: &str) -> Result<String, ConvertError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    Ok(render_page(template, &title, &content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TEMPLATE: &str =
        "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    #[rstest]
    #[case("# Title\n\nBody text", "Title")]
    #[case("#   Spaced out   ", "Spaced out")]
    #[case("\n\n  # After blank lines\n\ntext", "After blank lines")]
    #[case("# Hello **world**", "Hello **world**")]
    fn extracts_title(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(extract_title(markdown).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   \n\n")]
    #[case("Just a paragraph\n\n# Late title")]
    #[case("#NoSpace")]
    fn missing_title(#[case] markdown: &str) {
        assert_eq!(extract_title(markdown), Err(ConvertError::MissingTitle));
    }

    #[rstest]
    #[case("## Second level", 2)]
    #[case("###### Sixth level", 6)]
    fn misplaced_title(#[case] markdown: &str, #[case] level: usize) {
        assert_eq!(
            extract_title(markdown),
            Err(ConvertError::MisplacedTitle { level })
        );
    }

    #[test]
    fn replaces_every_placeholder() {
        let page = render_page("{{ Title }} | {{ Title }} | {{ Content }}", "T", "<p>c</p>");
        assert_eq!(page, "T | T | <p>c</p>");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(render_page("<html></html>", "T", "C"), "<html></html>");
    }

    #[test]
    fn generates_full_page() {
        insta::assert_snapshot!(
            generate_page_html("# Welcome\n\nHello *there*.", TEMPLATE).unwrap(),
            @"<html><head><title>Welcome</title></head><body><div><h1>Welcome</h1><p>Hello <i>there</i>.</p></div></body></html>"
        );
    }

    #[test]
    fn conversion_errors_propagate() {
        assert!(matches!(
            generate_page_html("# Title\n\n**broken", TEMPLATE),
            Err(ConvertError::UnbalancedDelimiter { .. })
        ));
    }
}
