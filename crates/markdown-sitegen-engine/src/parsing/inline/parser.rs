use regex::Regex;

use crate::error::ConvertError;

use super::{
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::TextSpan,
};

/// Parses inline markdown into a sequence of [`TextSpan`]s.
///
/// # Pass Order
/// Images, links, bold, italic, code. Each pass only rewrites `Plain` spans
/// left by the previous one, so syntax consumed early (an image's `[..](..)`,
/// a url containing `*`) is never re-read by a later pass.
///
/// # Returns
/// Spans covering the whole input with empty `Plain` spans removed. An empty
/// input yields a single empty `Plain` span.
///
/// # Errors
/// [`ConvertError::UnbalancedDelimiter`] when a `**`, `*` or `` ` `` is left
/// without a partner.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    if text.is_empty() {
        return Ok(vec![TextSpan::Plain(String::new())]);
    }

    let spans = vec![TextSpan::Plain(text.to_string())];
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = split_delimiter(spans, Bold::DELIMITER, Bold::span)?;
    let spans = split_delimiter(spans, Italic::DELIMITER, Italic::span)?;
    let spans = split_delimiter(spans, CodeSpan::DELIMITER, CodeSpan::span)?;

    Ok(spans
        .into_iter()
        .filter(|span| !(span.is_plain() && span.text().is_empty()))
        .collect())
}

/// Splits every `![alt](url)` out of the plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, Image::pattern(), Image::span)
}

/// Splits every `[text](url)` out of the plain spans.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, Link::pattern(), Link::span)
}

/// Splits plain spans on `delimiter`, alternating plain and styled parts.
///
/// Non-plain spans pass through unchanged. An even number of parts means an
/// opening delimiter has no partner.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    styled: fn(String) -> TextSpan,
) -> Result<Vec<TextSpan>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };
        if !text.contains(delimiter) {
            out.push(TextSpan::Plain(text));
            continue;
        }

        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ConvertError::UnbalancedDelimiter {
                delimiter,
                text: text.clone(),
            });
        }
        for (i, part) in parts.into_iter().enumerate() {
            let part = part.to_string();
            out.push(if i % 2 == 0 {
                TextSpan::Plain(part)
            } else {
                styled(part)
            });
        }
    }

    Ok(out)
}

/// Replaces each match of `pattern` in plain spans with the span built from
/// its two capture groups, leftmost first.
fn split_pattern(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    build: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let mut rest_start = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push(TextSpan::Plain(text[rest_start..whole.start()].to_string()));
            out.push(build(&caps[1], &caps[2]));
            rest_start = whole.end();
        }
        out.push(TextSpan::Plain(text[rest_start..].to_string()));
    }

    out
}
