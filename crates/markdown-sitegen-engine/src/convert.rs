//! # Tree Assembly
//!
//! Maps each classified block to a parent node and wraps the document in a
//! single `div`. Inline-bearing blocks go through
//! [`text_to_spans`](crate::parsing::inline::text_to_spans); code blocks are
//! emitted as escaped raw text inside `pre > code`.

use crate::{
    error::ConvertError,
    html::{HtmlNode, LeafNode, ParentNode, Tag},
    parsing::{
        blocks::{
            Block, BlockKind,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
        },
        inline::{TextSpan, text_to_spans},
        parse_document,
    },
};

/// Converts a whole document into a `div` holding one node per block.
///
/// # Errors
/// The first failing block aborts the conversion; no partial tree is
/// returned.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let doc = parse_document(markdown);
    let children = doc
        .blocks
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(Tag::Div, children).into())
}

/// Converts and renders a document.
///
/// A document without blocks renders to an error, since the `div` container
/// would have no children.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_html_node(markdown)?.to_html()?)
}

/// Converts one classified block.
pub fn block_to_html_node(block: &Block<'_>) -> Result<HtmlNode, ConvertError> {
    let node = match block.kind {
        BlockKind::Paragraph => paragraph_to_html_node(block.text)?,
        BlockKind::Heading => heading_to_html_node(block.text)?,
        BlockKind::Code => code_to_html_node(block.text)?,
        BlockKind::Quote => quote_to_html_node(block.text)?,
        BlockKind::UnorderedList => unordered_list_to_html_node(block.text)?,
        BlockKind::OrderedList => ordered_list_to_html_node(block.text)?,
    };
    Ok(node.into())
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(text_to_spans(text)?
        .iter()
        .map(TextSpan::to_html_node)
        .collect())
}

fn paragraph_to_html_node(text: &str) -> Result<ParentNode, ConvertError> {
    // A fence that never closes leaves the block classified as a paragraph.
    if CodeFence::opens(text) && !CodeFence::closes_after_open(text) {
        return Err(ConvertError::MalformedCodeFence {
            block: text.to_string(),
        });
    }
    Ok(ParentNode::new(Tag::P, text_to_children(text)?))
}

fn heading_to_html_node(text: &str) -> Result<ParentNode, ConvertError> {
    let (level, content) = Heading::split(text)?;
    Ok(ParentNode::new(Tag::heading(level)?, text_to_children(content)?))
}

fn code_to_html_node(text: &str) -> Result<ParentNode, ConvertError> {
    let content = CodeFence::content(text)?;
    let code = ParentNode::new(
        Tag::Code,
        vec![LeafNode::raw(html_escape::encode_text(content)).into()],
    );
    Ok(ParentNode::new(Tag::Pre, vec![code.into()]))
}

fn quote_to_html_node(text: &str) -> Result<ParentNode, ConvertError> {
    let joined = BlockQuote::join_lines(text);
    Ok(ParentNode::new(Tag::Blockquote, text_to_children(&joined)?))
}

fn unordered_list_to_html_node(text: &str) -> Result<ParentNode, ConvertError> {
    let items = text
        .lines()
        .map(|line| list_item(UnorderedList::strip_marker(line).unwrap_or(line)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(Tag::Ul, items))
}

fn ordered_list_to_html_node(text: &str) -> Result<ParentNode, ConvertError> {
    let items = text
        .lines()
        .enumerate()
        .map(|(i, line)| list_item(OrderedList::strip_marker(line, i + 1).unwrap_or(line)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(Tag::Ol, items))
}

fn list_item(text: &str) -> Result<HtmlNode, ConvertError> {
    Ok(ParentNode::new(Tag::Li, text_to_children(text)?).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::RenderError;
    use pretty_assertions::assert_eq;

    fn raw(text: &str) -> HtmlNode {
        LeafNode::raw(text).into()
    }

    fn parent(tag: Tag, children: Vec<HtmlNode>) -> HtmlNode {
        ParentNode::new(tag, children).into()
    }

    #[test]
    fn title_and_body() {
        let node = markdown_to_html_node("# Title\n\nBody text").unwrap();
        assert_eq!(
            node,
            parent(
                Tag::Div,
                vec![
                    parent(Tag::H1, vec![raw("Title")]),
                    parent(Tag::P, vec![raw("Body text")]),
                ]
            )
        );
    }

    #[test]
    fn unordered_list_items() {
        let node = markdown_to_html_node("- a\n- b").unwrap();
        assert_eq!(
            node,
            parent(
                Tag::Div,
                vec![parent(
                    Tag::Ul,
                    vec![
                        parent(Tag::Li, vec![raw("a")]),
                        parent(Tag::Li, vec![raw("b")]),
                    ]
                )]
            )
        );
    }

    #[test]
    fn ordered_list_beyond_nine_items_keeps_text_intact() {
        let markdown = (1..=10)
            .map(|i| format!("{i}. item {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let node = markdown_to_html_node(&markdown).unwrap();
        let list = &node.children()[0];
        assert_eq!(list.tag(), Some(Tag::Ol));
        assert_eq!(list.children().len(), 10);
        assert_eq!(list.children()[9], parent(Tag::Li, vec![raw("item 10")]));
    }

    #[test]
    fn heading_levels() {
        let node = markdown_to_html_node("###### deep").unwrap();
        assert_eq!(node.children()[0].tag(), Some(Tag::H6));
    }

    #[test]
    fn heading_content_is_tokenized() {
        let node = markdown_to_html_node("## A **bold** move").unwrap();
        assert_eq!(
            node.children()[0],
            parent(
                Tag::H2,
                vec![
                    raw("A "),
                    LeafNode::new(Tag::B, "bold").into(),
                    raw(" move"),
                ]
            )
        );
    }

    #[test]
    fn quote_lines_joined_with_breaks() {
        let node = markdown_to_html_node("> first line\n> *second* line").unwrap();
        assert_eq!(
            node.children()[0],
            parent(
                Tag::Blockquote,
                vec![
                    raw("first line<br>"),
                    LeafNode::new(Tag::I, "second").into(),
                    raw(" line"),
                ]
            )
        );
    }

    #[test]
    fn code_block_is_not_tokenized() {
        let node = markdown_to_html_node("```\nlet x = a * b;\n```").unwrap();
        assert_eq!(
            node.children()[0],
            parent(
                Tag::Pre,
                vec![parent(Tag::Code, vec![raw("let x = a * b;")])]
            )
        );
    }

    #[test]
    fn code_block_content_is_escaped() {
        let html = markdown_to_html("```\nif a < b && c > d {}\n```").unwrap();
        assert_eq!(
            html,
            "<div><pre><code>if a &lt; b &amp;&amp; c &gt; d {}</code></pre></div>"
        );
    }

    #[test]
    fn inline_code_is_escaped() {
        assert_eq!(
            markdown_to_html("Use `<br>` tags").unwrap(),
            "<div><p>Use <code>&lt;br&gt;</code> tags</p></div>"
        );
    }

    #[test]
    fn unclosed_code_fence_is_malformed() {
        assert_eq!(
            markdown_to_html_node("```code with no closing fence"),
            Err(ConvertError::MalformedCodeFence {
                block: "```code with no closing fence".to_string()
            })
        );
    }

    #[test]
    fn lone_fence_is_malformed() {
        assert!(matches!(
            markdown_to_html_node("Intro\n\n```"),
            Err(ConvertError::MalformedCodeFence { .. })
        ));
    }

    #[test]
    fn closed_fence_followed_by_text_is_a_paragraph() {
        let node = markdown_to_html_node("```\nlet x = 1;\n```\nSee above.").unwrap();
        assert_eq!(
            node.children()[0],
            parent(
                Tag::P,
                vec![
                    LeafNode::new(Tag::Code, "").into(),
                    LeafNode::new(Tag::Code, "\nlet x = 1;\n").into(),
                    LeafNode::new(Tag::Code, "").into(),
                    raw("\nSee above."),
                ]
            )
        );
    }

    #[test]
    fn one_line_fence_followed_by_text_is_a_paragraph() {
        insta::assert_snapshot!(
            markdown_to_html("```x``` is a triple-tick span").unwrap(),
            @"<div><p><code></code><code>x</code><code></code> is a triple-tick span</p></div>"
        );
    }

    #[test]
    fn unbalanced_bold_aborts_document() {
        assert_eq!(
            markdown_to_html_node("# Fine\n\n**unbalanced bold"),
            Err(ConvertError::UnbalancedDelimiter {
                delimiter: "**",
                text: "**unbalanced bold".to_string(),
            })
        );
    }

    #[test]
    fn heading_block_reports_invalid_level() {
        let block = Block {
            text: "####### too deep",
            kind: BlockKind::Heading,
        };
        assert_eq!(
            block_to_html_node(&block),
            Err(ConvertError::InvalidHeadingLevel { level: 7 })
        );
    }

    #[test]
    fn empty_document_fails_to_render() {
        assert_eq!(
            markdown_to_html(""),
            Err(ConvertError::Render(RenderError::MissingChildren {
                tag: Tag::Div
            }))
        );
    }

    #[test]
    fn renders_full_document() {
        let markdown = "# Title\n\nSome **bold** and a [link](https://example.com).\n\n- one\n- *two*\n\n1. first\n2. `second`";
        insta::assert_snapshot!(
            markdown_to_html(markdown).unwrap(),
            @r#"<div><h1>Title</h1><p>Some <b>bold</b> and a <a href="https://example.com">link</a>.</p><ul><li>one</li><li><i>two</i></li></ul><ol><li>first</li><li><code>second</code></li></ol></div>"#
        );
    }
}
