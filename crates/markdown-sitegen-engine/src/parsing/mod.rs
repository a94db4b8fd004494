pub mod blocks;
pub mod inline;

use blocks::{Block, MarkdownBlockClassifier, split_blocks};

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<Block<'a>>,
}

/// Segments a document and classifies every block.
pub fn parse_document(markdown: &str) -> ParsedDoc<'_> {
    let classifier = MarkdownBlockClassifier;
    let blocks = split_blocks(markdown)
        .into_iter()
        .map(|text| Block {
            text,
            kind: classifier.classify(text),
        })
        .collect();

    ParsedDoc { blocks }
}
