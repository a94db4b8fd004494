//! # Block Parsing
//!
//! Two-phase block parsing over blank-line separated blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is cut at blank lines into
//!    trimmed, non-empty blocks
//!
//! 2. **Classification** (`classify`): each block is assigned exactly one
//!    `BlockKind` by an ordered predicate chain with `Paragraph` as fallback
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList)
//! - **`segment`**: `split_blocks` document segmenter
//! - **`classify`**: `MarkdownBlockClassifier`
//!
//! ## Key Invariants
//!
//! - No block is empty or all-whitespace
//! - Classification is total: every block gets exactly one kind
//! - Blocks borrow from the source document

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::MarkdownBlockClassifier;
pub use segment::split_blocks;
pub use types::{Block, BlockKind};
