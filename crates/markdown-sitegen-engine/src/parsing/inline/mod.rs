//! # Inline Parsing
//!
//! Cascading span splitting over the text of one block.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text
//! left once block syntax (heading markers, quote prefixes, list markers)
//! has been stripped.
//!
//! The parser is a fixed pipeline of pure passes over `Vec<TextSpan>`:
//! images, links, bold, italic, code. Each pass only looks inside `Plain`
//! spans, so whatever an earlier pass consumed is a raw zone for the later
//! ones.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` enum (Plain, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`parser`**: `text_to_spans()` main entry point with the `split_*` passes
//!
//! ## Delimiter Parity
//!
//! Splitting on a delimiter must yield an odd number of parts. An even count
//! means an unclosed delimiter and aborts with an error rather than guessing.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::text_to_spans;
pub use types::TextSpan;
