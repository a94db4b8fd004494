//! # Markup Node Model
//!
//! A small HTML tree: [`LeafNode`] renders a single element (or raw text when
//! it has no tag), [`ParentNode`] renders an element around its children.
//!
//! ## Modules
//!
//! - **`tag`**: the closed set of element names the converter emits
//! - **`attributes`**: ordered, key-unique attribute mapping
//! - **`node`**: `LeafNode`, `ParentNode`, `HtmlNode` and rendering
//!
//! ## Validation
//!
//! Construction never fails. Shape invariants (leaf has a value, parent has
//! a tag and at least one child) are checked when rendering, so a tree can
//! be assembled piecemeal and rejected as a whole.

pub mod attributes;
pub mod node;
pub mod tag;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode, RenderError};
pub use tag::Tag;
