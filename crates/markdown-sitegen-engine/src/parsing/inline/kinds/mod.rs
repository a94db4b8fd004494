//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern
//! - **`Bold`**: `DELIMITER = "**"`
//! - **`Italic`**: `DELIMITER = "*"`
//! - **`CodeSpan`**: `DELIMITER = "\`"`
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser
//! code. The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link};
