pub mod convert;
pub mod error;
pub mod html;
pub mod io;
pub mod models;
pub mod page;
pub mod parsing;


// Re-export key types for easier usage
pub use convert::{markdown_to_html, markdown_to_html_node};
pub use error::ConvertError;
pub use html::{HtmlNode, RenderError};
pub use io::*;
pub use models::SourcePage;
pub use page::{extract_title, generate_page_html, render_page};
pub use parsing::inline::{TextSpan, text_to_spans};
