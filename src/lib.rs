mod block;
mod config;
mod error;
mod html;
mod inline;
mod page;
mod parser;
mod render;

pub use block::{BlockKind, Span};
pub use config::{Config, PageConfig};
pub use error::{Error, Result};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode, attributes_to_html};
pub use inline::{Delimiter, split_delimiter, split_images, split_links};
pub use page::{Page, extract_title, generate_page};
pub use parser::{classify, segment};
pub use render::{render_block, render_document, span_to_node};

/// Split markdown text into inline spans.
pub fn split(text: &str) -> Result<Vec<Span>> {
    inline::split(text)
}

/// Convert markdown to an HTML fragment wrapped in a single `div`.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(render_document(markdown)?.to_html())
}
