use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::block::BlockKind;
use crate::config::{CONTENT_PLACEHOLDER, PageConfig, TITLE_PLACEHOLDER};
use crate::error::{Error, Result};
use crate::parser::{classify, segment};
use crate::render::render_document;

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{}|{}",
        regex::escape(TITLE_PLACEHOLDER),
        regex::escape(CONTENT_PLACEHOLDER)
    ))
    .unwrap()
});

/// A rendered page and the title pulled from its top-level heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub html: String,
}

/// Text of the first block that renders as an `h1`.
pub fn extract_title(markdown: &str) -> Result<String> {
    segment(markdown)
        .into_iter()
        .find(|block| classify(block) == BlockKind::Heading { level: 1 })
        .map(|block| block.trim_start_matches('#').trim().to_string())
        .ok_or(Error::MissingTitle)
}

/// Render `markdown` and fill the configured template with it.
pub fn generate_page(markdown: &str, config: &PageConfig) -> Result<Page> {
    let title = extract_title(markdown)?;

    let mut root = render_document(markdown)?;
    for key in ["href", "src"] {
        root.rewrite_attribute(key, &|url: &str| config.rebase_url(url));
    }
    let content = root.to_html();
    debug!(%title, bytes = content.len(), "generated page");

    let html = fill_template(&config.template, &title, &content);
    Ok(Page { title, html })
}

/// Substitute both placeholders in one pass, so text inserted for one is
/// never scanned for the other.
fn fill_template(template: &str, title: &str, content: &str) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures<'_>| {
            if &caps[0] == TITLE_PLACEHOLDER {
                title.to_string()
            } else {
                content.to_string()
            }
        })
        .into_owned()
}
