use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering a document.
#[derive(Debug, Error)]
pub enum Error {
    /// An inline delimiter was opened but never closed.
    #[error("unmatched `{delimiter}` delimiter in {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    /// A parent node was built without a tag or without children.
    #[error("invalid node: {0}")]
    InvalidNode(&'static str),

    /// Segmentation left no blocks to render.
    #[error("document contains no blocks")]
    EmptyDocument,

    /// A page was requested for a document with no `# ` heading.
    #[error("document has no title heading")]
    MissingTitle,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
