use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::block::Span;
use crate::error::{Error, Result};

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Paired delimiters recognised inside plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
            Delimiter::Code => "`",
        }
    }

    fn wrap(self, content: &str) -> Span {
        let content = content.to_string();
        match self {
            Delimiter::Bold => Span::Bold(content),
            Delimiter::Italic => Span::Italic(content),
            Delimiter::Code => Span::Code(content),
        }
    }
}

/// Split markdown text into inline spans.
///
/// Images go first, then links, then `**`, `_` and `` ` `` runs. Each stage
/// only looks at spans that are still plain text, so an underscore inside a
/// URL is never read as italics.
pub fn split(text: &str) -> Result<Vec<Span>> {
    let spans = vec![Span::Text(text.to_string())];
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = split_delimiter(spans, Delimiter::Bold)?;
    let spans = split_delimiter(spans, Delimiter::Italic)?;
    split_delimiter(spans, Delimiter::Code)
}

/// Carve `![alt](url)` images out of every text span.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, &IMAGE_PATTERN, |_, caps| {
        Some(Span::Image {
            alt: capture(caps, 1),
            url: capture(caps, 2),
        })
    })
}

/// Carve `[text](url)` links out of every text span.
///
/// A match directly preceded by `!` is image syntax and stays text.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, &LINK_PATTERN, |before, caps| {
        if before.ends_with('!') {
            return None;
        }
        Some(Span::Link {
            text: capture(caps, 1),
            url: capture(caps, 2),
        })
    })
}

/// Split every text span on `delimiter`.
///
/// Parts alternate text / delimited starting with text. An odd number of
/// markers means a run was never closed. Empty parts are dropped.
pub fn split_delimiter(spans: Vec<Span>, delimiter: Delimiter) -> Result<Vec<Span>> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };

        if text.matches(marker).count() % 2 == 1 {
            return Err(Error::UnmatchedDelimiter {
                delimiter: marker,
                text,
            });
        }

        for (index, part) in text.split(marker).enumerate() {
            if part.is_empty() {
                continue;
            }
            if index % 2 == 0 {
                out.push(Span::Text(part.to_string()));
            } else {
                out.push(delimiter.wrap(part));
            }
        }
    }

    Ok(out)
}

/// One forward pass over each text span, replacing accepted matches with the
/// span `build` returns and keeping the text around them.
fn split_matches<F>(spans: Vec<Span>, pattern: &Regex, build: F) -> Vec<Span>
where
    F: Fn(&str, &Captures<'_>) -> Option<Span>,
{
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };

        let mut pieces = Vec::new();
        let mut cursor = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let Some(matched) = build(&text[..whole.start()], &caps) else {
                continue;
            };
            if whole.start() > cursor {
                pieces.push(Span::Text(text[cursor..whole.start()].to_string()));
            }
            pieces.push(matched);
            cursor = whole.end();
        }

        if pieces.is_empty() {
            out.push(Span::Text(text));
            continue;
        }
        if cursor < text.len() {
            pieces.push(Span::Text(text[cursor..].to_string()));
        }
        out.extend(pieces);
    }

    out
}

fn capture(caps: &Captures<'_>, group: usize) -> String {
    caps.get(group)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
