/// Inline text spans produced by the inline splitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Span {
    /// The visible text of the span (alt text for images).
    pub fn content(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    /// Destination URL, present only for links and images.
    pub fn destination(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url),
            Span::Text(_) | Span::Bold(_) | Span::Italic(_) | Span::Code(_) => None,
        }
    }
}

/// Block-level structure of a segment of markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading { level: u8 },
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockKind {
    /// Outer HTML tag for blocks of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading { level } => match level {
                1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
            BlockKind::Code => "pre",
            BlockKind::Quote => "blockquote",
            BlockKind::UnorderedList => "ul",
            BlockKind::OrderedList => "ol",
        }
    }
}
