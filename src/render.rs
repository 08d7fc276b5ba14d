use tracing::debug;

use crate::block::{BlockKind, Span};
use crate::error::{Error, Result};
use crate::html::{HtmlNode, LeafNode, ParentNode};
use crate::inline;
use crate::parser::{classify, segment};

/// Tag of the container that wraps every rendered block.
const ROOT_TAG: &str = "div";

/// Render a whole markdown document into a single `div` node.
pub fn render_document(markdown: &str) -> Result<HtmlNode> {
    let blocks = segment(markdown);
    debug!(blocks = blocks.len(), "segmented document");

    if blocks.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let children = blocks
        .iter()
        .map(|block| render_block(block, classify(block)))
        .collect::<Result<Vec<_>>>()?;

    Ok(ParentNode::new(ROOT_TAG, children)?.into())
}

/// Render one block of the given kind.
pub fn render_block(block: &str, kind: BlockKind) -> Result<HtmlNode> {
    let node = match kind {
        BlockKind::Code => code_block(block)?,
        BlockKind::Paragraph => {
            let text = block.lines().collect::<Vec<_>>().join(" ");
            ParentNode::new(kind.tag(), inline_children(&text)?)?
        }
        BlockKind::Quote => {
            let text = block
                .lines()
                .map(|line| line.strip_prefix('>').unwrap_or(line).trim_start())
                .collect::<Vec<_>>()
                .join(" ");
            ParentNode::new(kind.tag(), inline_children(&text)?)?
        }
        BlockKind::Heading { .. } => {
            let text = block.trim_start_matches('#').trim();
            ParentNode::new(kind.tag(), inline_children(text)?)?
        }
        BlockKind::UnorderedList => list(block, kind, |line| line.strip_prefix("- "))?,
        BlockKind::OrderedList => list(block, kind, |line| {
            line.split_once(". ").map(|(_, item)| item)
        })?,
    };
    Ok(node.into())
}

/// Convert one inline span into a leaf node.
pub fn span_to_node(span: Span) -> LeafNode {
    match span {
        Span::Text(text) => LeafNode::text(text),
        Span::Bold(text) => LeafNode::new("b", text),
        Span::Italic(text) => LeafNode::new("i", text),
        Span::Code(text) => LeafNode::new("code", text),
        Span::Link { text, url } => LeafNode::new("a", text).with_attribute("href", url),
        Span::Image { alt, url } => LeafNode::new("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", alt),
    }
}

/// Code content is verbatim: fences dropped, no inline parsing.
fn code_block(block: &str) -> Result<ParentNode> {
    let mut lines: Vec<&str> = block.lines().collect();
    if lines.first() == Some(&"```") {
        lines.remove(0);
    }
    if lines.last() == Some(&"```") {
        lines.pop();
    }
    let mut content = lines.join("\n");
    content.push('\n');

    let code = ParentNode::new("code", vec![LeafNode::text(content).into()])?;
    ParentNode::new(BlockKind::Code.tag(), vec![code.into()])
}

fn list<'a, F>(block: &'a str, kind: BlockKind, strip_marker: F) -> Result<ParentNode>
where
    F: Fn(&'a str) -> Option<&'a str>,
{
    let items = block
        .lines()
        .map(|line| -> Result<HtmlNode> {
            let item = strip_marker(line).unwrap_or(line).trim();
            Ok(ParentNode::new("li", inline_children(item)?)?.into())
        })
        .collect::<Result<Vec<_>>>()?;
    ParentNode::new(kind.tag(), items)
}

/// Inline spans of `text` as leaf nodes. Text that yields no spans becomes a
/// single empty leaf so the enclosing parent is never childless.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
    let mut children: Vec<HtmlNode> = inline::split(text)?
        .into_iter()
        .map(|span| span_to_node(span).into())
        .collect();
    if children.is_empty() {
        children.push(LeafNode::text("").into());
    }
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(markdown: &str) -> String {
        render_document(markdown).unwrap().to_html()
    }

    #[test]
    fn paragraphs() {
        let md = "
        This is **bolded** paragraph
        text in a p
        tag here

        This is another paragraph with _italic_ text and `code` here

        ";
        assert_eq!(
            html(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn code_block_is_verbatim() {
        let md = "
    ```
    This is text that _should_ remain
    the **same** even with inline stuff
    ```
    ";
        assert_eq!(
            html(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn single_line_code_block() {
        assert_eq!(
            html("```\ncode line\n```"),
            "<div><pre><code>code line\n</code></pre></div>"
        );
    }

    #[test]
    fn code_block_with_unbalanced_markup_does_not_fail() {
        assert_eq!(
            html("```\nlet snake_case = 1;\n```"),
            "<div><pre><code>let snake_case = 1;\n</code></pre></div>"
        );
    }

    #[test]
    fn heading() {
        assert_eq!(
            html("# My **Heading**"),
            "<div><h1>My <b>Heading</b></h1></div>"
        );
        assert_eq!(html("### Third"), "<div><h3>Third</h3></div>");
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            html("1. First\n2. Second\n3. Third"),
            "<div><ol><li>First</li><li>Second</li><li>Third</li></ol></div>"
        );
    }

    #[test]
    fn unordered_list_with_inline_markup() {
        assert_eq!(
            html("- Apple\n- **Banana**\n- [Cherry](/c)"),
            r#"<div><ul><li>Apple</li><li><b>Banana</b></li><li><a href="/c">Cherry</a></li></ul></div>"#
        );
    }

    #[test]
    fn blockquote() {
        assert_eq!(
            html("> This is a blockquote\n> with multiple lines"),
            "<div><blockquote>This is a blockquote with multiple lines</blockquote></div>"
        );
    }

    #[test]
    fn empty_quote_line_renders_empty_blockquote() {
        assert_eq!(html(">"), "<div><blockquote></blockquote></div>");
    }

    #[test]
    fn image_and_link_in_paragraph() {
        assert_eq!(
            html("See ![logo](/img/logo.png) at [home](https://example.com)"),
            r#"<div><p>See <img src="/img/logo.png" alt="logo"> at <a href="https://example.com">home</a></p></div>"#
        );
    }

    #[test]
    fn mixed_document() {
        let md = "# Title\n\nIntro _text_.\n\n- a\n- b\n\n> quoted";
        assert_eq!(
            html(md),
            "<div><h1>Title</h1><p>Intro <i>text</i>.</p><ul><li>a</li><li>b</li></ul><blockquote>quoted</blockquote></div>"
        );
    }

    #[test]
    fn render_block_directly() {
        let node = render_block("1. one\n2. two", BlockKind::OrderedList).unwrap();
        assert_eq!(node.to_html(), "<ol><li>one</li><li>two</li></ol>");
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(matches!(
            render_document("  \n\n \n"),
            Err(Error::EmptyDocument)
        ));
    }

    #[test]
    fn unmatched_delimiter_aborts_document() {
        assert!(matches!(
            render_document("# Fine\n\nsome `code"),
            Err(Error::UnmatchedDelimiter { delimiter: "`", .. })
        ));
    }

    #[test]
    fn every_span_kind_has_a_tag() {
        let cases = [
            (Span::Text("t".to_string()), None),
            (Span::Bold("t".to_string()), Some("b")),
            (Span::Italic("t".to_string()), Some("i")),
            (Span::Code("t".to_string()), Some("code")),
            (
                Span::Link {
                    text: "t".to_string(),
                    url: "u".to_string(),
                },
                Some("a"),
            ),
            (
                Span::Image {
                    alt: "t".to_string(),
                    url: "u".to_string(),
                },
                Some("img"),
            ),
        ];
        for (span, tag) in cases {
            assert_eq!(span_to_node(span).tag(), tag);
        }
    }
}
