use crate::error::{Error, Result};

/// Ordered `key="value"` pairs, rendered in insertion order.
pub type Attributes = Vec<(String, String)>;

/// Tags rendered as a lone start tag with no text or end tag.
const VOID_TAGS: &[&str] = &["img"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Rewrite every `key` attribute in the tree. `rewrite` returns `None`
    /// to keep a value unchanged. Text is never touched.
    pub fn rewrite_attribute<F>(&mut self, key: &str, rewrite: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            HtmlNode::Leaf(leaf) => rewrite_values(&mut leaf.attributes, key, rewrite),
            HtmlNode::Parent(parent) => {
                rewrite_values(&mut parent.attributes, key, rewrite);
                for child in &mut parent.children {
                    child.rewrite_attribute(key, rewrite);
                }
            }
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// A childless node. Without a tag it renders as its bare text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    text: String,
    attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: &str, text: impl Into<String>) -> Self {
        Self {
            tag: (!tag.is_empty()).then(|| tag.to_string()),
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    /// An untagged leaf: raw text passthrough.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            tag: None,
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.push((key.to_string(), value.into()));
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let Some(tag) = &self.tag else {
            out.push_str(&self.text);
            return;
        };
        out.push('<');
        out.push_str(tag);
        out.push_str(&attributes_to_html(&self.attributes));
        out.push('>');
        if VOID_TAGS.contains(&tag.as_str()) {
            return;
        }
        out.push_str(&self.text);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

/// A tagged node with at least one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Result<Self> {
        if tag.is_empty() {
            return Err(Error::InvalidNode("parent node has no tag"));
        }
        if children.is_empty() {
            return Err(Error::InvalidNode("parent node has no children"));
        }
        Ok(Self {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        })
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.push((key.to_string(), value.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        out.push_str(&attributes_to_html(&self.attributes));
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn rewrite_values<F>(attributes: &mut Attributes, key: &str, rewrite: &F)
where
    F: Fn(&str) -> Option<String>,
{
    for (name, value) in attributes.iter_mut() {
        if name.as_str() != key {
            continue;
        }
        if let Some(rewritten) = rewrite(value.as_str()) {
            *value = rewritten;
        }
    }
}

/// Render attributes as ` key="value"` pairs; empty when there are none.
pub fn attributes_to_html(attributes: &[(String, String)]) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}
