use super::{attributes::Attributes, tag::Tag};

/// Structural problems detected while rendering a node tree.
///
/// Nodes are not validated on construction; these surface from
/// [`HtmlNode::to_html`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node must have a value")]
    MissingValue,
    #[error("parent node must have a tag")]
    MissingTag,
    #[error("parent node <{tag}> must have children")]
    MissingChildren { tag: Tag },
}

/// A node without children: raw text when `tag` is `None`, otherwise a
/// single element wrapping `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<Tag>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: Tag, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// A leaf that renders its value verbatim.
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        let value = self.value.as_deref().ok_or(RenderError::MissingValue)?;
        let Some(tag) = self.tag else {
            out.push_str(value);
            return Ok(());
        };
        write_open_tag(tag, &self.attributes, out);
        out.push_str(value);
        write_close_tag(tag, out);
        Ok(())
    }
}

/// A node that nests other nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<Tag>,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: Tag, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        let tag = self.tag.ok_or(RenderError::MissingTag)?;
        if self.children.is_empty() {
            return Err(RenderError::MissingChildren { tag });
        }
        write_open_tag(tag, &self.attributes, out);
        for child in &self.children {
            child.write_html(out)?;
        }
        write_close_tag(tag, out);
        Ok(())
    }
}

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<Tag> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag,
            HtmlNode::Parent(parent) => parent.tag,
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }

    /// Renders the tree depth-first into a markup string.
    ///
    /// # Errors
    /// Fails on the first node that breaks its shape invariants: a leaf
    /// without a value, or a parent without a tag or without children.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
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

fn write_open_tag(tag: Tag, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag.as_str());
    if !attributes.is_empty() {
        out.push(' ');
        out.push_str(&attributes.to_html());
    }
    out.push('>');
}

fn write_close_tag(tag: Tag, out: &mut String) {
    out.push_str("</");
    out.push_str(tag.as_str());
    out.push('>');
}
