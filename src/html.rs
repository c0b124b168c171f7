use crate::error::{Error, Result};

/// Ordered `key="value"` pairs attached to an element.
///
/// Insertion order is kept so serialization is deterministic. Setting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders as ` key="value"` per pair, or the empty string.
    ///
    /// Values are emitted verbatim; callers are responsible for passing
    /// text that is safe inside a double-quoted attribute.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// A childless element, or raw text when `tag` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Untagged leaf, serialized as its bare value.
    pub fn text(value: impl Into<String>) -> Self {
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

    pub fn to_html(&self) -> Result<String> {
        let value = self.value.as_deref().ok_or(Error::MissingValue)?;
        match &self.tag {
            None => Ok(value.to_string()),
            Some(tag) => Ok(format!(
                "<{tag}{}>{value}</{tag}>",
                self.attributes.to_html()
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<RenderNode>>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<RenderNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Serializes this element and its whole subtree.
    ///
    /// An empty `children` list is fine and yields `<tag></tag>`; only a
    /// missing list is an error.
    pub fn to_html(&self) -> Result<String> {
        let tag = match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => return Err(Error::MissingTag),
        };
        let children = self.children.as_ref().ok_or_else(|| Error::MissingChildren {
            tag: tag.to_string(),
        })?;

        let mut out = format!("<{tag}{}>", self.attributes.to_html());
        for child in children {
            out.push_str(&child.to_html()?);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(out)
    }
}

/// Output tree of the renderer. Parents own their children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl RenderNode {
    pub fn to_html(&self) -> Result<String> {
        match self {
            RenderNode::Leaf(leaf) => leaf.to_html(),
            RenderNode::Parent(parent) => parent.to_html(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            RenderNode::Leaf(leaf) => leaf.tag.as_deref(),
            RenderNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Children of a parent; leaves have none.
    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Parent(ParentNode {
                children: Some(children),
                ..
            }) => children,
            _ => &[],
        }
    }
}

impl From<LeafNode> for RenderNode {
    fn from(leaf: LeafNode) -> Self {
        RenderNode::Leaf(leaf)
    }
}

impl From<ParentNode> for RenderNode {
    fn from(parent: ParentNode) -> Self {
        RenderNode::Parent(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_empty() {
        assert_eq!(Attributes::new().to_html(), "");
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let attrs: Attributes = [("href", "https://example.com"), ("target", "_blank")]
            .into_iter()
            .collect();
        assert_eq!(
            attrs.to_html(),
            " href=\"https://example.com\" target=\"_blank\""
        );
    }

    #[test]
    fn attributes_replace_in_place() {
        let mut attrs = Attributes::new();
        attrs.insert("src", "a.png");
        attrs.insert("alt", "a");
        attrs.insert("src", "b.png");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("src"), Some("b.png"));
        assert_eq!(attrs.to_html(), " src=\"b.png\" alt=\"a\"");
    }

    #[test]
    fn attributes_are_not_escaped() {
        let attrs: Attributes = [("title", "a<b")].into_iter().collect();
        assert_eq!(attrs.to_html(), " title=\"a<b\"");
    }

    #[test]
    fn leaf_with_tag() {
        let node = LeafNode::new("p", "Hello, world!");
        assert_eq!(node.to_html().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn leaf_without_tag_is_raw_text() {
        let node = LeafNode::text("Just <text>");
        assert_eq!(node.to_html().unwrap(), "Just <text>");
    }

    #[test]
    fn leaf_with_attributes() {
        let node = LeafNode::new("a", "Click here").with_attribute("href", "https://foo.com");
        assert_eq!(
            node.to_html().unwrap(),
            "<a href=\"https://foo.com\">Click here</a>"
        );
    }

    #[test]
    fn leaf_missing_value() {
        let node = LeafNode {
            tag: Some("span".to_string()),
            value: None,
            attributes: Attributes::new(),
        };
        assert_eq!(node.to_html(), Err(Error::MissingValue));
    }

    #[test]
    fn parent_with_children() {
        let parent = ParentNode::new("div", vec![LeafNode::new("span", "child").into()]);
        assert_eq!(parent.to_html().unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn parent_with_grandchildren() {
        let child = ParentNode::new("span", vec![LeafNode::new("b", "grandchild").into()]);
        let parent = ParentNode::new("div", vec![child.into()]);
        assert_eq!(
            parent.to_html().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn parent_mixes_text_and_elements() {
        let parent = ParentNode::new(
            "p",
            vec![
                LeafNode::text("Normal ").into(),
                LeafNode::new("i", "italic").into(),
                LeafNode::text(" text").into(),
            ],
        )
        .with_attribute("class", "lead");
        assert_eq!(
            parent.to_html().unwrap(),
            "<p class=\"lead\">Normal <i>italic</i> text</p>"
        );
    }

    #[test]
    fn parent_with_empty_children() {
        let parent = ParentNode::new("ul", Vec::new());
        assert_eq!(parent.to_html().unwrap(), "<ul></ul>");
    }

    #[test]
    fn parent_missing_tag() {
        let parent = ParentNode {
            tag: None,
            children: Some(vec![LeafNode::new("span", "x").into()]),
            attributes: Attributes::new(),
        };
        assert_eq!(parent.to_html(), Err(Error::MissingTag));

        let empty_tag = ParentNode {
            tag: Some(String::new()),
            ..parent
        };
        assert_eq!(empty_tag.to_html(), Err(Error::MissingTag));
    }

    #[test]
    fn parent_missing_children() {
        let parent = ParentNode {
            tag: Some("div".to_string()),
            children: None,
            attributes: Attributes::new(),
        };
        assert_eq!(
            parent.to_html(),
            Err(Error::MissingChildren {
                tag: "div".to_string()
            })
        );
    }

    #[test]
    fn nested_failure_aborts_whole_tree() {
        let broken = LeafNode {
            tag: None,
            value: None,
            attributes: Attributes::new(),
        };
        let parent = ParentNode::new(
            "div",
            vec![LeafNode::text("ok").into(), ParentNode::new("p", vec![broken.into()]).into()],
        );
        assert_eq!(parent.to_html(), Err(Error::MissingValue));
    }

    #[test]
    fn render_node_accessors() {
        let node: RenderNode = ParentNode::new("ol", vec![LeafNode::new("li", "a").into()]).into();
        assert_eq!(node.tag(), Some("ol"));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].tag(), Some("li"));
        assert!(node.children()[0].children().is_empty());
    }
}
