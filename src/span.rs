use std::fmt;

use crate::error::{Error, Result};
use crate::html::{LeafNode, RenderNode};

/// Kinds an inline span may carry.
///
/// `Underline`, `Strikethrough` and `Quote` can be constructed but have no
/// HTML rendering; converting them fails with
/// [`Error::UnsupportedSpanKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Link,
    Image,
    Code,
    Quote,
}

impl SpanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Underline => "underline",
            SpanKind::Strikethrough => "strikethrough",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
            SpanKind::Code => "code",
            SpanKind::Quote => "quote",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of inline text with a single kind.
///
/// `url` only means something for links and images. Equality compares text,
/// kind and url.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineSpan {
    text: String,
    kind: SpanKind,
    url: Option<String>,
}

impl InlineSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    pub fn to_render_node(&self) -> Result<RenderNode> {
        let text = self.text.as_str();
        let url = self.url.as_deref().unwrap_or_default();
        let leaf = match self.kind {
            SpanKind::Plain => LeafNode::text(text),
            SpanKind::Bold => LeafNode::new("b", text),
            SpanKind::Italic => LeafNode::new("i", text),
            SpanKind::Code => LeafNode::new("code", text),
            SpanKind::Link => LeafNode::new("a", text).with_attribute("href", url),
            SpanKind::Image => LeafNode::new("img", "")
                .with_attribute("src", url)
                .with_attribute("alt", text),
            kind @ (SpanKind::Underline | SpanKind::Strikethrough | SpanKind::Quote) => {
                return Err(Error::UnsupportedSpanKind(kind));
            }
        };
        Ok(leaf.into())
    }
}

impl fmt::Display for InlineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "InlineSpan({:?}, {}, {:?})", self.text, self.kind, url),
            None => write!(f, "InlineSpan({:?}, {}, None)", self.text, self.kind),
        }
    }
}

/// Converts every span, stopping at the first unsupported kind.
pub fn spans_to_nodes(spans: &[InlineSpan]) -> Result<Vec<RenderNode>> {
    spans.iter().map(InlineSpan::to_render_node).collect()
}
