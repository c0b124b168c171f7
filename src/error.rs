use crate::span::SpanKind;

/// Failures raised while turning a document into HTML.
///
/// None of these are recoverable mid-document: the first one aborts the
/// conversion of the whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("leaf node must have a value to render")]
    MissingValue,

    #[error("parent node must have a tag")]
    MissingTag,

    #[error("parent node <{tag}> must have children")]
    MissingChildren { tag: String },

    #[error("unsupported span kind: {0}")]
    UnsupportedSpanKind(SpanKind),

    #[error("no H1 title found in markdown")]
    NoTitleFound,
}

pub type Result<T> = std::result::Result<T, Error>;
