//! Error types for conversion and rendering

use std::fmt;

/// Errors that can occur while converting markdown or rendering the node tree
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A style delimiter was opened but never closed (carries the delimiter)
    UnbalancedDelimiter(String),
    /// A leaf node reached render without a value
    MissingValue,
    /// A parent node reached render without a tag
    MissingTag,
    /// A parent node reached render with no children
    EmptyChildren,
    /// The document has no top-level `# ` heading to use as a title
    NoTitle,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnbalancedDelimiter(delimiter) => {
                write!(f, "Unbalanced delimiter '{delimiter}': markdown syntax is invalid")
            }
            ConvertError::MissingValue => write!(f, "Leaf nodes must have a value"),
            ConvertError::MissingTag => write!(f, "Parent nodes must have a tag"),
            ConvertError::EmptyChildren => write!(f, "Parent nodes must have children"),
            ConvertError::NoTitle => write!(f, "No top-level '# ' heading found for the title"),
        }
    }
}

impl std::error::Error for ConvertError {}
