//! Inline mark types.

use super::Attrs;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An inline style annotation applied to a text node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mark {
    /// Mark type tag.
    #[serde(rename = "type", default)]
    pub kind: MarkType,

    /// Type-specific attributes (`href`/`target` for links,
    /// `fontSize`/`color`/`backgroundColor` for text styles).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,
}

impl Mark {
    /// Create a mark of the given type with no attributes.
    pub fn new(kind: MarkType) -> Self {
        Self { kind, attrs: None }
    }

    /// Create a bold mark.
    pub fn bold() -> Self {
        Self::new(MarkType::Bold)
    }

    /// Create an italic mark.
    pub fn italic() -> Self {
        Self::new(MarkType::Italic)
    }

    /// Create an underline mark.
    pub fn underline() -> Self {
        Self::new(MarkType::Underline)
    }

    /// Create a link mark pointing at `href`.
    pub fn link(href: impl Into<String>) -> Self {
        Self::new(MarkType::Link).with_attr("href", href.into())
    }

    /// Set a single attribute, creating the attribute bag if needed.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs
            .get_or_insert_with(Attrs::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Mark type tag. Unrecognized tags deserialize as
/// [`MarkType::Unknown`] and are skipped during composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkType {
    /// `<strong>` wrap
    Bold,
    /// `<em>` wrap
    Italic,
    /// `<u>` wrap
    Underline,
    /// `<a href=..>` wrap; skipped without an `href` attribute
    Link,
    /// `<span style=..>` wrap built from font/color attributes
    TextStyle,
    /// Any unrecognized tag
    #[default]
    #[serde(other)]
    Unknown,
}
