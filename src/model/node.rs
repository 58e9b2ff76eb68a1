//! Node-level types.

use super::Mark;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form attribute bag carried by a node or mark.
///
/// Keys and meaning are type-specific; values may be strings, numbers,
/// or nested maps/lists, exactly as the editor persisted them.
pub type Attrs = serde_json::Map<String, Value>;

/// One element of the document tree (block, inline, or leaf).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Node type tag selecting rendering behavior.
    #[serde(rename = "type", default)]
    pub kind: NodeType,

    /// Type-specific attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,

    /// Ordered child nodes (absent on leaf types).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Node>>,

    /// Raw textual content; only meaningful on `text` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Heading level as persisted by some editor versions. Rendering
    /// resolves the level from `attrs.level`; this field is kept so
    /// round-tripping a document does not lose it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Value>,

    /// Ordered inline marks; only meaningful on `text` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<Mark>>,
}

impl Node {
    /// Create a node of the given type with no attributes or children.
    pub fn new(kind: NodeType) -> Self {
        Self {
            kind,
            attrs: None,
            content: None,
            text: None,
            level: None,
            marks: None,
        }
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        let mut node = Self::new(NodeType::Text);
        node.text = Some(text.into());
        node
    }

    /// Create a paragraph node with the given children.
    pub fn paragraph(content: Vec<Node>) -> Self {
        Self::new(NodeType::Paragraph).with_content(content)
    }

    /// Create a heading node at the given level.
    pub fn heading(level: i64, content: Vec<Node>) -> Self {
        Self::new(NodeType::Heading)
            .with_content(content)
            .with_attr("level", level)
    }

    /// Attach child nodes.
    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = Some(content);
        self
    }

    /// Attach inline marks.
    pub fn with_marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = Some(marks);
        self
    }

    /// Set a single attribute, creating the attribute bag if needed.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs
            .get_or_insert_with(Attrs::new)
            .insert(key.into(), value.into());
        self
    }

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.content.as_ref().map_or(true, |c| c.is_empty())
    }

    /// Get the raw (unescaped) text content of this subtree.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(ref text) = self.text {
            out.push_str(text);
        }
        if let Some(ref content) = self.content {
            for child in content {
                child.collect_text(out);
            }
        }
    }
}

/// Node type tag.
///
/// Any tag not listed here (or a missing tag) deserializes as
/// [`NodeType::Unknown`]; unknown nodes render as the concatenation of
/// their children with no wrapping markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    /// Inline text run carrying the `text` and `marks` fields
    Text,
    /// Block paragraph
    Paragraph,
    /// Block heading (level in `attrs.level`)
    Heading,
    /// Single image, optionally captioned
    Image,
    /// Code block widget with a language selector header
    CodeBlockNode,
    /// Audio player
    Audio,
    /// Video player
    Video,
    /// Embedded iframe
    Iframe,
    /// Thematic break
    HorizontalRule,
    /// Unordered list
    BulletList,
    /// Ordered list
    OrderedList,
    /// List item
    ListItem,
    /// Forced line break
    HardBreak,
    /// Paywall divider (renders nothing; gating is the caller's job)
    Paywall,
    /// Vertical spacer (height in `attrs.height`)
    SpacerNode,
    /// Multi-image CSS grid (items and saved layouts in `attrs`)
    PhotoGrid,
    /// Any unrecognized tag
    #[default]
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MarkType;

    #[test]
    fn test_node_builders() {
        let node = Node::heading(3, vec![Node::text("Title")]);
        assert_eq!(node.kind, NodeType::Heading);
        assert_eq!(
            node.attrs.as_ref().and_then(|a| a.get("level")),
            Some(&Value::from(3))
        );
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_plain_text_recurses() {
        let node = Node::paragraph(vec![Node::text("Hello "), Node::text("world")]);
        assert_eq!(node.plain_text(), "Hello world");
    }

    #[test]
    fn test_unknown_type_tag() {
        let node: Node = serde_json::from_str(r#"{"type":"galleryV2"}"#).unwrap();
        assert_eq!(node.kind, NodeType::Unknown);
    }

    #[test]
    fn test_missing_type_tag() {
        let node: Node = serde_json::from_str(r#"{"text":"orphan"}"#).unwrap();
        assert_eq!(node.kind, NodeType::Unknown);
        assert_eq!(node.text.as_deref(), Some("orphan"));
    }

    #[test]
    fn test_unknown_json_fields_ignored() {
        let node: Node = serde_json::from_str(
            r#"{"type":"text","text":"hi","marks":[{"type":"bold"}],"editorVersion":9}"#,
        )
        .unwrap();
        assert_eq!(node.kind, NodeType::Text);
        assert_eq!(node.marks.as_ref().unwrap()[0].kind, MarkType::Bold);
    }
}
