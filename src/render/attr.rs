//! Attribute bag access helpers.
//!
//! Editor attributes arrive as loosely-typed JSON values; these
//! helpers centralize the string/number coercion rules so node
//! rendering never has to match on [`Value`] variants directly.

use crate::model::Attrs;
use serde_json::Value;

/// Look up a raw attribute value.
pub(crate) fn attr<'a>(attrs: Option<&'a Attrs>, key: &str) -> Option<&'a Value> {
    attrs.and_then(|a| a.get(key)).filter(|v| !v.is_null())
}

/// Textual form of a scalar value: strings pass through, numbers are
/// stringified, everything else (null, bool, arrays, objects) is None.
pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Look up an attribute and coerce it to text via [`value_text`].
pub(crate) fn attr_text(attrs: Option<&Attrs>, key: &str) -> Option<String> {
    attr(attrs, key).and_then(value_text)
}

/// Like [`attr_text`] but treats the empty string as absent.
pub(crate) fn attr_text_nonempty(attrs: Option<&Attrs>, key: &str) -> Option<String> {
    attr_text(attrs, key).filter(|s| !s.is_empty())
}
