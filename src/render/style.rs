//! Inline style compilation.
//!
//! Only a fixed allow-list of node attributes is ever translated into
//! CSS, and only for paragraph and heading nodes. Everything emitted
//! here goes through attribute escaping.

use crate::model::Attrs;
use serde_json::Value;

use super::attr::attr_text;
use super::escape::escape_attr;

/// Attribute-to-CSS-property allow-list, in emission order.
///
/// `fontFamily` is emitted under its literal attribute name instead of
/// `font-family`. The persisted content this renderer must stay
/// bit-compatible with was produced that way, so the quirk is kept.
const BLOCK_STYLE_PROPERTIES: [(&str, &str); 5] = [
    ("textAlign", "text-align"),
    ("backgroundColor", "background-color"),
    ("fontFamily", "fontFamily"),
    ("width", "width"),
    ("height", "height"),
];

/// Compile the whitelisted block attributes into a `style` attribute.
///
/// Returns the empty string when no declaration results, otherwise a
/// leading-space ` style="..."` fragment ready for concatenation after
/// a tag name.
pub fn block_style(attrs: Option<&Attrs>) -> String {
    let mut css = String::new();
    for (key, property) in BLOCK_STYLE_PROPERTIES {
        if let Some(value) = attr_text(attrs, key) {
            push_declaration(&mut css, property, &value);
        }
    }
    style_attr(&css)
}

/// Append one `property: value;` declaration.
pub(crate) fn push_declaration(css: &mut String, property: &str, value: &str) {
    css.push_str(property);
    css.push_str(": ");
    css.push_str(value);
    css.push(';');
}

/// Wrap a non-empty CSS string into an escaped ` style="..."` fragment.
pub(crate) fn style_attr(css: &str) -> String {
    if css.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", escape_attr(css))
    }
}

/// Normalize a width/height value for CSS: bare numbers are pixel
/// counts, values already carrying a unit (or `%`) pass through as-is.
pub(crate) fn css_dimension(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(format!("{n}px")),
        Value::String(s) if !s.is_empty() => {
            if s.trim().parse::<f64>().is_ok() {
                Some(format!("{}px", s.trim()))
            } else {
                Some(s.clone())
            }
        }
        _ => None,
    }
}
