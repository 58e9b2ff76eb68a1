//! Inline mark composition.

use crate::model::{Attrs, Mark, MarkType};

use super::attr::attr_text;
use super::escape::escape_attr;
use super::style::push_declaration;

/// Wrap an already-escaped text run in its marks' tags.
///
/// Marks are applied in array order and each application wraps the
/// accumulated string, so the first mark ends up innermost and the
/// last mark outermost. Unknown mark types are skipped.
pub fn apply_marks(escaped_text: String, marks: &[Mark]) -> String {
    marks.iter().fold(escaped_text, |acc, mark| match mark.kind {
        MarkType::Bold => format!("<strong>{acc}</strong>"),
        MarkType::Italic => format!("<em>{acc}</em>"),
        MarkType::Underline => format!("<u>{acc}</u>"),
        MarkType::Link => wrap_link(acc, mark.attrs.as_ref()),
        MarkType::TextStyle => wrap_text_style(acc, mark.attrs.as_ref()),
        MarkType::Unknown => acc,
    })
}

/// A link without an `href` is not a link; skip the wrap.
fn wrap_link(inner: String, attrs: Option<&Attrs>) -> String {
    let Some(href) = attr_text(attrs, "href") else {
        return inner;
    };
    let target = attr_text(attrs, "target").unwrap_or_else(|| "_blank".to_string());
    format!(
        "<a href=\"{}\" target=\"{}\">{inner}</a>",
        escape_attr(&href),
        escape_attr(&target)
    )
}

fn wrap_text_style(inner: String, attrs: Option<&Attrs>) -> String {
    let mut css = String::new();
    for (key, property) in [
        ("fontSize", "font-size"),
        ("color", "color"),
        ("backgroundColor", "background-color"),
    ] {
        if let Some(value) = attr_text(attrs, key) {
            push_declaration(&mut css, property, &value);
        }
    }
    if css.is_empty() {
        inner
    } else {
        format!("<span style=\"{}\">{inner}</span>", escape_attr(&css))
    }
}
