//! HTML entity escaping.
//!
//! Every author-controlled value — node text, attribute values, style
//! fragments — must pass through this module at the point of HTML
//! emission. This is the crate's injection boundary: structural markup
//! is emitted verbatim and trusted, everything else is escaped here.

/// Append `input` to `output`, escaping HTML special characters.
pub fn escape_into(input: &str, output: &mut String) {
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
}

/// Escape a string for use as HTML text content.
pub fn escape_text(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    escape_into(input, &mut output);
    output
}

/// Escape a string for use inside a double-quoted HTML attribute.
///
/// Same entity set as [`escape_text`]; kept as a separate entry point
/// so attribute emission sites read as attribute escaping.
pub fn escape_attr(input: &str) -> String {
    escape_text(input)
}
