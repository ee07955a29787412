//! Context-free HTML escaping

use std::borrow::Cow;

/// Escape `& < > " '` as `&amp; &lt; &gt; &quot; &#39;`
///
/// The input is scanned once, so the `&` of an emitted entity is never
/// escaped again. Text with nothing to escape is returned borrowed.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(['&', '<', '>', '"', '\'']) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
