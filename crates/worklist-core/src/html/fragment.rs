//! Per-work HTML fragment

use super::escape::escape_html;
use crate::work::NormalizedWork;

/// Render one work as a `<section class="work">` fragment
///
/// Each optional slot keeps its own line, so the layout is identical for
/// every work; absent slots leave an empty indented line. The result is
/// trimmed.
pub fn render_fragment(work: &NormalizedWork) -> String {
    let title = escape_html(&work.title);

    let description = if work.description.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", escape_html(&work.description))
    };

    let image = match &work.image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" loading="lazy" decoding="async">"#,
            escape_html(src),
            title
        ),
        None => String::new(),
    };

    let links = if work.links.is_empty() {
        String::new()
    } else {
        let anchors: Vec<String> = work
            .links
            .iter()
            .map(|link| {
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    escape_html(&link.url),
                    escape_html(&link.label)
                )
            })
            .collect();
        format!(r#"<div class="links">{}</div>"#, anchors.join(" "))
    };

    let tags = if work.tags.is_empty() {
        String::new()
    } else {
        let escaped: Vec<_> = work.tags.iter().map(|tag| escape_html(tag)).collect();
        format!(r#"<div class="tags"># {}</div>"#, escaped.join(", "))
    };

    format!(
        "<section class=\"work\">\n  <h2>{title}</h2>\n  {description}\n  {image}\n  {links}\n  {tags}\n</section>"
    )
    .trim()
    .to_string()
}
