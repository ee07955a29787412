//! Template composition - place rendered works into the page template

use crate::config::consts::render::FRAGMENT_SEPARATOR;
use crate::config::RenderConfig;
use crate::html::render_fragment;
use crate::work::NormalizedWork;

/// Result of substituting the work list into a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub html: String,
    pub placeholder_found: bool,
}

/// Render all works and join them with a blank line
///
/// Falls back to the configured empty-state markup when there are no works.
pub fn render_work_list(works: &[NormalizedWork], render: &RenderConfig) -> String {
    if works.is_empty() {
        return render.empty_state.clone();
    }

    works
        .iter()
        .map(render_fragment)
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}

/// Replace the first occurrence of the placeholder in `template`
///
/// The replacement is inserted literally. Later occurrences of the
/// placeholder are left as they are.
pub fn compose(template: &str, works: &[NormalizedWork], render: &RenderConfig) -> Composition {
    let placeholder = render.placeholder.as_str();
    let placeholder_found = !placeholder.is_empty() && template.contains(placeholder);
    if !placeholder_found {
        return Composition {
            html: template.to_string(),
            placeholder_found,
        };
    }

    let list = render_work_list(works, render);
    Composition {
        html: template.replacen(placeholder, &list, 1),
        placeholder_found,
    }
}
