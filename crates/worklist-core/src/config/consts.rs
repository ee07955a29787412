//! Constants shared across the pipeline

/// Default input and output locations, relative to the working directory
pub mod paths {
    /// JSON-with-comments document holding the work entries
    pub const DATA: &str = "./works.jsonc";

    /// Static page containing the placeholder
    pub const TEMPLATE: &str = "./template.html";

    /// Generated page
    pub const OUTPUT: &str = "./work.html";

    /// Optional config file looked up in the working directory
    pub const CONFIG_FILE: &str = "worklist.toml";
}

/// Rendering defaults
pub mod render {
    /// Token replaced by the rendered fragments
    pub const PLACEHOLDER: &str = "{{WORK_LIST}}";

    /// Markup substituted when there are no entries
    pub const EMPTY_STATE: &str = "<p>No works yet.</p>";

    /// Separator between two fragments
    pub const FRAGMENT_SEPARATOR: &str = "\n\n";

    /// Label used for links that carry none
    pub const DEFAULT_LINK_LABEL: &str = "Link";
}
