//! Site fixtures - a data document and template laid out the way the
//! generator expects them

use std::fs;
use std::path::{Path, PathBuf};

/// Data document with comments, three works and a handful of edge cases
pub const SAMPLE_WORKS: &str = r#"// Portfolio works
[
  {
    "title": "Pixel Garden",
    "description": "A generative <canvas> toy",
    "image": "img/pixel-garden.png",
    "tags": ["art", "web"],
    "links": [
      { "url": "https://example.com/garden", "label": "Live" },
      { "url": "" }
    ]
  },
  /* no title on purpose */
  { "description": "Field notes" },
  {
    "title": "Tom & Jerry's \"Tools\"",
    "links": [{ "url": "https://example.com/tools?a=1&b=2" }]
  }
]
"#;

/// Minimal page with a single placeholder
pub const SAMPLE_TEMPLATE: &str = "<!doctype html>\n<main>\n{{WORK_LIST}}\n</main>\n";

/// Paths of the files written by [`write_site`]
#[derive(Debug, Clone)]
pub struct SiteFixture {
    pub data: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl SiteFixture {
    /// Default file names inside `root`, without writing anything
    pub fn at(root: &Path) -> Self {
        Self {
            data: root.join("works.jsonc"),
            template: root.join("template.html"),
            output: root.join("work.html"),
        }
    }
}

/// Write `works.jsonc` and `template.html` into `root`
///
/// Pass `None` to leave that file out.
///
/// # Panics
///
/// Panics if a file cannot be written
pub fn write_site(root: &Path, works: Option<&str>, template: Option<&str>) -> SiteFixture {
    let site = SiteFixture::at(root);
    if let Some(works) = works {
        fs::write(&site.data, works).expect("Failed to write works.jsonc");
    }
    if let Some(template) = template {
        fs::write(&site.template, template).expect("Failed to write template.html");
    }
    site
}
