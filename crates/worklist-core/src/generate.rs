//! Page generation - read inputs, render, write the output page
//!
//! # Steps
//! 1. Check that the data file and the template exist
//! 2. Read both, parse the data document
//! 3. Normalize and render every work, substitute into the template
//! 4. Write to a temp file next to the output → atomic rename
//!
//! Nothing is written unless every earlier step succeeded.

use crate::compose::compose;
use crate::config::{Config, RenderConfig};
use crate::error::{Result, WorklistError};
use crate::jsonc::parse_works;
use crate::work::normalize_all;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub works: usize,
    pub placeholder_found: bool,
}

/// Rendered page, not yet written anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSite {
    pub html: String,
    pub works: usize,
    pub placeholder_found: bool,
}

/// Render a page from the raw data document and template text
///
/// Pure: the same inputs always give the same bytes.
pub fn render_site(data: &str, template: &str, render: &RenderConfig) -> Result<RenderedSite> {
    let items = parse_works(data)?;
    let works = normalize_all(&items);
    let composition = compose(template, &works, render);

    Ok(RenderedSite {
        html: composition.html,
        works: works.len(),
        placeholder_found: composition.placeholder_found,
    })
}

/// Generate the output page described by `config`
///
/// # Errors
///
/// Returns an error if:
/// - The data file or the template does not exist (`MissingInputFile`)
/// - Either input cannot be read (`ReadError`)
/// - The data document is not a JSON array once comments are stripped (`ParseError`)
/// - The output cannot be written (`WriteError`)
pub fn generate(config: &Config) -> Result<GenerateReport> {
    let paths = &config.paths;

    ensure_exists(&paths.data)?;
    ensure_exists(&paths.template)?;

    log::debug!("Reading {}", paths.data.display());
    let data = read_input(&paths.data)?;
    log::debug!("Reading {}", paths.template.display());
    let template = read_input(&paths.template)?;

    let site = render_site(&data, &template, &config.render)?;
    log::debug!("Rendered {} work(s)", site.works);
    if !site.placeholder_found {
        log::warn!(
            "Placeholder {} not found in {}; template written unchanged",
            config.render.placeholder,
            paths.template.display()
        );
    }

    write_atomic(&paths.output, &site.html)?;
    log::debug!("Wrote {}", paths.output.display());

    Ok(GenerateReport {
        output: paths.output.clone(),
        works: site.works,
        placeholder_found: site.placeholder_found,
    })
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(WorklistError::MissingInputFile {
            path: path.to_path_buf(),
        })
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| WorklistError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write `content` to `path` through a temp file in the same directory
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_error = |e: std::io::Error| WorklistError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
    temp.write_all(content.as_bytes()).map_err(write_error)?;
    temp.flush().map_err(write_error)?;
    preserve_permissions(path, &temp).map_err(write_error)?;

    // Rename over the target (atomic on same filesystem)
    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// Temp files are created owner-only; give the page normal file permissions
#[cfg(unix)]
fn preserve_permissions(path: &Path, temp: &NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = fs::metadata(path)
        .map(|m| m.permissions())
        .unwrap_or_else(|_| fs::Permissions::from_mode(0o644));
    temp.as_file().set_permissions(permissions)
}

#[cfg(not(unix))]
fn preserve_permissions(_path: &Path, _temp: &NamedTempFile) -> std::io::Result<()> {
    Ok(())
}
