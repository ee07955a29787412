use crate::config::consts;
use crate::error::{Result, WorklistError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// worklist.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from(consts::paths::DATA),
            template: PathBuf::from(consts::paths::TEMPLATE),
            output: PathBuf::from(consts::paths::OUTPUT),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub placeholder: String,
    pub empty_state: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: consts::render::PLACEHOLDER.to_string(),
            empty_state: consts::render::EMPTY_STATE.to_string(),
        }
    }
}

impl Config {
    /// Read worklist.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| WorklistError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| WorklistError::ConfigParseError(e.to_string()))
    }

    /// Read a config file; relative paths in it are taken from the file's directory
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());
        let base = path.parent().unwrap_or(Path::new(""));
        Ok(Self::from_file(path)?.resolve_paths(base))
    }

    /// Load `worklist.toml` from `dir` when present, built-in defaults otherwise
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(consts::paths::CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Anchor relative paths at `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let anchor = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.paths.data = anchor(self.paths.data);
        self.paths.template = anchor(self.paths.template);
        self.paths.output = anchor(self.paths.output);
        self
    }
}
