//! Configuration - default paths and rendering constants, optionally
//! overridden by a `worklist.toml` next to the data files.

pub mod consts;
pub mod model;

pub use model::{Config, PathsConfig, RenderConfig};
