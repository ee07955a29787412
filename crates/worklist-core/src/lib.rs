// Core modules
pub mod compose;
pub mod config;
pub mod error;
pub mod generate;
pub mod html;
pub mod jsonc;
pub mod work;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, WorklistError};
pub use generate::{generate, render_site, GenerateReport};
