//! HTML output - escaping and per-work fragments

pub mod escape;
pub mod fragment;

pub use escape::escape_html;
pub use fragment::render_fragment;
