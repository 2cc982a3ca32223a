//! Presentation layer for the terminal form.

pub mod render;

pub use render::{render_event, OutputFormat};
