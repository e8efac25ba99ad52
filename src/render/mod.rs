//! Output rendering.

pub mod json;

pub use json::{render_document, write_output};
