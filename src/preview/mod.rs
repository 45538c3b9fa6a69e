//! Form document model and HTML preview rendering.

pub mod document;
pub mod render;

pub use document::{FieldData, FieldNode, Form, FormFile};
pub use render::{render_document, render_preview};
