//! Formkit - authoring tooling for YAML form definitions
//!
//! This library powers editor autocompletion for a declarative form
//! definition dialect (field types and their properties, inferred from the
//! cursor position by line inspection) and renders form documents to a live
//! HTML preview.
//!
//! # Features
//!
//! - Context-aware completion with no full YAML parse: indentation
//!   classification plus a backward scan for the enclosing field declaration
//! - Static field schema registry with closed displayType/dataType
//!   vocabularies
//! - Snippet catalog for inserting complete field declarations
//! - Stateless HTML preview renderer with escaped interpolation
//!
//! # Example
//!
//! ```
//! use formkit::completion::suggest::suggestions_at;
//! use formkit::preview::render_preview;
//!
//! // Cursor at the start of an empty document: the form scaffold.
//! let items = suggestions_at("", 0, 0);
//! assert_eq!(items[0].label, "form");
//!
//! let html = render_preview("form:\n  name: \"Onboarding\"\n  fields:\n");
//! assert!(html.contains("<h2>Onboarding</h2>"));
//! ```

pub mod cli;
pub mod completion;
pub mod error;
pub mod lsp;
pub mod preview;
pub mod schema;

// Re-export commonly used types
pub use error::{FormkitError, FormkitResult};
pub use schema::{FieldTypeDef, StructuralKind};
