//! Completion support: context inference and suggestion generation.

pub mod context;
pub mod snippets;
pub mod suggest;

pub use context::CursorContext;
pub use suggest::{Suggestion, SuggestionKind};
