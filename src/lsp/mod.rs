//! LSP server for form-definition documents.
//!
//! Provides Language Server Protocol support for:
//! - Context-aware completion for field types and their properties
//! - Field-insertion snippets (full declarations with placeholders)
//! - YAML parse diagnostics on open/change
//!
//! One LSP server powers all editor integrations: VSCode, Zed, vim,
//! emacs, JetBrains, etc.

pub mod capabilities;
pub mod server;

pub use server::run_lsp_server;
pub use server::FormkitLsp;
