//! LSP capability declaration.

use tower_lsp::lsp_types::*;

/// Server capabilities: full-document sync and snippet completion, with `:`
/// registered as a trigger character for the legacy property path.
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        // Full document sync - completion inspects whole-document text
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::FULL,
        )),

        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(vec![":".to_string()]),
            ..Default::default()
        }),

        ..Default::default()
    }
}
