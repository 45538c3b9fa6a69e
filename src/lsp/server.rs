//! Formkit LSP server implementation.
//!
//! Documents are cached as ropes keyed by URI; every completion request is a
//! single synchronous inference/generation pass over the cached text.

use dashmap::DashMap;
use ropey::Rope;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};

use crate::completion::suggest::{self, Suggestion, SuggestionKind};
use crate::lsp::capabilities::server_capabilities;
use crate::preview::document::FormFile;

/// Formkit Language Server
pub struct FormkitLsp {
    /// LSP client for sending notifications
    client: Client,
    /// Document contents cache
    documents: DashMap<Url, Rope>,
}

impl FormkitLsp {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: DashMap::new(),
        }
    }

    /// Completion candidates for a cursor position. A `:` trigger routes to
    /// the narrow legacy path; everything else goes through the main
    /// context-inference path.
    fn get_completions(
        &self,
        uri: &Url,
        position: Position,
        trigger: Option<&str>,
    ) -> Vec<CompletionItem> {
        let text = match self.documents.get(uri) {
            Some(doc) => doc.to_string(),
            None => return Vec::new(),
        };

        let suggestions = match trigger {
            Some(":") => suggest::trigger_suggestions_at(&text, position.line, position.character),
            _ => suggest::suggestions_at(&text, position.line, position.character),
        };

        tracing::debug!(
            count = suggestions.len(),
            line = position.line,
            "completion request"
        );

        suggestions.into_iter().map(to_completion_item).collect()
    }

    /// Parse the cached document and surface YAML errors as diagnostics.
    fn validate_document(&self, uri: &Url) -> Vec<Diagnostic> {
        let text = match self.documents.get(uri) {
            Some(doc) => doc.to_string(),
            None => return Vec::new(),
        };

        match serde_yaml::from_str::<Option<FormFile>>(&text) {
            Ok(_) => Vec::new(),
            Err(e) => vec![yaml_error_diagnostic(&e)],
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for FormkitLsp {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: server_capabilities(),
            server_info: Some(ServerInfo {
                name: "Formkit Language Server".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Formkit LSP initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;
        self.documents.insert(uri.clone(), Rope::from_str(&text));

        let diagnostics = self.validate_document(&uri);
        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Some(change) = params.content_changes.into_iter().next() {
            self.documents
                .insert(uri.clone(), Rope::from_str(&change.text));

            let diagnostics = self.validate_document(&uri);
            self.client
                .publish_diagnostics(uri, diagnostics, None)
                .await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.remove(&params.text_document.uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let trigger = params
            .context
            .and_then(|ctx| ctx.trigger_character);

        let completions = self.get_completions(&uri, position, trigger.as_deref());
        Ok(Some(CompletionResponse::Array(completions)))
    }
}

/// Run the LSP server on stdin/stdout
pub async fn run_lsp_server() {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(FormkitLsp::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}

fn to_completion_item(suggestion: Suggestion) -> CompletionItem {
    let kind = match suggestion.kind {
        SuggestionKind::Snippet => CompletionItemKind::SNIPPET,
        SuggestionKind::Property => CompletionItemKind::PROPERTY,
    };

    CompletionItem {
        label: suggestion.label,
        kind: Some(kind),
        documentation: suggestion.documentation.map(Documentation::String),
        insert_text: Some(suggestion.insert_text),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        ..Default::default()
    }
}

/// Convert a YAML parse error to an LSP diagnostic at its reported location.
fn yaml_error_diagnostic(error: &serde_yaml::Error) -> Diagnostic {
    let (line, character) = error
        .location()
        .map(|loc| {
            (
                loc.line().saturating_sub(1) as u32,
                loc.column().saturating_sub(1) as u32,
            )
        })
        .unwrap_or((0, 0));

    Diagnostic {
        range: Range {
            start: Position { line, character },
            end: Position {
                line,
                character: character + 1,
            },
        },
        severity: Some(DiagnosticSeverity::ERROR),
        source: Some("formkit".to_string()),
        message: error.to_string(),
        ..Default::default()
    }
}
