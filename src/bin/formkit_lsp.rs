//! Formkit Language Server
//!
//! Run with: formkit-lsp
//!
//! Speaks LSP over stdin/stdout and provides IDE features for form
//! definition YAML files:
//! - Context-aware completion for field types and properties
//! - Field-insertion snippets
//! - YAML parse diagnostics

use formkit::lsp::run_lsp_server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr; stdout carries the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("starting formkit language server");
    run_lsp_server().await;
}
