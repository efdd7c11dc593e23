/// LSP server trait implementation.
///
/// This module contains the `impl LanguageServer for Backend` block,
/// which handles the protocol messages the docblock generator needs
/// (initialize, document sync, configuration changes and completion).
use tower_lsp::LanguageServer;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

use crate::Backend;
use crate::config::Config;

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let workspace_root = params
            .root_uri
            .as_ref()
            .and_then(|uri| uri.to_file_path().ok());

        let mut config = match Config::load(workspace_root.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; falling back to default configuration");
                Config::default()
            }
        };
        if let Some(options) = &params.initialization_options
            && let Err(e) = config.merge_json(options)
        {
            tracing::warn!("ignoring initializationOptions: {e}");
        }

        *self.workspace_root.lock() = workspace_root;
        *self.config.write() = config;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    trigger_characters: Some(vec!["*".to_string()]),
                    ..CompletionOptions::default()
                }),
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                ..ServerCapabilities::default()
            },
            server_info: Some(ServerInfo {
                name: self.name.clone(),
                version: Some(self.version.clone()),
            }),
            offset_encoding: None,
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("{} {} initialized", self.name, self.version);
        self.log(MessageType::INFO, format!("{} initialized!", self.name))
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        tracing::debug!(uri = %doc.uri, "opened document");
        self.open_files.lock().insert(doc.uri.to_string(), doc.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri.to_string();

        // Full sync: the last change carries the whole document.
        if let Some(change) = params.content_changes.into_iter().last() {
            self.open_files.lock().insert(uri, change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri.to_string();
        self.open_files.lock().remove(&uri);
        tracing::debug!(%uri, "closed document");
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        let root = self.workspace_root.lock().clone();
        let mut config = Config::load(root.as_deref()).unwrap_or_else(|e| {
            tracing::warn!("{e}; falling back to default configuration");
            Config::default()
        });

        match config.merge_json(&params.settings) {
            Ok(()) => {
                *self.config.write() = config;
                tracing::info!("configuration reloaded");
            }
            Err(e) => {
                tracing::warn!("ignoring configuration change: {e}");
                self.log(
                    MessageType::WARNING,
                    format!("Invalid php-docblocker settings: {}", e),
                )
                .await;
            }
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        self.handle_completion(params).await
    }
}
