/// Completion request orchestration.
///
/// Looks up the open document, snapshots the active configuration, and
/// asks [`super::docblock`] for a docblock item at the cursor.
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

use super::docblock::build_docblock_completion;
use crate::Backend;

impl Backend {
    /// Main completion handler, called by `LanguageServer::completion`.
    pub(crate) async fn handle_completion(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri.to_string();
        let position = params.text_document_position.position;

        let Some(content) = self.open_files.lock().get(&uri).cloned() else {
            tracing::debug!(%uri, "completion requested for unknown document");
            return Ok(None);
        };
        let config = self.config.read().clone();

        match build_docblock_completion(&content, position, &config) {
            Some(item) => {
                tracing::debug!(%uri, line = position.line, "offering docblock");
                Ok(Some(CompletionResponse::Array(vec![item])))
            }
            None => Ok(None),
        }
    }
}
