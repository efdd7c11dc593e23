mod common;

use common::{complete_at, create_test_backend, snippet_text};
use serde_json::json;
use tower_lsp::LanguageServer;
use tower_lsp::lsp_types::*;

#[tokio::test]
async fn test_initialize_server_info() {
    let backend = create_test_backend();
    let params = InitializeParams::default();
    let result = backend.initialize(params).await.unwrap();

    let server_info = result.server_info.expect("server_info should be present");
    assert_eq!(server_info.name, "PHP DocBlocker");
    assert_eq!(
        server_info.version,
        Some(env!("CARGO_PKG_VERSION").to_string())
    );
}

#[tokio::test]
async fn test_initialize_capabilities() {
    let backend = create_test_backend();
    let result = backend
        .initialize(InitializeParams::default())
        .await
        .unwrap();

    let completion = result
        .capabilities
        .completion_provider
        .expect("Completion provider should be enabled");
    assert_eq!(completion.trigger_characters, Some(vec!["*".to_string()]));
    assert_eq!(
        result.capabilities.text_document_sync,
        Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL))
    );
}

#[tokio::test]
async fn test_initialization_options_apply_to_config() {
    let backend = create_test_backend();
    let params = InitializeParams {
        initialization_options: Some(json!({ "returnVoid": false, "gap": false })),
        ..InitializeParams::default()
    };
    backend.initialize(params).await.unwrap();

    let config = backend.config();
    assert!(!config.return_void);
    assert!(!config.gap);
}

#[tokio::test]
async fn test_workspace_config_file_is_loaded() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(
        dir.path().join(".php-docblocker.toml"),
        "singleLineProperty = true\n",
    )
    .expect("failed to write config");

    let backend = create_test_backend();
    let params = InitializeParams {
        root_uri: Some(Url::from_file_path(dir.path()).unwrap()),
        ..InitializeParams::default()
    };
    backend.initialize(params).await.unwrap();
    assert!(backend.config().single_line_property);

    let uri = Url::parse("file:///single_line.php").unwrap();
    let items = complete_at(&backend, &uri, "<?php\n/**\npublic $count = 0;\n", 1, 3).await;
    assert_eq!(snippet_text(&items[0]), "/** @var ${1:int} */");
}

#[tokio::test]
async fn test_did_change_configuration_reloads() {
    let backend = create_test_backend();
    backend.initialize(InitializeParams::default()).await.unwrap();

    backend
        .did_change_configuration(DidChangeConfigurationParams {
            settings: json!({ "phpDocblocker": { "extra": ["@author Jane"] } }),
        })
        .await;
    assert_eq!(backend.config().extra, vec!["@author Jane"]);

    // Invalid settings keep the previous configuration.
    backend
        .did_change_configuration(DidChangeConfigurationParams {
            settings: json!({ "phpDocblocker": { "gap": "sometimes" } }),
        })
        .await;
    assert_eq!(backend.config().extra, vec!["@author Jane"]);
}

#[tokio::test]
async fn test_did_open_change_close() {
    let backend = create_test_backend();
    let uri = Url::parse("file:///test.php").unwrap();

    backend
        .did_open(DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri.clone(),
                language_id: "php".to_string(),
                version: 1,
                text: "<?php\n".to_string(),
            },
        })
        .await;
    assert_eq!(backend.document(uri.as_str()).as_deref(), Some("<?php\n"));

    backend
        .did_change(DidChangeTextDocumentParams {
            text_document: VersionedTextDocumentIdentifier {
                uri: uri.clone(),
                version: 2,
            },
            content_changes: vec![TextDocumentContentChangeEvent {
                range: None,
                range_length: None,
                text: "<?php\nclass A {}\n".to_string(),
            }],
        })
        .await;
    assert_eq!(
        backend.document(uri.as_str()).as_deref(),
        Some("<?php\nclass A {}\n")
    );

    backend
        .did_close(DidCloseTextDocumentParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
        })
        .await;
    assert_eq!(backend.document(uri.as_str()), None);
}

#[tokio::test]
async fn test_completion_for_unknown_document_is_none() {
    let backend = create_test_backend();
    let params = CompletionParams {
        text_document_position: TextDocumentPositionParams {
            text_document: TextDocumentIdentifier {
                uri: Url::parse("file:///never_opened.php").unwrap(),
            },
            position: Position {
                line: 0,
                character: 0,
            },
        },
        work_done_progress_params: WorkDoneProgressParams::default(),
        partial_result_params: PartialResultParams::default(),
        context: None,
    };
    assert!(backend.completion(params).await.unwrap().is_none());
}
