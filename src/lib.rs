//! PHPDoc block generation.
//!
//! Given a single PHP declaration line, this crate works out which kind of
//! declaration it is, pulls out parameter names, type hints and default
//! values, infers types from literals, and builds a [`Doc`] model that is
//! rendered into a `/** ... */` block.
//!
//! ```text
//! public function add($a, $b = 1.5) {
//! ```
//!
//! becomes
//!
//! ```text
//! /**
//!  * Undocumented function
//!  *
//!  * @param [type] $a
//!  * @param float $b
//!  * @return [type]
//!  */
//! ```
//!
//! The parsing core ([`block`], [`inference`], [`doc`]) is pure and takes no
//! configuration.  [`render`] applies the [`config::Config`], and the
//! [`Backend`] exposes everything to editors as a language server.
//!
//! # Modules
//!
//! - [`block`]: declaration matchers and block parsers
//! - [`inference`]: literal-based type inference
//! - [`doc`]: the documentation model
//! - [`render`]: snippet and plain-text rendering
//! - [`config`]: layered rendering configuration
//! - [`completion`]: the `/**` completion provider
//! - `server`: the `LanguageServer` implementation

use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::{Mutex, RwLock};
use tower_lsp::Client;
use tower_lsp::lsp_types::MessageType;

pub mod block;
pub mod completion;
pub mod config;
pub mod doc;
pub mod error;
pub mod inference;
pub mod logging;
pub mod render;
mod server;
pub mod util;

pub use block::{BlockKind, parse_declaration, parse_declaration_with_params};
pub use config::Config;
pub use doc::{Doc, PLACEHOLDER_TYPE, Param};
pub use error::{DocblockerError, Result};
pub use inference::infer_type;

pub struct Backend {
    name: String,
    version: String,
    /// Full text of every open document, keyed by URI.
    open_files: Mutex<HashMap<String, String>>,
    /// Rendering options currently in effect.
    config: RwLock<Config>,
    workspace_root: Mutex<Option<PathBuf>>,
    client: Option<Client>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client: Some(client),
            ..Self::new_test()
        }
    }

    /// A backend with no client attached, for tests.
    pub fn new_test() -> Self {
        Self::new_test_with_config(Config::default())
    }

    pub fn new_test_with_config(config: Config) -> Self {
        Self {
            name: "PHP DocBlocker".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            open_files: Mutex::new(HashMap::new()),
            config: RwLock::new(config),
            workspace_root: Mutex::new(None),
            client: None,
        }
    }

    /// A snapshot of the configuration currently in effect.
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Text of an open document, if any.
    pub fn document(&self, uri: &str) -> Option<String> {
        self.open_files.lock().get(uri).cloned()
    }

    pub(crate) async fn log(&self, typ: MessageType, message: String) {
        if let Some(client) = &self.client {
            client.log_message(typ, message).await;
        }
    }
}
