//! Rendering configuration.
//!
//! Options only affect how a [`Doc`](crate::doc::Doc) is turned into text;
//! declaration parsing never reads them.
//!
//! Sources are layered, later ones overriding earlier ones:
//!
//!   1. built-in defaults
//!   2. `<config dir>/php-docblocker/config.toml` (user-wide)
//!   3. `.php-docblocker.toml` in the workspace root
//!   4. JSON sent by the editor (`initializationOptions` or
//!      `workspace/didChangeConfiguration`)
//!
//! Keys use the camelCase spelling editors already know (`returnVoid`,
//! `singleLineProperty`, ...); `prependTagContent` is accepted for
//! `tagSeparator`.

use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use serde::{Deserialize, Serialize};

use crate::error::{DocblockerError, Result};

/// File name looked up in the workspace root.
pub const WORKSPACE_CONFIG_FILE: &str = ".php-docblocker.toml";

/// Section name used when the editor nests our settings.
pub const SETTINGS_SECTION: &str = "phpDocblocker";

/// Section name of the VS Code extension's settings, also accepted.
pub const EXTENSION_SETTINGS_SECTION: &str = "php-docblocker";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Leave a blank ` *` line between the summary and the first tag.
    pub gap: bool,
    /// Leave a blank line between the `@param` tags and `@return`.
    pub return_gap: bool,
    /// Emit `@return void`.  When false a `void` return tag is dropped.
    pub return_void: bool,
    /// Render property blocks as `/** @var type */` on one line.
    pub single_line_property: bool,
    /// Literal tag lines appended to every block (e.g. `@author Me`).
    pub extra: Vec<String>,
    /// Text placed between a tag keyword and its content.
    #[serde(alias = "prependTagContent")]
    pub tag_separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap: true,
            return_gap: false,
            return_void: true,
            single_line_property: false,
            extra: Vec::new(),
            tag_separator: " ".to_string(),
        }
    }
}

/// A partially specified config where every key is optional.  Used for
/// layering so that a file setting only `gap` does not reset the rest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigOverlay {
    gap: Option<bool>,
    return_gap: Option<bool>,
    return_void: Option<bool>,
    single_line_property: Option<bool>,
    extra: Option<Vec<String>>,
    #[serde(alias = "prependTagContent")]
    tag_separator: Option<String>,
}

impl Config {
    /// Load defaults, then the user-wide file, then the workspace file.
    ///
    /// Missing files are skipped; unreadable or malformed ones are errors.
    pub fn load(workspace_root: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(global) = global_config_path() {
            config.merge_file(&global)?;
        }
        if let Some(root) = workspace_root {
            config.merge_file(&root.join(WORKSPACE_CONFIG_FILE))?;
        }

        Ok(config)
    }

    /// Overlay settings from a TOML file.  A missing file is not an error.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(DocblockerError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let overlay: ConfigOverlay =
            toml::from_str(&content).map_err(|source| DocblockerError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        self.apply(overlay);
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(())
    }

    /// Overlay settings sent by the editor.
    ///
    /// Accepts either the bare settings object or one nested under
    /// [`SETTINGS_SECTION`] or [`EXTENSION_SETTINGS_SECTION`].  `null` leaves
    /// the config untouched.
    pub fn merge_json(&mut self, value: &serde_json::Value) -> Result<()> {
        let value = value
            .get(SETTINGS_SECTION)
            .or_else(|| value.get(EXTENSION_SETTINGS_SECTION))
            .unwrap_or(value);
        if value.is_null() {
            return Ok(());
        }
        let overlay: ConfigOverlay = serde_json::from_value(value.clone())?;
        self.apply(overlay);
        Ok(())
    }

    fn apply(&mut self, overlay: ConfigOverlay) {
        if let Some(v) = overlay.gap {
            self.gap = v;
        }
        if let Some(v) = overlay.return_gap {
            self.return_gap = v;
        }
        if let Some(v) = overlay.return_void {
            self.return_void = v;
        }
        if let Some(v) = overlay.single_line_property {
            self.single_line_property = v;
        }
        if let Some(v) = overlay.extra {
            self.extra = v;
        }
        if let Some(v) = overlay.tag_separator {
            self.tag_separator = v;
        }
    }
}

/// `~/.config/php-docblocker/config.toml` (or the platform equivalent).
pub fn global_config_path() -> Option<PathBuf> {
    let strategy = etcetera::choose_base_strategy().ok()?;
    Some(
        strategy
            .config_dir()
            .join("php-docblocker")
            .join("config.toml"),
    )
}
