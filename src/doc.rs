//! The documentation model.
//!
//! A [`Doc`] captures which tags a generated PHPDoc block should carry
//! before any snippet syntax is applied.  Block parsers in [`crate::block`]
//! produce it; [`crate::render`] turns it into text.

use serde::{Deserialize, Serialize};

/// The marker used wherever no type could be determined.
pub const PLACEHOLDER_TYPE: &str = "[type]";

/// Summary text for function and method blocks.
pub const FUNCTION_MESSAGE: &str = "Undocumented function";

/// Summary text for property blocks.
pub const VARIABLE_MESSAGE: &str = "Undocumented variable";

/// Summary text for class, interface, trait and enum blocks.
pub const CLASS_MESSAGE: &str = "Undocumented class";

/// A type/name pair used for `@param` and `@var` tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Type hint, inferred type, or [`PLACEHOLDER_TYPE`].
    #[serde(rename = "type")]
    pub type_name: String,
    /// Variable name including the `$` sigil (e.g. `"$count"`).
    pub name: String,
}

impl Param {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

/// Intermediate representation of a docblock.
///
/// Built fresh for every matched declaration.  `var` is only set for
/// properties, `params` / `return_type` only for functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    /// The summary line.
    pub message: String,
    /// `@param` tags in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    /// `@return` tag content.
    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// `@var` tag content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var: Option<Param>,
}

impl Doc {
    /// Create a model carrying only a summary message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// The fallback model used when no declaration kind matched.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `true` when the model has no tags and no message.
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
            && self.params.is_empty()
            && self.return_type.is_none()
            && self.var.is_none()
    }
}
