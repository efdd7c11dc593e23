//! Declaration matching and documentation-model building.
//!
//! Each declaration kind lives in its own submodule next to the regex that
//! recognises it:
//!
//! - [`function`]: functions and methods (`@param`, `@return`)
//! - [`property`]: class properties (`@var`)
//! - [`class`]: classes, interfaces, traits and enums (summary only)
//!
//! [`parse_declaration`] tries the kinds in [`BlockKind::PRECEDENCE`]
//! order.  The order matters because the patterns overlap: a line that
//! declares a method also starts with a visibility keyword.

pub mod class;
pub mod function;
pub mod params;
pub mod property;

use crate::doc::Doc;

/// The closed set of declaration kinds a docblock can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Function,
    Property,
    Class,
}

impl BlockKind {
    /// Matching order.  The first kind whose pattern matches wins.
    pub const PRECEDENCE: &'static [BlockKind] =
        &[BlockKind::Function, BlockKind::Property, BlockKind::Class];

    /// Run this kind's matcher and parser against `line`.
    ///
    /// `params_hint` is only consulted by [`BlockKind::Function`].
    pub fn parse(self, line: &str, params_hint: Option<&str>) -> Option<Doc> {
        match self {
            BlockKind::Function => function::parse_function(line, params_hint),
            BlockKind::Property => property::parse_property(line),
            BlockKind::Class => class::parse_class(line),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Function => "function",
            BlockKind::Property => "property",
            BlockKind::Class => "class",
        }
    }
}

/// Classify `line` and build its documentation model.
///
/// Returns `None` when no declaration kind recognises the line; callers
/// that still want a block fall back to [`Doc::empty`].
pub fn parse_declaration(line: &str) -> Option<Doc> {
    parse_declaration_with_params(line, None)
}

/// Like [`parse_declaration`], but with a parameter body the caller has
/// already extracted (e.g. from a multi-line signature).
pub fn parse_declaration_with_params(line: &str, params_hint: Option<&str>) -> Option<Doc> {
    classify(line, params_hint).map(|(_, doc)| doc)
}

/// Like [`parse_declaration_with_params`], also reporting which kind matched.
pub fn classify(line: &str, params_hint: Option<&str>) -> Option<(BlockKind, Doc)> {
    let found = BlockKind::PRECEDENCE
        .iter()
        .find_map(|kind| kind.parse(line, params_hint).map(|doc| (*kind, doc)));

    match &found {
        Some((kind, _)) => tracing::debug!(kind = kind.as_str(), "matched declaration"),
        None => tracing::debug!(line, "no declaration matched"),
    }
    found
}
