//! Property declarations.
//!
//! A property line needs a visibility keyword (or the legacy `var`), which
//! is what separates `public $count = 0;` from a plain `$count = 0;`
//! assignment inside a method body.

use std::sync::LazyLock;

use regex::Regex;

use super::params::split_params;
use crate::doc::{Doc, PLACEHOLDER_TYPE, Param, VARIABLE_MESSAGE};
use crate::inference::infer_type;

static RE_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?P<leading>(?:(?:static|readonly|final|abstract)\s+)*)(?P<visibility>public|protected|private|var)\s+(?P<trailing>(?:(?:static|readonly|final|abstract)\s+)*)(?:(?P<type>[?\\(A-Za-z_\x{80}-\x{10FFFF}][\\A-Za-z0-9_|&?()\x{80}-\x{10FFFF}]*)\s+)?(?P<name>\$[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*)\s*(?:=\s*(?P<value>[^;]*))?",
    )
    .unwrap()
});

/// Structural groups of a matched property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMatch<'a> {
    /// `public`, `protected`, `private` or `var` (lowercased).
    pub visibility: String,
    /// Whether `static` appeared among the modifiers.
    pub is_static: bool,
    /// Native type declaration (PHP 7.4+ typed properties).
    pub type_hint: Option<&'a str>,
    /// Property name including the `$` sigil.
    pub name: &'a str,
    /// Initializer expression after `=`, up to the terminating `;` or the
    /// next top-level `,` of a grouped declaration.
    pub value: Option<&'a str>,
}

/// Try to match a property declaration on `line`.
pub fn match_property(line: &str) -> Option<PropertyMatch<'_>> {
    let caps = RE_PROPERTY.captures(line)?;

    let modifier_text = |group: &str| {
        caps.name(group)
            .map(|m| m.as_str().to_ascii_lowercase())
            .unwrap_or_default()
    };
    let is_static = modifier_text("leading")
        .split_whitespace()
        .chain(modifier_text("trailing").split_whitespace())
        .any(|m| m == "static");

    Some(PropertyMatch {
        visibility: caps["visibility"].to_ascii_lowercase(),
        is_static,
        type_hint: caps.name("type").map(|m| m.as_str()),
        name: caps.name("name")?.as_str(),
        // `public $a = 1, $b = 2;` documents `$a` with its own initializer.
        value: caps
            .name("value")
            .and_then(|m| split_params(m.as_str()).into_iter().next()),
    })
}

/// Build the model for a property declaration.
pub fn parse_property(line: &str) -> Option<Doc> {
    let matched = match_property(line)?;

    let type_name = match (matched.type_hint, matched.value) {
        (Some(hint), _) => hint.to_string(),
        (None, Some(value)) => infer_type(value),
        (None, None) => PLACEHOLDER_TYPE.to_string(),
    };

    let mut doc = Doc::new(VARIABLE_MESSAGE);
    doc.var = Some(Param::new(type_name, matched.name));
    Some(doc)
}
