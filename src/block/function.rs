//! Function and method declarations.
//!
//! Matches lines such as:
//!
//! ```text
//! public function add($a, $b = 1.5) {
//! abstract protected static function &make(array $x = [1, 2]): ?Foo;
//! function helper(): void
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::params::parse_params;
use crate::doc::{Doc, FUNCTION_MESSAGE, PLACEHOLDER_TYPE};
use crate::util::strip_trailing_comment;

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?P<modifiers>(?:(?:abstract|final|static|public|protected|private)\s+)*)function(?:\s+&?|\s*&)\s*(?P<name>[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*)\s*\(",
    )
    .unwrap()
});

/// Structural groups of a matched function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionMatch<'a> {
    /// Modifier keywords in source order (lowercased).
    pub modifiers: Vec<String>,
    /// Function or method name.
    pub name: &'a str,
    /// Raw text between the parentheses.
    pub params: &'a str,
    /// Explicit return type annotation.
    pub return_type: Option<&'a str>,
}

/// Try to match a function declaration on `line`.
pub fn match_function(line: &str) -> Option<FunctionMatch<'_>> {
    let caps = RE_FUNCTION.captures(line)?;
    let name = caps.name("name")?.as_str();
    let modifiers: Vec<String> = caps
        .name("modifiers")
        .map(|m| {
            m.as_str()
                .split_whitespace()
                .map(str::to_ascii_lowercase)
                .collect()
        })
        .unwrap_or_default();

    // The regex stops right after the opening paren.
    let after_open = &line[caps.get(0)?.end()..];
    let (params, return_type) = match find_matching_paren(after_open) {
        Some(close) => (
            &after_open[..close],
            extract_return_type(&after_open[close + 1..]),
        ),
        // Unterminated list: treat the remainder as the parameters.
        None => (after_open, None),
    };

    Some(FunctionMatch {
        modifiers,
        name,
        params,
        return_type,
    })
}

/// Build the model for a function declaration.
///
/// `params_hint` replaces the matched parameter text when the caller has
/// already extracted the parameter body itself.
pub fn parse_function(line: &str, params_hint: Option<&str>) -> Option<Doc> {
    let matched = match_function(line)?;

    let mut doc = Doc::new(FUNCTION_MESSAGE);
    doc.params = parse_params(params_hint.unwrap_or(matched.params));
    doc.return_type = Some(
        matched
            .return_type
            .unwrap_or(PLACEHOLDER_TYPE)
            .to_string(),
    );

    Some(doc)
}

/// Position of the `)` that closes an already-opened paren.  Quotes are
/// skipped so a `)` inside a default string does not end the list.
fn find_matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// Extract `Type` from `: Type {` / `: Type;` following the closing paren.
/// A trailing comment is not part of the type.
fn extract_return_type(after_close: &str) -> Option<&str> {
    let rest = strip_trailing_comment(after_close)
        .trim_start()
        .strip_prefix(':')?
        .trim_start();
    let end = rest.find(['{', ';']).unwrap_or(rest.len());
    let ret = rest[..end].trim();
    (!ret.is_empty()).then_some(ret)
}
