//! Parameter list splitting and clause parsing.
//!
//! A parameter list such as `array $x = [1, 2], ?Foo &$y, string ...$rest`
//! is split on *top-level* commas only, then each clause is broken into an
//! optional type hint, the `$name`, and an optional default value.

use std::sync::LazyLock;

use regex::Regex;

use crate::doc::{PLACEHOLDER_TYPE, Param};
use crate::inference::infer_type;

/// `[type] [&] [...] $name [= default]`, after attributes and promotion
/// modifiers have been stripped.
static RE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^(?P<type>[^$]*?)\s*&?\s*(?:\.\.\.)?\s*(?P<name>\$[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*)\s*(?:=\s*(?P<default>.*))?$",
    )
    .unwrap()
});

/// A single parsed parameter clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamClause {
    /// Native type hint exactly as written (whitespace collapsed).
    pub type_hint: Option<String>,
    /// Name including the `$` sigil.
    pub name: String,
    /// Default value expression, if any.
    pub default: Option<String>,
}

impl ParamClause {
    /// Resolve the documented type: hint first, then the default value,
    /// then the placeholder.
    pub fn to_param(&self) -> Param {
        let type_name = match (&self.type_hint, &self.default) {
            (Some(hint), _) => hint.clone(),
            (None, Some(default)) => infer_type(default),
            (None, None) => PLACEHOLDER_TYPE.to_string(),
        };
        Param::new(type_name, self.name.clone())
    }
}

/// Split a parameter list on commas that are not nested inside brackets
/// or string literals.
///
/// Unbalanced input never fails: an unterminated quote or bracket simply
/// swallows the rest of the list into the final clause.  Blank clauses
/// (e.g. from a trailing comma) are dropped.
pub fn split_params(params: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in params.char_indices() {
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
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&params[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&params[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Parse one parameter clause.  Returns `None` when no `$name` is present.
pub fn parse_clause(clause: &str) -> Option<ParamClause> {
    let clause = strip_modifiers(strip_attributes(clause.trim()));
    let caps = RE_CLAUSE.captures(clause)?;

    let type_hint = caps
        .name("type")
        .map(|m| collapse_whitespace(m.as_str()))
        .filter(|t| !t.is_empty());
    let default = caps
        .name("default")
        .map(|m| m.as_str().trim().to_string())
        .filter(|d| !d.is_empty());

    Some(ParamClause {
        type_hint,
        name: caps["name"].to_string(),
        default,
    })
}

/// Split and parse a whole parameter list into `@param` descriptors.
pub fn parse_params(params: &str) -> Vec<Param> {
    split_params(params)
        .into_iter()
        .filter_map(parse_clause)
        .map(|clause| clause.to_param())
        .collect()
}

/// Drop leading `#[...]` attribute groups.
fn strip_attributes(mut clause: &str) -> &str {
    while let Some(rest) = clause.strip_prefix("#[") {
        let mut depth = 1usize;
        let mut end = None;
        for (i, c) in rest.char_indices() {
            match c {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        end = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }
        match end {
            Some(i) => clause = rest[i + 1..].trim_start(),
            None => return "",
        }
    }
    clause
}

/// Drop constructor-promotion modifiers (`public`, `readonly`, ...).
fn strip_modifiers(mut clause: &str) -> &str {
    loop {
        let (word, rest) = match clause.split_once(char::is_whitespace) {
            Some(split) => split,
            None => return clause,
        };
        match word.to_ascii_lowercase().as_str() {
            "public" | "protected" | "private" | "readonly" => clause = rest.trim_start(),
            _ => return clause,
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
