//! Class-like declarations: classes, interfaces, traits and enums.

use std::sync::LazyLock;

use regex::Regex;

use crate::doc::{CLASS_MESSAGE, Doc};

static RE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?:abstract|final|readonly)\s+)*(?P<kind>class|interface|trait|enum)\s+(?P<name>[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*)",
    )
    .unwrap()
});

/// Structural groups of a matched class-like declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMatch<'a> {
    /// `class`, `interface`, `trait` or `enum` (lowercased).
    pub kind: String,
    pub name: &'a str,
}

pub fn match_class(line: &str) -> Option<ClassMatch<'_>> {
    let caps = RE_CLASS.captures(line)?;
    Some(ClassMatch {
        kind: caps["kind"].to_ascii_lowercase(),
        name: caps.name("name")?.as_str(),
    })
}

/// Class-like blocks only carry the summary line.
pub fn parse_class(line: &str) -> Option<Doc> {
    match_class(line).map(|_| Doc::new(CLASS_MESSAGE))
}
