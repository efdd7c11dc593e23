//! Literal-based type inference.
//!
//! Default values and property initializers are the only type evidence a
//! single declaration line offers when there is no native type hint.  The
//! rules here look at the shape of the literal and nothing else: no
//! evaluation, no constant lookups.

use std::sync::LazyLock;

use regex::Regex;

use crate::doc::PLACEHOLDER_TYPE;

static RE_BOOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^(?:true|false)$").unwrap());
static RE_STRING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^(?:['"]|<<<)"#).unwrap());
static RE_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(?:\d[\d_]*)?\.\d[\d_]*|\d[\d_]*\.)(?:[eE][+-]?\d+)?$|^[+-]?\d[\d_]*[eE][+-]?\d+$")
        .unwrap()
});
static RE_INT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*)$").unwrap()
});
static RE_ARRAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^(?:\[|array\s*\()").unwrap());

/// Guess the PHP type of a literal expression.
///
/// Returns [`PLACEHOLDER_TYPE`] whenever the literal gives no usable hint,
/// including `null` and object construction.
pub fn infer_type(literal: &str) -> String {
    let value = literal.trim();

    let inferred = if value.is_empty() {
        PLACEHOLDER_TYPE
    } else if RE_BOOL.is_match(value) || value.starts_with('!') {
        "bool"
    } else if RE_STRING.is_match(value) {
        "string"
    } else if RE_FLOAT.is_match(value) {
        "float"
    } else if RE_INT.is_match(value) {
        "int"
    } else if RE_ARRAY.is_match(value) {
        "array"
    } else {
        // `null`, `new Foo()`, constants and anything else unrecognised.
        PLACEHOLDER_TYPE
    };

    tracing::trace!(literal = value, inferred, "inferred literal type");
    inferred.to_string()
}
