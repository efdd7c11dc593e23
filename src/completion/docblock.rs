//! Docblock completion after `/**`.
//!
//! When the text before the cursor ends with `/**`, the declaration that
//! follows is collected (possibly across several lines), classified by
//! [`crate::block`], rendered by [`crate::render`], and offered as a single
//! snippet completion that replaces the `/**` opener.

use tower_lsp::lsp_types::*;

use crate::block;
use crate::config::Config;
use crate::doc::Doc;
use crate::render::build_snippet;
use crate::util::{
    byte_to_char, indentation, line_at, split_at_position, strip_trailing_comment,
};

/// Give up collecting a declaration after this many lines.
const MAX_DECLARATION_LINES: usize = 10;

/// The `/**` opener found on the cursor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocblockTrigger {
    /// Range to replace: from the `/**` to the end of the line, so that an
    /// editor-inserted `*/` is swallowed too.
    pub range: Range,
    /// Whitespace preceding the `/**`.
    pub indent: String,
}

/// Detect whether the cursor sits right after a fresh `/**`.
///
/// The opener must be the first thing on the line, and only whitespace or
/// an auto-closed `*/` may follow the cursor.
pub fn detect_trigger(content: &str, position: Position) -> Option<DocblockTrigger> {
    let (before, after) = split_at_position(content, position)?;

    let opener = before.trim_end().strip_suffix("/**")?;
    if !opener.trim().is_empty() {
        return None;
    }
    let tail = after.trim();
    if !tail.is_empty() && tail != "*/" {
        return None;
    }

    let line = line_at(content, position.line)?;
    let start = byte_to_char(line, opener.len());
    let end = byte_to_char(line, line.len());

    Some(DocblockTrigger {
        range: Range {
            start: Position {
                line: position.line,
                character: start,
            },
            end: Position {
                line: position.line,
                character: end,
            },
        },
        indent: indentation(line).to_string(),
    })
}

/// Join the lines after `line` into one logical declaration.
///
/// Trailing comments are dropped, then blank lines and attribute-only lines
/// (`#[Route('/')]`) are skipped; collection stops at the first line
/// containing `{` or `;`.
pub fn declaration_after(content: &str, line: u32) -> Option<String> {
    let mut decl = String::new();

    for text in content
        .lines()
        .skip(line as usize + 1)
        .take(MAX_DECLARATION_LINES)
    {
        let trimmed = strip_trailing_comment(text.trim());
        if trimmed.is_empty() || (decl.is_empty() && is_attribute_line(trimmed)) {
            continue;
        }
        if !decl.is_empty() {
            decl.push(' ');
        }
        decl.push_str(trimmed);
        if trimmed.contains('{') || trimmed.contains(';') {
            break;
        }
    }

    (!decl.is_empty()).then_some(decl)
}

fn is_attribute_line(trimmed: &str) -> bool {
    trimmed.starts_with("#[") && trimmed.ends_with(']')
}

/// Build the documentation model for the declaration after `line`,
/// falling back to the empty model when nothing is recognised.
pub fn doc_for_line(content: &str, line: u32) -> Doc {
    declaration_after(content, line)
        .and_then(|decl| block::parse_declaration(&decl))
        .unwrap_or_else(Doc::empty)
}

/// Indent every line after the first so a multi-line snippet lines up
/// under the `/**`.
pub fn indent_snippet(snippet: &str, indent: &str) -> String {
    if indent.is_empty() {
        return snippet.to_string();
    }
    snippet.replace('\n', &format!("\n{}", indent))
}

/// Build the docblock completion item for the cursor position, or `None`
/// when the cursor is not right after a `/**` opener.
pub fn build_docblock_completion(
    content: &str,
    position: Position,
    config: &Config,
) -> Option<CompletionItem> {
    let trigger = detect_trigger(content, position)?;
    let doc = doc_for_line(content, position.line);
    let snippet = indent_snippet(&build_snippet(&doc, config), &trigger.indent);

    Some(CompletionItem {
        label: "/** */".to_string(),
        kind: Some(CompletionItemKind::SNIPPET),
        detail: Some("PHPDoc block".to_string()),
        filter_text: Some("/**".to_string()),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        text_edit: Some(CompletionTextEdit::Edit(TextEdit {
            range: trigger.range,
            new_text: snippet,
        })),
        ..CompletionItem::default()
    })
}
