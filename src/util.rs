/// Position helpers shared by the completion code.
///
/// LSP positions count characters in UTF-16 code units.  PHP source is
/// overwhelmingly ASCII, so characters are treated as Unicode scalar
/// values here, which is exact for ASCII and close enough elsewhere.
use tower_lsp::lsp_types::Position;

/// The text of line `line` (without its newline), if it exists.
pub fn line_at(content: &str, line: u32) -> Option<&str> {
    content.lines().nth(line as usize)
}

/// Convert a character column within `line` to a byte offset, clamped to
/// the end of the line.
pub fn char_to_byte(line: &str, character: u32) -> usize {
    line.char_indices()
        .nth(character as usize)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

/// Convert a byte offset within `line` back to a character column.
pub fn byte_to_char(line: &str, byte: usize) -> u32 {
    line[..byte.min(line.len())].chars().count() as u32
}

/// Split a line at the cursor position.
pub fn split_at_position(content: &str, position: Position) -> Option<(&str, &str)> {
    let line = line_at(content, position.line)?;
    Some(line.split_at(char_to_byte(line, position.character)))
}

/// Leading whitespace of `line`.
pub fn indentation(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Cut `text` at the first comment opener (`//`, `/*` or `#`) that is not
/// inside a string literal.  `#[` starts an attribute, not a comment.
pub fn strip_trailing_comment(text: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
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
        let next = chars.peek().map(|&(_, n)| n);
        match (c, next) {
            ('\'' | '"', _) => quote = Some(c),
            ('/', Some('/' | '*')) => return text[..i].trim_end(),
            ('#', next) if next != Some('[') => return text[..i].trim_end(),
            _ => {}
        }
    }
    text
}
