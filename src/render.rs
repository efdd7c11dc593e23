//! Turning a [`Doc`] into docblock text.
//!
//! Two flavours share one code path: LSP snippet syntax with numbered tab
//! stops (`${2:[type]}`) for the editor, and plain text for the CLI.
//!
//! ```text
//! /**
//!  * ${1:Undocumented function}
//!  *
//!  * @param ${2:[type]} ${3:\$a}
//!  * @return ${4:[type]}
//!  */
//! ```

use crate::config::Config;
use crate::doc::Doc;

/// Accumulates docblock text, numbering placeholders as they are added.
struct SnippetBuilder {
    value: String,
    next_stop: u32,
    snippet: bool,
}

impl SnippetBuilder {
    fn new(snippet: bool) -> Self {
        Self {
            value: String::new(),
            next_stop: 1,
            snippet,
        }
    }

    fn text(&mut self, text: &str) {
        if self.snippet {
            self.value.push_str(&escape_text(text));
        } else {
            self.value.push_str(text);
        }
    }

    /// Append text verbatim, even in snippet mode.
    fn raw(&mut self, text: &str) {
        self.value.push_str(text);
    }

    fn placeholder(&mut self, default: &str) {
        let stop = self.next_stop;
        self.next_stop += 1;
        if !self.snippet {
            self.value.push_str(default);
        } else if default.is_empty() {
            self.value.push_str(&format!("${{{}}}", stop));
        } else {
            self.value
                .push_str(&format!("${{{}:{}}}", stop, escape_placeholder(default)));
        }
    }

    /// Emit the blank ` *` separator line once, before the first tag.
    fn gap(&mut self, pending: &mut bool) {
        if *pending {
            self.raw("\n *");
            *pending = false;
        }
    }

    fn finish(self) -> String {
        self.value
    }
}

/// Render `doc` as an LSP snippet.
pub fn build_snippet(doc: &Doc, config: &Config) -> String {
    build(doc, config, true)
}

/// Render `doc` as plain text, with placeholders filled by their defaults.
pub fn build_plain(doc: &Doc, config: &Config) -> String {
    build(doc, config, false)
}

fn build(doc: &Doc, config: &Config, snippet: bool) -> String {
    let mut out = SnippetBuilder::new(snippet);

    // The fallback block: no gap, no extra lines.
    if doc.is_empty() {
        out.raw("/**\n * ");
        out.placeholder("");
        out.raw("\n */");
        return out.finish();
    }

    if config.single_line_property
        && let Some(var) = &doc.var
    {
        out.raw("/** @var");
        out.text(&config.tag_separator);
        out.placeholder(&var.type_name);
        out.raw(" */");
        return out.finish();
    }

    let sep = config.tag_separator.as_str();
    let mut gap_pending = config.gap;

    out.raw("/**\n * ");
    out.placeholder(&doc.message);

    for param in &doc.params {
        out.gap(&mut gap_pending);
        out.raw("\n * @param");
        out.text(sep);
        out.placeholder(&param.type_name);
        out.text(sep);
        out.placeholder(&param.name);
    }

    if let Some(var) = &doc.var {
        out.gap(&mut gap_pending);
        out.raw("\n * @var");
        out.text(sep);
        out.placeholder(&var.type_name);
    }

    if let Some(ret) = doc
        .return_type
        .as_deref()
        .filter(|ret| config.return_void || !ret.eq_ignore_ascii_case("void"))
    {
        if gap_pending {
            out.gap(&mut gap_pending);
        } else if config.return_gap && !doc.params.is_empty() {
            out.raw("\n *");
        }
        out.raw("\n * @return");
        out.text(sep);
        out.placeholder(ret);
    }

    // Extra lines are inserted verbatim so that editor snippet variables
    // such as `${CURRENT_YEAR}` still expand.
    if !config.extra.is_empty() {
        out.gap(&mut gap_pending);
        for line in &config.extra {
            out.raw("\n *");
            if !line.is_empty() {
                out.raw(" ");
                out.raw(line);
            }
        }
    }

    out.raw("\n */");
    out.finish()
}

/// Escape text outside placeholders (`$` and `\`).
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '$' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape placeholder defaults (`$`, `}` and `\`).
fn escape_placeholder(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '$' | '}' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
