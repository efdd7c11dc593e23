/// Completion-related modules.
///
/// - **docblock**: detecting a `/**` opener and building the snippet item
/// - **handler**: the `textDocument/completion` entry point on `Backend`
pub mod docblock;
mod handler;
