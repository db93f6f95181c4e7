//! Local syntax check.
//!
//! Parses the submission as a Rust source file. Nothing is compiled or run.

/// Prefix of every diagnostic returned by [`validate`].
pub const SYNTAX_ERROR_PREFIX: &str = "Syntax Error: ";

/// Returns `None` when `source` parses as a Rust file, otherwise a
/// human-readable diagnostic starting with [`SYNTAX_ERROR_PREFIX`].
///
/// No repair is attempted on failure.
pub fn validate(source: &str) -> Option<String> {
    let outcome = match syn::parse_file(source) {
        Ok(_) => None,
        Err(err) => Some(describe(&err)),
    };
    // Every parse registers the source in a thread-local span map that is
    // never freed on its own. No span outlives this call, so drop them all.
    proc_macro2::extra::invalidate_current_thread_spans();
    outcome
}

fn describe(err: &syn::Error) -> String {
    let start = err.span().start();
    // Line 0 means the span carries no location (e.g. unexpected end of input).
    if start.line == 0 {
        format!("{SYNTAX_ERROR_PREFIX}{err}")
    } else {
        format!(
            "{SYNTAX_ERROR_PREFIX}{err} (line {}, column {})",
            start.line,
            start.column + 1
        )
    }
}
