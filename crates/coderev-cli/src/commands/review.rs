use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use coderev_application::{AppServices, ConfigOverrides, SessionStore};
use coderev_core::{ReviewError, ReviewRequest, ReviewResult};
use serde::Serialize;

/// Reviews one file through the same pipeline as the web UI.
pub async fn run(
    config_dir: Option<&Path>,
    path: &Path,
    json: bool,
    model: Option<String>,
) -> Result<ExitCode> {
    let source = read_source(path)?;
    let services = AppServices::load(
        config_dir,
        ConfigOverrides {
            model,
            bind: None,
        },
    )
    .await?;

    let session_id = SessionStore::new_session_id();
    let outcome = services
        .review_usecase
        .review_in_session(&services.session_store, &session_id, &ReviewRequest::new(source))
        .await;

    let rendered = if json {
        render_json(&outcome)?
    } else {
        render_text(&outcome)
    };

    match outcome {
        Ok(_) => {
            println!("{rendered}");
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => {
            eprintln!("{rendered}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn render_text(outcome: &Result<ReviewResult, ReviewError>) -> String {
    match outcome {
        Ok(result) => format!(
            "Bug Report\n{}\n\nFixed Code\n{}",
            result.issues.join("\n"),
            result.fixed_code
        ),
        Err(ReviewError::Syntax { message }) => format!("Bug Report\n{message}"),
        Err(err) => err.user_message(),
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonOutcome<'a> {
    Review(&'a ReviewResult),
    Failure { error: String },
}

fn render_json(outcome: &Result<ReviewResult, ReviewError>) -> Result<String> {
    let value = match outcome {
        Ok(result) => JsonOutcome::Review(result),
        Err(err) => JsonOutcome::Failure {
            error: err.user_message(),
        },
    };
    serde_json::to_string_pretty(&value).context("Failed to encode JSON output")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReviewResult {
        ReviewResult {
            issues: vec!["Issue A".to_string(), "Issue B".to_string()],
            fixed_code: "fn main() {}".to_string(),
        }
    }

    #[test]
    fn test_text_output_has_both_sections() {
        let text = render_text(&Ok(sample()));
        assert_eq!(text, "Bug Report\nIssue A\nIssue B\n\nFixed Code\nfn main() {}");
    }

    #[test]
    fn test_syntax_error_text_is_bug_report_only() {
        let text = render_text(&Err(ReviewError::syntax("Syntax Error: lex error")));
        assert_eq!(text, "Bug Report\nSyntax Error: lex error");
    }

    #[test]
    fn test_json_output_shapes() {
        let ok: serde_json::Value =
            serde_json::from_str(&render_json(&Ok(sample())).unwrap()).unwrap();
        assert_eq!(ok["issues"][1], "Issue B");
        assert_eq!(ok["fixed_code"], "fn main() {}");

        let err: serde_json::Value =
            serde_json::from_str(&render_json(&Err(ReviewError::EmptyInput)).unwrap()).unwrap();
        assert_eq!(
            err["error"],
            "Please enter your Rust code before clicking review."
        );
    }

    #[test]
    fn test_read_source_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("lib.rs");
        std::fs::write(&path, "pub fn f() {}").unwrap();
        assert_eq!(read_source(&path).unwrap(), "pub fn f() {}");
        assert!(read_source(&dir.path().join("missing.rs")).is_err());
    }
}
