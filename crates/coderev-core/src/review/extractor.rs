//! Reply extraction.
//!
//! Pulls the two sections of the mandated template out of a free-text model
//! reply. Extraction never fails: a section that cannot be located, or that
//! is empty, is replaced by its placeholder.

use std::sync::LazyLock;

use regex::Regex;

use super::ReviewResult;

/// Issue list used when the reply has no usable `Bug Report:` section.
pub const NO_ISSUES_PLACEHOLDER: &str = "No specific issues detected.";

/// Corrected text used when the reply has no usable `Fixed Code:` block.
pub const NO_FIXED_CODE_PLACEHOLDER: &str = "No fixed code generated.";

// Markers may be wrapped in `**` as the template asks, or bare.
static BUG_REPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:\*\*)?Bug Report:(?:\*\*)?\s*(.*?)(?:(?:\*\*)?Fixed Code:|\z)")
        .expect("bug report pattern is valid")
});

// The opening fence is optional; when present its info line is skipped so an
// empty block captures nothing rather than the fence itself.
static FIXED_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:\*\*)?Fixed Code:(?:\*\*)?\s*(?:```[A-Za-z0-9_+\-]*)?[ \t]*\r?\n(.*?)```")
        .expect("fixed code pattern is valid")
});

/// Splits `reply` into issue lines and corrected text.
pub fn extract(reply: &str) -> ReviewResult {
    let issues = capture(&BUG_REPORT_RE, reply)
        .map(|body| body.lines().map(str::to_string).collect())
        .unwrap_or_else(|| vec![NO_ISSUES_PLACEHOLDER.to_string()]);

    let fixed_code = capture(&FIXED_CODE_RE, reply)
        .map(str::to_string)
        .unwrap_or_else(|| NO_FIXED_CODE_PLACEHOLDER.to_string());

    ReviewResult { issues, fixed_code }
}

/// First capture group, trimmed; `None` if absent or blank.
fn capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|body| !body.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_reply_is_split() {
        let reply = "**Bug Report:**\nIssue A\nIssue B\n\n**Fixed Code:**\n```python\nprint('hi')\n```\n";
        let result = extract(reply);
        assert_eq!(result.issues, vec!["Issue A", "Issue B"]);
        assert_eq!(result.fixed_code, "print('hi')");
    }

    #[test]
    fn test_rust_fence_and_multiline_code() {
        let reply = "Here you go.\n\n**Bug Report:**\n- `x` is unused\n\n**Fixed Code:**\n```rust\nfn main() {\n    println!(\"hi\");\n}\n```\nHope this helps.";
        let result = extract(reply);
        assert_eq!(result.issues, vec!["- `x` is unused"]);
        assert_eq!(result.fixed_code, "fn main() {\n    println!(\"hi\");\n}");
    }

    #[test]
    fn test_bug_report_without_fixed_code() {
        let reply = "**Bug Report:**\nNothing obviously wrong.\nConsider adding tests.";
        let result = extract(reply);
        assert_eq!(
            result.issues,
            vec!["Nothing obviously wrong.", "Consider adding tests."]
        );
        assert_eq!(result.fixed_code, NO_FIXED_CODE_PLACEHOLDER);
    }

    #[test]
    fn test_reply_without_markers_falls_back() {
        let result = extract("I'm sorry, I can't help with that.");
        assert_eq!(result.issues, vec![NO_ISSUES_PLACEHOLDER]);
        assert_eq!(result.fixed_code, NO_FIXED_CODE_PLACEHOLDER);
    }

    #[test]
    fn test_extract_is_total_on_odd_inputs() {
        for reply in [
            "",
            "   \n\t",
            "**Bug Report:**",
            "**Bug Report:**\n**Fixed Code:**\n```rust\n```",
            "Fixed Code:\n```",
            "```rust\nfn main() {}\n```",
        ] {
            let result = extract(reply);
            assert!(!result.issues.is_empty(), "issues empty for {reply:?}");
            assert!(!result.fixed_code.is_empty(), "fixed code empty for {reply:?}");
        }
    }

    #[test]
    fn test_empty_sections_use_placeholders() {
        let result = extract("**Bug Report:**\n\n**Fixed Code:**\n```rust\n```");
        assert_eq!(result.issues, vec![NO_ISSUES_PLACEHOLDER]);
        assert_eq!(result.fixed_code, NO_FIXED_CODE_PLACEHOLDER);
    }

    #[test]
    fn test_unbolded_markers_are_accepted() {
        let reply = "Bug Report:\nOff-by-one in loop\nFixed Code:\n```\nfor i in 0..n {}\n```";
        let result = extract(reply);
        assert_eq!(result.issues, vec!["Off-by-one in loop"]);
        assert_eq!(result.fixed_code, "for i in 0..n {}");
    }

    #[test]
    fn test_blank_line_before_fence() {
        let reply = "**Bug Report:**\n- unused `x`\n\n**Fixed Code:**\n\n```rust\nfn main() {}\n```\n";
        let result = extract(reply);
        assert_eq!(result.issues, vec!["- unused `x`"]);
        assert_eq!(result.fixed_code, "fn main() {}");
    }

    #[test]
    fn test_crlf_reply() {
        let reply = "**Bug Report:**\r\n- unused `x`\r\n\r\n**Fixed Code:**\r\n\r\n```rust\r\nfn main() {}\r\n```\r\n";
        let result = extract(reply);
        assert_eq!(result.issues, vec!["- unused `x`"]);
        assert_eq!(result.fixed_code, "fn main() {}");
    }

    #[test]
    fn test_unfenced_code_up_to_closing_fence() {
        let reply = "**Fixed Code:**\nfn main() {}\n```";
        assert_eq!(extract(reply).fixed_code, "fn main() {}");
    }

    #[test]
    fn test_first_fenced_block_wins() {
        let reply = "**Bug Report:**\nTwo fixes\n**Fixed Code:**\n```rust\nfn a() {}\n```\n```rust\nfn b() {}\n```";
        assert_eq!(extract(reply).fixed_code, "fn a() {}");
    }
}
