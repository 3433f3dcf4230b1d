//! Heuristic check for code-like text.
//!
//! The gateway only accepts completions that look like source code. The
//! check is a coarse substring match; false positives (prose with a
//! semicolon) are accepted.

use std::sync::LazyLock;

use regex::RegexSet;

/// Signals that mark a reply as code: function and class definitions,
/// braces, semicolons, imports.
const CODE_PATTERNS: &[&str] = &[r"def ", r"\{", r"\}", r";", r"class ", r"import ", r"function "];

static CODE_SIGNALS: LazyLock<RegexSet> =
    LazyLock::new(|| RegexSet::new(CODE_PATTERNS).expect("code patterns are valid regexes"));

/// Returns true if `content` contains at least one code signal.
#[must_use]
pub fn is_code(content: &str) -> bool {
    CODE_SIGNALS.is_match(content)
}
