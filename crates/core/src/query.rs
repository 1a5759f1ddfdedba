//! Search term sanitization.
//!
//! Raw user input is normalized into a [`SearchTerm`] before any request is
//! issued, so the same drink searched with stray punctuation or odd casing
//! hits the API identically.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters the API has no use for. Dashes stay, drink and ingredient
/// names can contain them.
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A sanitized search term: lowercase, single-spaced, `[a-z0-9 -]` only.
///
/// Only [`sanitize`] produces these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize raw search input.
///
/// Lowercases, strips every character outside letters/digits/whitespace/dash,
/// collapses whitespace runs to a single space and trims the ends. Total and
/// idempotent; an empty result is a legal term.
pub fn sanitize(raw: &str) -> SearchTerm {
    let lowered = raw.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    SearchTerm(collapsed.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_collapses_whitespace() {
        assert_eq!(sanitize("  old   fashioned  ").as_str(), "old fashioned");
        assert_eq!(sanitize("\tmai\n\ntai\t").as_str(), "mai tai");
    }

    #[test]
    fn test_strips_disallowed_characters() {
        assert_eq!(sanitize("piña colada!").as_str(), "pia colada");
        assert_eq!(sanitize("what's \"this\"?").as_str(), "whats this");
    }

    #[test]
    fn test_keeps_dashes_and_digits() {
        assert_eq!(sanitize("7-Up Float").as_str(), "7-up float");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(sanitize("MARGARITA").as_str(), "margarita");
    }

    #[test]
    fn test_empty_input_is_legal() {
        assert_eq!(sanitize("").as_str(), "");
        assert_eq!(sanitize("   ").as_str(), "");
        assert_eq!(sanitize("!!!").as_str(), "");
    }

    #[test]
    fn test_stripping_never_leaves_double_spaces() {
        // Removing a punctuation island must not leave two spaces behind.
        let term = sanitize("gin @ tonic");
        assert_eq!(term.as_str(), "gin tonic");
        assert!(!term.as_str().contains("  "));
    }

    #[test]
    fn test_output_alphabet() {
        for raw in ["Aa1!-_ x", "  ~`%  ", "Blue Lagoon #2", "ça va?"] {
            let term = sanitize(raw);
            assert!(
                term.as_str()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' || c == '-'),
                "unexpected character in {:?}",
                term
            );
        }
    }

    #[test]
    fn test_idempotent() {
        for raw in ["  Piña  Colada! ", "7-up", "", "a    b  c"] {
            let once = sanitize(raw);
            let twice = sanitize(once.as_str());
            assert_eq!(once, twice);
        }
    }
}
