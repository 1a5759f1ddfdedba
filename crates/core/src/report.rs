//! Per-cycle error collection.
//!
//! Each search cycle accumulates distinct error messages (HTTP status codes,
//! not-found notices, transport failures). Whether they ever reach the user
//! depends on the cycle outcome: a user who got some drinks from one endpoint
//! should not be alarmed by an unrelated failure on the other.

use tracing::debug;

/// Insertion-ordered, duplicate-free set of error messages for one cycle.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    messages: Vec<String>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a message unless it is the `"200"` status or already present.
    pub fn store(&mut self, message: impl Into<String>) {
        let message = message.into();
        if message == "200" {
            return;
        }
        if !self.messages.iter().any(|m| *m == message) {
            self.messages.push(message);
        }
    }

    /// Empty the set. Called at the start of every cycle, before any fetch.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// All stored messages, in insertion order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The messages to surface, given how many drinks the cycle rendered.
    ///
    /// Returns `None` when nothing should be shown: either there are no
    /// messages, or at least one drink made it to the screen and the errors
    /// are suppressed.
    pub fn visible(&self, rendered: usize) -> Option<&[String]> {
        if self.messages.is_empty() {
            return None;
        }
        if rendered > 0 {
            debug!(
                rendered,
                suppressed = self.messages.len(),
                "suppressing errors, cycle produced results"
            );
            return None;
        }
        Some(&self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_keeps_insertion_order() {
        let mut errors = ErrorCollector::new();
        errors.store("404");
        errors.store("Couldn't find \"martini\" :(");
        errors.store("503");
        assert_eq!(
            errors.messages(),
            &["404", "Couldn't find \"martini\" :(", "503"]
        );
    }

    #[test]
    fn test_store_200_is_a_noop() {
        let mut errors = ErrorCollector::new();
        errors.store("200");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let mut errors = ErrorCollector::new();
        errors.store("404");
        errors.store("404");
        assert_eq!(errors.messages().len(), 1);
    }

    #[test]
    fn test_clear_empties_the_set() {
        let mut errors = ErrorCollector::new();
        errors.store("500");
        errors.clear();
        assert!(errors.is_empty());
        assert!(errors.visible(0).is_none());
    }

    #[test]
    fn test_visible_only_when_nothing_rendered() {
        let mut errors = ErrorCollector::new();
        errors.store("404");
        assert_eq!(errors.visible(0), Some(&["404".to_string()][..]));
        assert!(errors.visible(1).is_none());
        assert!(errors.visible(12).is_none());
    }
}
