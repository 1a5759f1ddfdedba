//! Search history storage trait.

use thiserror::Error;

/// Error type for history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Persistent store of recent search terms.
///
/// The store is capped: adding beyond the cap drops the oldest entry.
/// Re-adding a term refreshes its recency rather than duplicating it.
pub trait HistoryStore: Send + Sync {
    /// Record a search term. Empty terms are ignored.
    fn add(&self, term: &str) -> Result<(), HistoryError>;

    /// The most recent terms, newest first, at most `limit`.
    fn recent(&self, limit: usize) -> Result<Vec<String>, HistoryError>;

    /// Forget everything.
    fn clear(&self) -> Result<(), HistoryError>;
}
