//! Persistent recent-search history.

mod sqlite;
mod store;

pub use sqlite::SqliteHistoryStore;
pub use store::{HistoryError, HistoryStore};
