//! Types for the search-cycle orchestrator.

use crate::query::SearchTerm;

/// Phase of one search cycle.
///
/// `Idle -> Fetching -> AllSettled -> Rendered -> Idle`; no transition skips
/// `AllSettled`, and entering `Fetching` always clears the prior cycle's
/// state first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Idle,
    Fetching,
    AllSettled,
    Rendered,
}

/// Which endpoint a batch member hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Name,
    Ingredient,
    Lookup,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Name => "name",
            Endpoint::Ingredient => "ingredient",
            Endpoint::Lookup => "lookup",
        }
    }
}

/// Summary of one completed search cycle.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    /// The sanitized term that was searched.
    pub term: SearchTerm,
    /// How many drinks were handed to the renderer.
    pub rendered: usize,
    /// Every error collected during the cycle, shown or not.
    pub errors: Vec<String>,
    /// Whether the errors were surfaced (only when nothing rendered).
    pub errors_shown: bool,
    /// True when the cycle was skipped as a repeat of the previous one.
    pub repeat: bool,
}

/// Stored error message for a fetch that could not even connect.
pub const OFFLINE_MESSAGE: &str = "You are offline. Are you still connected to the internet?";

/// Stored error message for a fetch that failed with the network present.
pub const UNREACHABLE_MESSAGE: &str = "The drink service can't be reached right now.";

/// The user-facing no-results message, keyed by the literal search term.
pub fn not_found_message(term: &SearchTerm) -> String {
    format!("Couldn't find \"{}\" :(", term)
}
