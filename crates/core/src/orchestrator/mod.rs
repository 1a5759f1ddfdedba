//! Dual-source drink search orchestration.
//!
//! The orchestrator drives one search cycle through its state machine:
//! - **By-name**: one request, full records, rendered directly
//! - **By-ingredient**: one request yielding identifiers only; each unseen
//!   match spawns a by-id lookup into the same batch
//! - Finalization (reveal, error display) waits for every batch member to
//!   settle, success or failure

mod runner;
mod types;

pub use runner::SearchOrchestrator;
pub use types::{
    not_found_message, CycleOutcome, CyclePhase, Endpoint, OFFLINE_MESSAGE, UNREACHABLE_MESSAGE,
};
