//! Testing utilities and mock implementations.
//!
//! This module provides mocks for the orchestrator's collaborator traits,
//! allowing full search-cycle tests without network or terminal.
//!
//! # Example
//!
//! ```rust,ignore
//! use barkeep_core::testing::{fixtures, MockDrinkApi, RecordingRenderer};
//!
//! let api = MockDrinkApi::new();
//! api.set_name_reply(fixtures::drinks_reply(vec![
//!     fixtures::drink_record("11007", "Margarita"),
//! ])).await;
//!
//! let renderer = RecordingRenderer::new();
//! // Wire both into a SearchOrchestrator...
//! ```

mod mock_api;
mod recording_renderer;

pub use mock_api::{MockDrinkApi, RecordedRequest, ScriptedReply};
pub use recording_renderer::RecordingRenderer;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::api::{ApiResponse, DrinkRecord};
    use crate::testing::ScriptedReply;

    /// A full drink record with reasonable defaults.
    pub fn drink_record(id: &str, name: &str) -> DrinkRecord {
        DrinkRecord::from_fields([
            ("idDrink", id),
            ("strDrink", name),
            ("strDrinkThumb", "https://example.test/thumb.jpg"),
            ("strInstructions", "Shake well with ice. Strain and serve."),
            ("strIngredient1", "Ice"),
            ("strMeasure1", "1 cup"),
        ])
    }

    /// A partial record as the ingredient filter returns: id, name,
    /// thumbnail, nothing else.
    pub fn ingredient_match(id: &str, name: &str) -> DrinkRecord {
        DrinkRecord::from_fields([
            ("idDrink", id),
            ("strDrink", name),
            ("strDrinkThumb", "https://example.test/thumb.jpg"),
        ])
    }

    /// A 200 reply carrying the given records.
    pub fn drinks_reply(records: Vec<DrinkRecord>) -> ScriptedReply {
        ScriptedReply::Drinks(ApiResponse {
            status: 200,
            drinks: Some(records),
        })
    }

    /// A 200 reply with a null `drinks` field.
    pub fn empty_reply() -> ScriptedReply {
        ScriptedReply::Drinks(ApiResponse {
            status: 200,
            drinks: None,
        })
    }

    /// A reply with the given status and no drinks.
    pub fn status_reply(status: u16) -> ScriptedReply {
        ScriptedReply::Drinks(ApiResponse {
            status,
            drinks: None,
        })
    }

    /// A transport failure with no connectivity.
    pub fn offline_reply() -> ScriptedReply {
        ScriptedReply::Offline
    }

    /// A transport failure with the network present.
    pub fn unreachable_reply() -> ScriptedReply {
        ScriptedReply::Unreachable
    }
}
