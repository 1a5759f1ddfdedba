//! Types for the drink API layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Highest numbered ingredient/measure slot the API returns.
pub const INGREDIENT_SLOTS: usize = 15;

/// One drink as returned by the API.
///
/// The API models ingredients and measures as numbered columns
/// (`strIngredient1`..`strIngredient15`, likewise `strMeasure`), with `null`
/// for unused slots, so records are kept as an opaque field map rather than a
/// fixed struct. Records are read-only; accessors cover the known keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrinkRecord(BTreeMap<String, Option<String>>);

impl DrinkRecord {
    /// Build a record from key/value pairs. Mainly for fixtures and tests.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }

    /// A field's value, if present and non-null and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|v| v.as_deref())
            .filter(|v| !v.is_empty())
    }

    pub fn id(&self) -> Option<&str> {
        self.get("idDrink")
    }

    pub fn name(&self) -> Option<&str> {
        self.get("strDrink")
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.get("strDrinkThumb")
    }

    pub fn instructions(&self) -> Option<&str> {
        self.get("strInstructions")
    }

    /// The numbered ingredient field, 1-based.
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.get(&format!("strIngredient{}", slot))
    }

    /// The numbered measure field, 1-based.
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.get(&format!("strMeasure{}", slot))
    }
}

/// What the orchestrator needs from any endpoint: the status code and the
/// presence/shape of the `drinks` field. A JSON `null` and an absent field
/// both come back as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub drinks: Option<Vec<DrinkRecord>>,
}

impl ApiResponse {
    /// Whether the response carries at least one drink.
    pub fn has_drinks(&self) -> bool {
        self.drinks.as_ref().is_some_and(|d| !d.is_empty())
    }
}

/// Errors from the drink API layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no network connectivity: {0}")]
    Offline(String),

    #[error("drink service unreachable: {0}")]
    Unreachable(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// The three read-only drink endpoints.
#[async_trait]
pub trait DrinkApi: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Full drink records whose name matches the term.
    async fn search_by_name(&self, term: &str) -> Result<ApiResponse, ApiError>;

    /// Partial records (id, name, thumbnail) whose ingredients match the
    /// term. Never carries full drink data.
    async fn filter_by_ingredient(&self, term: &str) -> Result<ApiResponse, ApiError>;

    /// The full record for a single drink id.
    async fn lookup_by_id(&self, id: &str) -> Result<ApiResponse, ApiError>;
}
