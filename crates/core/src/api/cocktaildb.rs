//! TheCocktailDB API client.
//!
//! Three GET endpoints, all returning `{"drinks": [...]}` or a null/absent
//! `drinks` field when nothing matched:
//! - `search.php?s=` full records by drink name
//! - `filter.php?i=` partial records by ingredient
//! - `lookup.php?i=` one full record by drink id

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;

use super::{ApiError, ApiResponse, DrinkApi, DrinkRecord};

/// Reqwest-backed client for TheCocktailDB.
pub struct CocktailDbClient {
    client: Client,
    base_url: String,
}

impl CocktailDbClient {
    /// Create a new client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self, term: &str) -> String {
        format!("{}/search.php?s={}", self.base_url, urlencoding::encode(term))
    }

    fn filter_url(&self, term: &str) -> String {
        format!("{}/filter.php?i={}", self.base_url, urlencoding::encode(term))
    }

    fn lookup_url(&self, id: &str) -> String {
        format!("{}/lookup.php?i={}", self.base_url, urlencoding::encode(id))
    }

    async fn get_drinks(&self, url: &str) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            // Non-200 bodies carry no drink list; the status itself is the
            // information the caller needs.
            return Ok(ApiResponse {
                status,
                drinks: None,
            });
        }

        let body: DrinksBody = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        debug!(
            status,
            drinks = body.drinks.as_ref().map(|d| d.len()).unwrap_or(0),
            "drink API response"
        );

        Ok(ApiResponse {
            status,
            drinks: body.drinks,
        })
    }
}

#[async_trait]
impl DrinkApi for CocktailDbClient {
    fn name(&self) -> &str {
        "thecocktaildb"
    }

    async fn search_by_name(&self, term: &str) -> Result<ApiResponse, ApiError> {
        let url = self.search_url(term);
        debug!(term, "searching drinks by name");
        self.get_drinks(&url).await
    }

    async fn filter_by_ingredient(&self, term: &str) -> Result<ApiResponse, ApiError> {
        let url = self.filter_url(term);
        debug!(term, "filtering drinks by ingredient");
        self.get_drinks(&url).await
    }

    async fn lookup_by_id(&self, id: &str) -> Result<ApiResponse, ApiError> {
        let url = self.lookup_url(id);
        debug!(id, "looking up drink by id");
        self.get_drinks(&url).await
    }
}

/// Split transport failures into offline (could not even connect) and
/// unreachable (network present, request still failed).
fn classify_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_connect() {
        ApiError::Offline(e.to_string())
    } else {
        ApiError::Unreachable(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct DrinksBody {
    #[serde(default)]
    drinks: Option<Vec<DrinkRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> CocktailDbClient {
        CocktailDbClient::new(&ApiConfig {
            base_url: "https://www.thecocktaildb.com/api/json/v1/1/".to_string(), // trailing slash
            timeout_secs: 10,
            user_agent: "barkeep-test".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_search_url_encodes_term() {
        let client = test_client();
        assert_eq!(
            client.search_url("mai tai"),
            "https://www.thecocktaildb.com/api/json/v1/1/search.php?s=mai%20tai"
        );
    }

    #[test]
    fn test_filter_and_lookup_urls() {
        let client = test_client();
        assert_eq!(
            client.filter_url("gin"),
            "https://www.thecocktaildb.com/api/json/v1/1/filter.php?i=gin"
        );
        assert_eq!(
            client.lookup_url("11007"),
            "https://www.thecocktaildb.com/api/json/v1/1/lookup.php?i=11007"
        );
    }

    #[test]
    fn test_empty_term_is_passed_through() {
        // An empty term is a legal search; whatever the API answers is the
        // API's business.
        let client = test_client();
        assert_eq!(
            client.search_url(""),
            "https://www.thecocktaildb.com/api/json/v1/1/search.php?s="
        );
    }

    #[test]
    fn test_null_drinks_body_parses_to_none() {
        let body: DrinksBody = serde_json::from_str(r#"{"drinks": null}"#).unwrap();
        assert!(body.drinks.is_none());

        let body: DrinksBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.drinks.is_none());
    }

    #[test]
    fn test_drinks_body_parses_records() {
        let json = r#"{"drinks": [{"idDrink": "11007", "strDrink": "Margarita", "strMeasure2": null}]}"#;
        let body: DrinksBody = serde_json::from_str(json).unwrap();
        let drinks = body.drinks.unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].name(), Some("Margarita"));
    }
}
