//! Mock drink API for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::sleep;

use crate::api::{ApiError, ApiResponse, DrinkApi};

/// A scripted reply for one endpoint. Cloneable so the same reply can serve
/// repeated requests; errors are constructed fresh each time.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Drinks(ApiResponse),
    Offline,
    Unreachable,
}

impl ScriptedReply {
    fn produce(&self) -> Result<ApiResponse, ApiError> {
        match self {
            ScriptedReply::Drinks(response) => Ok(response.clone()),
            ScriptedReply::Offline => Err(ApiError::Offline("scripted".to_string())),
            ScriptedReply::Unreachable => Err(ApiError::Unreachable("scripted".to_string())),
        }
    }
}

/// A recorded request for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Which endpoint was hit: "name", "ingredient" or "lookup".
    pub endpoint: &'static str,
    /// The term or id that was requested.
    pub argument: String,
}

/// Mock implementation of the [`DrinkApi`] trait.
///
/// Provides controllable behavior for testing:
/// - Scripted replies per endpoint (and per id for lookups)
/// - Artificial per-endpoint delays for settlement-ordering tests
/// - Recorded requests for assertions
pub struct MockDrinkApi {
    name_reply: RwLock<ScriptedReply>,
    ingredient_reply: RwLock<ScriptedReply>,
    lookup_replies: RwLock<HashMap<String, ScriptedReply>>,
    name_delay: RwLock<Duration>,
    ingredient_delay: RwLock<Duration>,
    lookup_delay: RwLock<Duration>,
    requests: RwLock<Vec<RecordedRequest>>,
}

impl Default for MockDrinkApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDrinkApi {
    /// Create a mock whose endpoints all answer 200 with no drinks.
    pub fn new() -> Self {
        let empty = ScriptedReply::Drinks(ApiResponse {
            status: 200,
            drinks: None,
        });
        Self {
            name_reply: RwLock::new(empty.clone()),
            ingredient_reply: RwLock::new(empty.clone()),
            lookup_replies: RwLock::new(HashMap::new()),
            name_delay: RwLock::new(Duration::ZERO),
            ingredient_delay: RwLock::new(Duration::ZERO),
            lookup_delay: RwLock::new(Duration::ZERO),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_name_reply(&self, reply: ScriptedReply) {
        *self.name_reply.write().await = reply;
    }

    pub async fn set_ingredient_reply(&self, reply: ScriptedReply) {
        *self.ingredient_reply.write().await = reply;
    }

    /// Script the reply for one drink id. Unknown ids answer 200/no drinks.
    pub async fn set_lookup_reply(&self, id: &str, reply: ScriptedReply) {
        self.lookup_replies.write().await.insert(id.to_string(), reply);
    }

    pub async fn set_name_delay(&self, delay: Duration) {
        *self.name_delay.write().await = delay;
    }

    pub async fn set_ingredient_delay(&self, delay: Duration) {
        *self.ingredient_delay.write().await = delay;
    }

    /// One delay applied to every lookup request.
    pub async fn set_lookup_delay(&self, delay: Duration) {
        *self.lookup_delay.write().await = delay;
    }

    /// Every request made so far, in call order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }

    async fn record(&self, endpoint: &'static str, argument: &str) {
        self.requests.write().await.push(RecordedRequest {
            endpoint,
            argument: argument.to_string(),
        });
    }
}

#[async_trait]
impl DrinkApi for MockDrinkApi {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search_by_name(&self, term: &str) -> Result<ApiResponse, ApiError> {
        self.record("name", term).await;
        let delay = *self.name_delay.read().await;
        sleep(delay).await;
        self.name_reply.read().await.produce()
    }

    async fn filter_by_ingredient(&self, term: &str) -> Result<ApiResponse, ApiError> {
        self.record("ingredient", term).await;
        let delay = *self.ingredient_delay.read().await;
        sleep(delay).await;
        self.ingredient_reply.read().await.produce()
    }

    async fn lookup_by_id(&self, id: &str) -> Result<ApiResponse, ApiError> {
        self.record("lookup", id).await;
        let delay = *self.lookup_delay.read().await;
        sleep(delay).await;
        match self.lookup_replies.read().await.get(id) {
            Some(reply) => reply.produce(),
            None => Ok(ApiResponse {
                status: 200,
                drinks: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_default_replies_are_empty() {
        let api = MockDrinkApi::new();
        let response = api.search_by_name("anything").await.unwrap();
        assert_eq!(response.status, 200);
        assert!(response.drinks.is_none());
    }

    #[tokio::test]
    async fn test_scripted_lookup_by_id() {
        let api = MockDrinkApi::new();
        api.set_lookup_reply(
            "42",
            fixtures::drinks_reply(vec![fixtures::drink_record("42", "Gin Fizz")]),
        )
        .await;

        let scripted = api.lookup_by_id("42").await.unwrap();
        assert!(scripted.has_drinks());

        let unknown = api.lookup_by_id("999").await.unwrap();
        assert!(!unknown.has_drinks());
    }

    #[tokio::test]
    async fn test_requests_are_recorded_in_order() {
        let api = MockDrinkApi::new();
        api.search_by_name("gin").await.unwrap();
        api.filter_by_ingredient("gin").await.unwrap();

        let requests = api.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].endpoint, "name");
        assert_eq!(requests[1].endpoint, "ingredient");
        assert_eq!(requests[1].argument, "gin");
    }

    #[tokio::test]
    async fn test_error_replies_repeat() {
        let api = MockDrinkApi::new();
        api.set_name_reply(ScriptedReply::Offline).await;
        assert!(api.search_by_name("x").await.is_err());
        assert!(api.search_by_name("x").await.is_err());
    }
}
