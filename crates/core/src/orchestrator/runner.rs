//! Search-cycle orchestrator implementation.
//!
//! One `search()` call runs one complete cycle: fan out the by-name and
//! by-ingredient requests, grow the batch with by-id lookups as ingredient
//! matches arrive, drain everything to settlement, then reveal and decide on
//! error display. The batch is open-ended, so completion is defined by the
//! batch running dry, not by any fixed request count.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, warn};

use crate::api::{ApiError, ApiResponse, DrinkApi};
use crate::config::UiConfig;
use crate::metrics;
use crate::query::SearchTerm;
use crate::registry::DrinkRegistry;
use crate::render::{DisplayCard, Renderer};
use crate::report::ErrorCollector;

use super::types::{
    not_found_message, CycleOutcome, CyclePhase, Endpoint, OFFLINE_MESSAGE, UNREACHABLE_MESSAGE,
};

/// One settled member of the fetch batch.
struct FetchOutcome {
    endpoint: Endpoint,
    result: Result<ApiResponse, ApiError>,
}

/// What the previous completed cycle did, for the repeat-search shortcut.
struct CompletedCycle {
    term: SearchTerm,
    rendered: usize,
}

/// The search orchestrator. Owns all per-cycle state; collaborators are
/// reached through their traits.
pub struct SearchOrchestrator {
    api: Arc<dyn DrinkApi>,
    renderer: Arc<dyn Renderer>,
    reveal_delay: Duration,

    registry: DrinkRegistry,
    errors: ErrorCollector,
    phase: CyclePhase,
    last_cycle: Option<CompletedCycle>,
}

impl SearchOrchestrator {
    /// Create a new orchestrator.
    pub fn new(api: Arc<dyn DrinkApi>, renderer: Arc<dyn Renderer>, ui: &UiConfig) -> Self {
        Self {
            api,
            renderer,
            reveal_delay: Duration::from_millis(ui.reveal_delay_ms),
            registry: DrinkRegistry::new(),
            errors: ErrorCollector::new(),
            phase: CyclePhase::Idle,
            last_cycle: None,
        }
    }

    /// Current cycle phase. `Idle` between calls to [`search`](Self::search).
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// The term of the most recent completed cycle, if any.
    pub fn last_term(&self) -> Option<&SearchTerm> {
        self.last_cycle.as_ref().map(|c| &c.term)
    }

    /// Run one search cycle to completion.
    ///
    /// Fires no requests when `term` matches the previous completed cycle
    /// and that cycle put results on display; the renderer's flash is the
    /// only effect then.
    pub async fn search(&mut self, term: &SearchTerm) -> CycleOutcome {
        if let Some(last) = &self.last_cycle {
            if last.term == *term && last.rendered > 0 {
                debug!(%term, "term unchanged with results on display, flashing");
                self.renderer.flash().await;
                metrics::SEARCH_CYCLES.with_label_values(&["repeat"]).inc();
                return CycleOutcome {
                    term: term.clone(),
                    rendered: last.rendered,
                    errors: Vec::new(),
                    errors_shown: false,
                    repeat: true,
                };
            }
        }

        let start = Instant::now();

        // Entering Fetching always clears the previous cycle's state first.
        self.phase = CyclePhase::Fetching;
        self.registry.reset();
        self.errors.clear();
        self.renderer.clear().await;

        debug!(%term, "starting search cycle");

        let mut batch: FuturesUnordered<BoxFuture<'static, FetchOutcome>> = FuturesUnordered::new();
        batch.push(fetch(
            Arc::clone(&self.api),
            Endpoint::Name,
            term.as_str().to_string(),
        ));
        batch.push(fetch(
            Arc::clone(&self.api),
            Endpoint::Ingredient,
            term.as_str().to_string(),
        ));

        let mut rendered = 0usize;

        // Drain until every request has settled. Ingredient matches push
        // lookups into the same batch, so the loop ending is the all-settled
        // signal.
        while let Some(FetchOutcome { endpoint, result }) = batch.next().await {
            match result {
                Ok(response) => {
                    metrics::API_REQUESTS
                        .with_label_values(&[endpoint.as_str(), "ok"])
                        .inc();
                    self.errors.store(response.status.to_string());

                    match endpoint {
                        Endpoint::Ingredient => match response.drinks {
                            Some(matches) if !matches.is_empty() => {
                                for record in matches {
                                    let on_display = record
                                        .name()
                                        .map(|n| self.registry.exists(n))
                                        .unwrap_or(false);
                                    if on_display {
                                        continue;
                                    }
                                    if let Some(id) = record.id() {
                                        debug!(id, "ingredient match, queueing lookup");
                                        batch.push(fetch(
                                            Arc::clone(&self.api),
                                            Endpoint::Lookup,
                                            id.to_string(),
                                        ));
                                    }
                                }
                            }
                            _ => self.errors.store(not_found_message(term)),
                        },
                        Endpoint::Name | Endpoint::Lookup => match response.drinks {
                            Some(drinks) if !drinks.is_empty() => {
                                for record in &drinks {
                                    let card = DisplayCard::from_record(record);
                                    if self.registry.register(&card.name) {
                                        debug!(name = %card.name, "rendering drink");
                                        self.renderer.render(card).await;
                                        metrics::DRINKS_RENDERED.inc();
                                        rendered += 1;
                                    } else {
                                        debug!(name = %card.name, "already on display, skipping");
                                    }
                                }
                            }
                            _ => self.errors.store(not_found_message(term)),
                        },
                    }
                }
                Err(error) => {
                    metrics::API_REQUESTS
                        .with_label_values(&[endpoint.as_str(), "error"])
                        .inc();
                    warn!(endpoint = endpoint.as_str(), %error, "drink fetch failed");
                    match error {
                        ApiError::Offline(_) => self.errors.store(OFFLINE_MESSAGE),
                        _ => self.errors.store(UNREACHABLE_MESSAGE),
                    }
                }
            }
        }

        self.phase = CyclePhase::AllSettled;
        debug!(rendered, "all requests settled");

        self.renderer.reveal(self.reveal_delay).await;

        let errors_shown = match self.errors.visible(rendered) {
            Some(messages) => {
                self.renderer.show_errors(messages).await;
                true
            }
            None => false,
        };
        self.phase = CyclePhase::Rendered;

        let result_label = if rendered > 0 { "rendered" } else { "empty" };
        metrics::SEARCH_CYCLES.with_label_values(&[result_label]).inc();
        metrics::CYCLE_DURATION.observe(start.elapsed().as_secs_f64());

        let outcome = CycleOutcome {
            term: term.clone(),
            rendered,
            errors: self.errors.messages().to_vec(),
            errors_shown,
            repeat: false,
        };
        self.last_cycle = Some(CompletedCycle {
            term: term.clone(),
            rendered,
        });
        self.phase = CyclePhase::Idle;
        outcome
    }
}

fn fetch(
    api: Arc<dyn DrinkApi>,
    endpoint: Endpoint,
    argument: String,
) -> BoxFuture<'static, FetchOutcome> {
    Box::pin(async move {
        let result = match endpoint {
            Endpoint::Name => api.search_by_name(&argument).await,
            Endpoint::Ingredient => api.filter_by_ingredient(&argument).await,
            Endpoint::Lookup => api.lookup_by_id(&argument).await,
        };
        FetchOutcome { endpoint, result }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::query::sanitize;
    use crate::testing::{fixtures, MockDrinkApi, RecordingRenderer};

    fn fast_ui() -> UiConfig {
        UiConfig {
            reveal_delay_ms: 0,
            ..UiConfig::default()
        }
    }

    #[tokio::test]
    async fn test_name_results_are_rendered() {
        let api = Arc::new(MockDrinkApi::new());
        api.set_name_reply(fixtures::drinks_reply(vec![fixtures::drink_record(
            "11007",
            "Margarita",
        )]))
        .await;
        let renderer = Arc::new(RecordingRenderer::new());

        let mut orchestrator =
            SearchOrchestrator::new(api, Arc::clone(&renderer) as _, &fast_ui());
        let outcome = orchestrator.search(&sanitize("margarita")).await;

        assert_eq!(outcome.rendered, 1);
        assert!(!outcome.repeat);
        assert_eq!(renderer.card_names().await, vec!["Margarita"]);
        assert_eq!(orchestrator.phase(), CyclePhase::Idle);
    }

    #[tokio::test]
    async fn test_ingredient_matches_spawn_lookups() {
        let api = Arc::new(MockDrinkApi::new());
        api.set_ingredient_reply(fixtures::drinks_reply(vec![fixtures::ingredient_match(
            "42",
            "Gin Fizz",
        )]))
        .await;
        api.set_lookup_reply(
            "42",
            fixtures::drinks_reply(vec![fixtures::drink_record("42", "Gin Fizz")]),
        )
        .await;
        let renderer = Arc::new(RecordingRenderer::new());

        let mut orchestrator =
            SearchOrchestrator::new(Arc::clone(&api) as _, Arc::clone(&renderer) as _, &fast_ui());
        let outcome = orchestrator.search(&sanitize("gin")).await;

        assert_eq!(outcome.rendered, 1);
        assert_eq!(renderer.card_names().await, vec!["Gin Fizz"]);
        // name, ingredient, one lookup
        assert_eq!(api.request_count().await, 3);
    }

    #[tokio::test]
    async fn test_not_found_stores_literal_term_message() {
        let api = Arc::new(MockDrinkApi::new());
        let renderer = Arc::new(RecordingRenderer::new());

        let mut orchestrator =
            SearchOrchestrator::new(api, Arc::clone(&renderer) as _, &fast_ui());
        let outcome = orchestrator.search(&sanitize("martini")).await;

        assert_eq!(outcome.rendered, 0);
        assert!(outcome.errors.contains(&"Couldn't find \"martini\" :(".to_string()));
        assert!(outcome.errors_shown);
    }

    #[tokio::test]
    async fn test_offline_failure_is_collected_not_propagated() {
        let api = Arc::new(MockDrinkApi::new());
        api.set_name_reply(fixtures::offline_reply()).await;
        let renderer = Arc::new(RecordingRenderer::new());

        let mut orchestrator =
            SearchOrchestrator::new(api, Arc::clone(&renderer) as _, &fast_ui());
        let outcome = orchestrator.search(&sanitize("mojito")).await;

        assert!(outcome.errors.contains(&OFFLINE_MESSAGE.to_string()));
    }
}
