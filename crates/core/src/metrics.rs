//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Search cycles (outcome, duration)
//! - Drink API requests (endpoint, outcome)
//! - Rendered results

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts};

/// Search cycles total by result.
pub static SEARCH_CYCLES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("barkeep_search_cycles_total", "Total search cycles"),
        &["result"], // "rendered", "empty", "repeat"
    )
    .unwrap()
});

/// Search cycle duration in seconds.
pub static CYCLE_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "barkeep_search_cycle_duration_seconds",
            "Duration of one search cycle, fetch through reveal",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
    )
    .unwrap()
});

/// Drink API requests total.
pub static API_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("barkeep_api_requests_total", "Total drink API requests"),
        &["endpoint", "outcome"], // endpoint: "name", "ingredient", "lookup"; outcome: "ok", "error"
    )
    .unwrap()
});

/// Drinks handed to the renderer.
pub static DRINKS_RENDERED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("barkeep_drinks_rendered_total", "Total drinks rendered").unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(SEARCH_CYCLES.clone()),
        Box::new(CYCLE_DURATION.clone()),
        Box::new(API_REQUESTS.clone()),
        Box::new(DRINKS_RENDERED.clone()),
    ]
}

/// Register all core metrics with the given registry.
pub fn register_metrics(registry: &prometheus::Registry) -> prometheus::Result<()> {
    for metric in all_metrics() {
        registry.register(metric)?;
    }
    Ok(())
}
