//! The render collaborator seam.

use std::time::Duration;

use async_trait::async_trait;

use super::DisplayCard;

/// Output surface for one search cycle.
///
/// The orchestrator owns deciding *what* to show and when; implementations
/// own *how*. Cards arrive one at a time as responses resolve, then a single
/// `reveal` runs after every request has settled, then either `show_errors`
/// or nothing.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Drop everything shown for the previous cycle.
    async fn clear(&self);

    /// Accept one drink card. Called at most once per drink per cycle.
    async fn render(&self, card: DisplayCard);

    /// Acknowledge a repeated search whose results are already on display.
    async fn flash(&self);

    /// Reveal the rendered cards in insertion order, one per delay tick.
    async fn reveal(&self, delay: Duration);

    /// Surface error messages. Only called when the cycle rendered nothing.
    async fn show_errors(&self, messages: &[String]);
}
