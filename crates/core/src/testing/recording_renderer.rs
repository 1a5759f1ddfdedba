//! Recording renderer for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::render::{DisplayCard, Renderer};

/// A [`Renderer`] that records every call instead of displaying anything.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    cards: RwLock<Vec<DisplayCard>>,
    shown_errors: RwLock<Vec<String>>,
    clears: AtomicUsize,
    flashes: AtomicUsize,
    reveals: AtomicUsize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards rendered since the last clear, in insertion order.
    pub async fn cards(&self) -> Vec<DisplayCard> {
        self.cards.read().await.clone()
    }

    pub async fn card_names(&self) -> Vec<String> {
        self.cards.read().await.iter().map(|c| c.name.clone()).collect()
    }

    pub async fn rendered_count(&self) -> usize {
        self.cards.read().await.len()
    }

    /// Errors surfaced since the last clear.
    pub async fn shown_errors(&self) -> Vec<String> {
        self.shown_errors.read().await.clone()
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    pub fn flash_count(&self) -> usize {
        self.flashes.load(Ordering::SeqCst)
    }

    pub fn reveal_count(&self) -> usize {
        self.reveals.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Renderer for RecordingRenderer {
    async fn clear(&self) {
        self.cards.write().await.clear();
        self.shown_errors.write().await.clear();
        self.clears.fetch_add(1, Ordering::SeqCst);
    }

    async fn render(&self, card: DisplayCard) {
        self.cards.write().await.push(card);
    }

    async fn flash(&self) {
        self.flashes.fetch_add(1, Ordering::SeqCst);
    }

    async fn reveal(&self, _delay: Duration) {
        self.reveals.fetch_add(1, Ordering::SeqCst);
    }

    async fn show_errors(&self, messages: &[String]) {
        self.shown_errors.write().await.extend_from_slice(messages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DrinkRecord;

    #[tokio::test]
    async fn test_records_renders_and_clears() {
        let renderer = RecordingRenderer::new();
        let card =
            DisplayCard::from_record(&DrinkRecord::from_fields([("strDrink", "Mojito")]));

        renderer.render(card).await;
        assert_eq!(renderer.card_names().await, vec!["Mojito"]);

        renderer.clear().await;
        assert_eq!(renderer.rendered_count().await, 0);
        assert_eq!(renderer.clear_count(), 1);
    }

    #[tokio::test]
    async fn test_records_flash_and_errors() {
        let renderer = RecordingRenderer::new();
        renderer.flash().await;
        renderer.show_errors(&["404".to_string()]).await;

        assert_eq!(renderer.flash_count(), 1);
        assert_eq!(renderer.shown_errors().await, vec!["404"]);
    }
}
