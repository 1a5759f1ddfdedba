//! Terminal renderer.
//!
//! Cards are buffered as the orchestrator hands them over and printed during
//! the reveal, one per delay tick, so results appear in insertion order at a
//! readable pace.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::sleep;

use barkeep_core::{DisplayCard, Renderer, UiConfig};

pub struct TerminalRenderer {
    cards: Mutex<Vec<DisplayCard>>,
    revealed: Mutex<usize>,
    flash_duration: Duration,
}

impl TerminalRenderer {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            cards: Mutex::new(Vec::new()),
            revealed: Mutex::new(0),
            flash_duration: Duration::from_millis(ui.flash_duration_ms),
        }
    }

    /// The first card of the current results, for the focus view.
    pub async fn first_card(&self) -> Option<DisplayCard> {
        self.cards.lock().await.first().cloned()
    }

    /// Print the full detail view of one card.
    pub fn print_expanded(card: &DisplayCard) {
        println!();
        println!("{}", format_expanded(card));
    }
}

#[async_trait]
impl Renderer for TerminalRenderer {
    async fn clear(&self) {
        self.cards.lock().await.clear();
        *self.revealed.lock().await = 0;
    }

    async fn render(&self, card: DisplayCard) {
        self.cards.lock().await.push(card);
    }

    async fn flash(&self) {
        println!("~ already showing these results ~");
        sleep(self.flash_duration).await;
    }

    async fn reveal(&self, delay: Duration) {
        let cards = self.cards.lock().await;
        let mut revealed = self.revealed.lock().await;
        for card in cards.iter().skip(*revealed) {
            sleep(delay).await;
            println!();
            println!("{}", format_card(card));
        }
        *revealed = cards.len();
    }

    async fn show_errors(&self, messages: &[String]) {
        for message in messages {
            println!("! {}", message);
        }
    }
}

/// Compact card: name plus the ingredient list.
pub fn format_card(card: &DisplayCard) -> String {
    let mut out = String::new();
    out.push_str(&card.name);
    if card.has_ingredients() {
        for pair in &card.ingredients {
            out.push_str(&format!("\n  - {}: {}", pair.ingredient, pair.measure));
        }
    } else {
        out.push_str("\n  (no ingredients listed)");
    }
    out
}

/// Expanded card: compact view plus instructions and picture URL.
pub fn format_expanded(card: &DisplayCard) -> String {
    let mut out = format_card(card);
    for sentence in &card.instructions {
        out.push_str(&format!("\n  {}", sentence));
    }
    if let Some(thumbnail) = &card.thumbnail {
        out.push_str(&format!("\n  picture: {}", thumbnail));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use barkeep_core::DrinkRecord;

    fn margarita() -> DisplayCard {
        DisplayCard::from_record(&DrinkRecord::from_fields([
            ("strDrink", "Margarita"),
            ("strDrinkThumb", "https://example.test/marg.jpg"),
            ("strInstructions", "Shake with ice. Strain."),
            ("strIngredient1", "Tequila"),
            ("strMeasure1", "1 1/2 oz"),
        ]))
    }

    #[test]
    fn test_format_card() {
        let text = format_card(&margarita());
        assert!(text.starts_with("Margarita"));
        assert!(text.contains("- Tequila: 1 1/2 oz"));
        assert!(!text.contains("Shake"));
    }

    #[test]
    fn test_format_card_without_ingredients() {
        let card = DisplayCard::from_record(&DrinkRecord::from_fields([("strDrink", "Water")]));
        assert!(format_card(&card).contains("(no ingredients listed)"));
    }

    #[test]
    fn test_format_expanded_includes_instructions_and_picture() {
        let text = format_expanded(&margarita());
        assert!(text.contains("Shake with ice."));
        assert!(text.contains("picture: https://example.test/marg.jpg"));
    }

    #[tokio::test]
    async fn test_reveal_only_prints_new_cards() {
        let renderer = TerminalRenderer::new(&UiConfig {
            reveal_delay_ms: 0,
            ..UiConfig::default()
        });
        renderer.render(margarita()).await;
        renderer.reveal(Duration::ZERO).await;
        // A second reveal with no new cards prints nothing further.
        renderer.reveal(Duration::ZERO).await;
        assert_eq!(*renderer.revealed.lock().await, 1);
    }

    #[tokio::test]
    async fn test_clear_resets_cards_and_focus() {
        let renderer = TerminalRenderer::new(&UiConfig::default());
        renderer.render(margarita()).await;
        assert!(renderer.first_card().await.is_some());
        renderer.clear().await;
        assert!(renderer.first_card().await.is_none());
    }
}
