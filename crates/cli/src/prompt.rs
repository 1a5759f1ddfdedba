//! Interactive search prompt.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use barkeep_core::{sanitize, HistoryStore, SearchOrchestrator, UiConfig};

use crate::output::TerminalRenderer;

/// Run the prompt loop until end-of-input or `:quit`.
pub async fn run_interactive(
    orchestrator: &mut SearchOrchestrator,
    renderer: &TerminalRenderer,
    history: &Arc<dyn HistoryStore>,
    ui: &UiConfig,
) -> Result<()> {
    print_recent(history);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut placeholder = ui.placeholders.iter().cycle();

    loop {
        let hint = placeholder.next().map(String::as_str).unwrap_or("margarita");
        print!("search (try \"{}\"): ", hint);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":history" => print_recent(history),
            ":focus" => match renderer.first_card().await {
                Some(card) => TerminalRenderer::print_expanded(&card),
                None => println!("nothing to focus on yet"),
            },
            raw => {
                let term = sanitize(raw);
                let outcome = orchestrator.search(&term).await;
                if outcome.rendered > 0 {
                    if let Err(e) = history.add(term.as_str()) {
                        warn!("Failed to record search history: {}", e);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_recent(history: &Arc<dyn HistoryStore>) {
    // The store itself is capped, so any generous limit shows everything.
    match history.recent(32) {
        Ok(recent) if !recent.is_empty() => {
            println!("recent searches: {}", recent.join(", "));
        }
        Ok(_) => {}
        Err(e) => warn!("Failed to read search history: {}", e),
    }
}
