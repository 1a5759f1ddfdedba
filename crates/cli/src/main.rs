mod output;
mod prompt;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use barkeep_core::{
    load_config, sanitize, validate_config, CocktailDbClient, Config, HistoryStore,
    SearchOrchestrator, SqliteHistoryStore,
};

use output::TerminalRenderer;

/// Startup arguments: an optional search term (deep-link analog of the
/// original's `drink` URL parameter) and `--focus` to expand the first
/// result.
#[derive(Debug, Default, PartialEq)]
struct Args {
    term: Option<String>,
    focus: bool,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Args::default();
        let mut words = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--focus" => parsed.focus = true,
                flag if flag.starts_with('-') => bail!("Unknown flag: {}", flag),
                _ => words.push(arg),
            }
        }

        if !words.is_empty() {
            parsed.term = Some(words.join(" "));
        }
        if parsed.focus && parsed.term.is_none() {
            bail!("--focus requires a search term");
        }
        Ok(parsed)
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,barkeep_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path; a missing file just means defaults.
    let config_path = std::env::var("BARKEEP_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("barkeep.toml"));

    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        Config::default()
    };
    validate_config(&config).context("Configuration validation failed")?;

    let api = Arc::new(CocktailDbClient::new(&config.api).context("Failed to create API client")?);
    let history: Arc<dyn HistoryStore> = Arc::new(
        SqliteHistoryStore::new(&config.history.path, config.history.limit)
            .context("Failed to open search history")?,
    );
    let renderer = Arc::new(TerminalRenderer::new(&config.ui));
    let mut orchestrator =
        SearchOrchestrator::new(api, Arc::clone(&renderer) as _, &config.ui);

    let args = Args::parse(std::env::args().skip(1))?;
    match args.term {
        Some(raw) => {
            let term = sanitize(&raw);
            let outcome = orchestrator.search(&term).await;
            if outcome.rendered > 0 {
                history.add(term.as_str())?;
                if args.focus {
                    if let Some(card) = renderer.first_card().await {
                        TerminalRenderer::print_expanded(&card);
                    }
                }
            }
            Ok(())
        }
        None => prompt::run_interactive(&mut orchestrator, &renderer, &history, &config.ui).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_no_args() {
        let args = Args::parse(strings(&[])).unwrap();
        assert_eq!(args, Args::default());
    }

    #[test]
    fn test_parse_multiword_term() {
        let args = Args::parse(strings(&["espresso", "martini"])).unwrap();
        assert_eq!(args.term.as_deref(), Some("espresso martini"));
        assert!(!args.focus);
    }

    #[test]
    fn test_parse_focus_flag() {
        let args = Args::parse(strings(&["margarita", "--focus"])).unwrap();
        assert_eq!(args.term.as_deref(), Some("margarita"));
        assert!(args.focus);
    }

    #[test]
    fn test_focus_without_term_is_rejected() {
        assert!(Args::parse(strings(&["--focus"])).is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::parse(strings(&["--frobnicate"])).is_err());
    }
}
