pub mod api;
pub mod config;
pub mod history;
pub mod metrics;
pub mod orchestrator;
pub mod query;
pub mod registry;
pub mod render;
pub mod report;
pub mod testing;

pub use api::{ApiError, ApiResponse, CocktailDbClient, DrinkApi, DrinkRecord};
pub use config::{
    load_config, load_config_from_str, validate_config, ApiConfig, Config, ConfigError,
    HistoryConfig, UiConfig,
};
pub use history::{HistoryError, HistoryStore, SqliteHistoryStore};
pub use orchestrator::{CycleOutcome, CyclePhase, SearchOrchestrator};
pub use query::{sanitize, SearchTerm};
pub use registry::DrinkRegistry;
pub use render::{DisplayCard, IngredientMeasure, Renderer};
pub use report::ErrorCollector;
