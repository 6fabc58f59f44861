mod environment;
mod search_config;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use search_config::SearchConfig;
pub use settings::{
    DEFAULT_RESPONSE_DELAY_MS, LoggingSettings, SearchSettings, ServerSettings, Settings,
};
