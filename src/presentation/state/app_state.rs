use std::sync::Arc;

use crate::application::services::MatchService;
use crate::presentation::config::SearchConfig;

#[derive(Clone)]
pub struct AppState {
    pub match_service: Arc<MatchService>,
    pub search_config: SearchConfig,
}
