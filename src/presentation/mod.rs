pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, SearchConfig, Settings};
pub use router::{create_router, with_middleware};
pub use state::AppState;
