mod health;
mod index;
mod search_jobs;

pub use health::{HealthResponse, health_handler};
pub use index::index_handler;
pub use search_jobs::{
    ErrorResponse, ProfilePayload, SEARCH_FAILED_MESSAGE, SearchJobsRequest, SearchJobsResponse,
    panic_response, search_jobs_handler,
};
