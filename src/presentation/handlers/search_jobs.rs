use std::any::Any;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::ProfileCriteria;
use crate::domain::JobRecord;
use crate::presentation::state::AppState;

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search for jobs";

#[derive(Debug, Deserialize)]
pub struct SearchJobsRequest {
    pub profile: Option<ProfilePayload>,
}

/// Profile as submitted by the UI. Fields other than the two country lists
/// (name, skills, jobTypes, ...) are accepted and ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub countries: Option<Vec<String>>,
    pub exclude_countries: Option<Vec<String>>,
}

impl From<ProfilePayload> for ProfileCriteria {
    fn from(payload: ProfilePayload) -> Self {
        Self {
            countries: payload.countries,
            exclude_countries: payload.exclude_countries,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchJobsResponse {
    pub jobs: Vec<JobRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn search_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: SEARCH_FAILED_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

/// The body is parsed as JSON regardless of its declared content type.
#[tracing::instrument(skip(state, body))]
pub async fn search_jobs_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match serde_json::from_slice::<SearchJobsRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(error = %e, "Error searching jobs: unreadable body");
            return search_failed();
        }
    };

    if state.search_config.response_delay_ms > 0 {
        tokio::time::sleep(state.search_config.response_delay()).await;
    }

    let Some(profile) = request.profile else {
        tracing::error!("Error searching jobs: request has no profile");
        return search_failed();
    };

    match state.match_service.search(profile.into()) {
        Ok(outcome) => {
            tracing::info!(count = outcome.count, "Job search successful");
            (
                StatusCode::OK,
                Json(SearchJobsResponse {
                    jobs: outcome.jobs,
                    count: outcome.count,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Error searching jobs");
            search_failed()
        }
    }
}

/// Renders a panic anywhere in the handler chain as the generic failure body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());

    tracing::error!(panic = %detail, "Internal failure while handling request");
    search_failed()
}
