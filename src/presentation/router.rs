use axum::Router;
use axum::body::Body;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::{make_request_span, request_id_header};
use crate::presentation::handlers::{
    health_handler, index_handler, panic_response, search_jobs_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/search-jobs", post(search_jobs_handler))
        .route("/api/search-jobs", post(search_jobs_handler));

    with_middleware(routes).with_state(state)
}

/// Wraps routes in the panic, trace, request-id and CORS layers.
pub fn with_middleware(routes: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(make_request_span::<Body>)
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(SetRequestIdLayer::new(
            request_id_header(),
            MakeRequestUuid::default(),
        ))
        .layer(cors)
}
