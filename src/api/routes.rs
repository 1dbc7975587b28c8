use axum::{
    routing::{get, post},
    Router,
    extract::{rejection::JsonRejection, Json},
    response::IntoResponse,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::Result;
use crate::api::models::SummarizeBody;
use crate::api::response;
use crate::client::{HEALTH_PATH, SUMMARIZE_PATH};
use crate::health;
use crate::summarizer::summarize;

pub fn create_router() -> Router {
    with_middleware(
        Router::new()
            .route(SUMMARIZE_PATH, post(summarize_handler))
            .route(HEALTH_PATH, get(health_handler)),
    )
}

/// Wraps `router` in the service's tracing, panic and CORS layers.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(response::panicked))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn summarize_handler(
    body: std::result::Result<Json<SummarizeBody>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(body) = body.map_err(response::rejected)?;
    let request = body.validate()?;

    let input_chars = request.text.chars().count();
    let length = request.length;
    let result = summarize(&request.text, length);

    match &result {
        Ok(summary) => info!(
            %length,
            input_chars,
            word_count = summary.word_count,
            processing_time = summary.processing_time,
            "Generated summary"
        ),
        Err(err) => warn!(
            %length,
            input_chars,
            error = %err,
            "Rejected summary request"
        ),
    }

    Ok(response::success(result?))
}

async fn health_handler() -> impl IntoResponse {
    response::success(health::status())
}
