use axum::{
    extract::{rejection::QueryRejection, DefaultBodyLimit, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::core::error::SimilarityError;
use crate::core::result::RankedResult;
use crate::core::types::ProblemId;
use crate::matrix::snapshot::SimilaritySnapshot;
use crate::parsing::url::problem_id_from_url;
use crate::query::engine::SimilarityEngine;
use crate::query::pagination::{Page, PAGE_SIZE};
use crate::utils::validation::validate_problem_input;

/// Request bodies are never read; keep the limit small
pub const MAX_REQUEST_BODY_SIZE: usize = 64 * 1024;

/// Shared application state
pub struct AppState {
    pub snapshot: SimilaritySnapshot,
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

#[derive(Deserialize)]
struct SimilarParams {
    problem: String,
    /// 1-based page number; clamped into range
    page: Option<usize>,
}

#[derive(Deserialize)]
struct CompareParams {
    first: String,
    second: String,
}

/// Create an error response that never exposes internal details,
/// logging them server-side instead
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

fn similarity_error_response(err: &SimilarityError) -> Response {
    let (status, internal) = match err {
        SimilarityError::UnknownProblem(_) | SimilarityError::UnknownProblems(..) => {
            (StatusCode::NOT_FOUND, None)
        }
        SimilarityError::InvalidProblemUrl(_) => (StatusCode::BAD_REQUEST, None),
        SimilarityError::MalformedScore { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, Some(err.to_string()))
        }
        SimilarityError::SourceUnavailable { .. } | SimilarityError::EmptyMatrix => {
            (StatusCode::SERVICE_UNAVAILABLE, Some(err.to_string()))
        }
    };

    (
        status,
        Json(create_safe_error_response(
            err.kind(),
            &err.to_string(),
            internal.as_deref(),
        )),
    )
        .into_response()
}

fn query_rejection_response(rejection: &QueryRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(create_safe_error_response(
            "invalid_input",
            &rejection.body_text(),
            None,
        )),
    )
        .into_response()
}

/// Validate and parse a problem reference from a query parameter
#[allow(clippy::result_large_err)] // Response is the handler's own return type
fn parse_problem(input: &str) -> Result<ProblemId, Response> {
    let input = validate_problem_input(input).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "invalid_input",
                &e.to_string(),
                None,
            )),
        )
            .into_response()
    })?;

    problem_id_from_url(input).map_err(|e| similarity_error_response(&e))
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created, the data cannot
/// be loaded, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router over a loaded snapshot.
///
/// Rate limiting is keyed by peer address and is added by the server, not
/// here, so the router can be driven directly in tests.
pub fn create_router(snapshot: SimilaritySnapshot) -> Router {
    let state = Arc::new(AppState { snapshot });

    Router::new()
        .route("/api/similar", get(similar_handler))
        .route("/api/compare", get(compare_handler))
        .route("/api/status", get(status_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                .layer(ConcurrencyLimitLayer::new(100))
                .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let config = args.data.to_config()?;
    let snapshot = SimilaritySnapshot::load(&config).await?;
    info!(
        "Serving {} problems ({} with metadata)",
        snapshot.problem_count(),
        snapshot.metadata().len()
    );

    // IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(50)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limit configuration"))?;

    let app = create_router(snapshot).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting problem-sim web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}/api/status"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// API endpoint for ranked similar problems
async fn similar_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SimilarParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection_response(&rejection),
    };
    let id = match parse_problem(&params.problem) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let engine = SimilarityEngine::new(&state.snapshot);
    let ranked = match engine.rank_similar(&id) {
        Ok(ranked) => ranked,
        Err(e) => return similarity_error_response(&e),
    };

    let page = Page::new(&ranked, params.page.unwrap_or(1), PAGE_SIZE);
    let results: Vec<serde_json::Value> = page.items.iter().map(result_json).collect();

    Json(serde_json::json!({
        "problem": problem_json(&id),
        "page": page.number,
        "total_pages": page.total_pages,
        "total_results": page.total_results,
        "has_previous": page.has_previous(),
        "has_next": page.has_next(),
        "results": results,
    }))
    .into_response()
}

/// API endpoint for the score between two problems
async fn compare_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CompareParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection_response(&rejection),
    };
    let first = match parse_problem(&params.first) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let second = match parse_problem(&params.second) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let engine = SimilarityEngine::new(&state.snapshot);
    match engine.pairwise_similarity(&first, &second) {
        Ok(score) => Json(serde_json::json!({
            "first": problem_json(&score.first),
            "second": problem_json(&score.second),
            "score": score.score,
        }))
        .into_response(),
        Err(e) => similarity_error_response(&e),
    }
}

/// API endpoint describing the served snapshot
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let snapshot = &state.snapshot;
    Json(serde_json::json!({
        "problems": snapshot.problem_count(),
        "rows": snapshot.table().len(),
        "with_metadata": snapshot.metadata().len(),
        "loaded_at": snapshot.loaded_at().to_rfc3339(),
    }))
}

fn problem_json(id: &ProblemId) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": id.display_title(),
        "url": id.problem_url(),
    })
}

fn result_json(result: &RankedResult) -> serde_json::Value {
    serde_json::json!({
        "problem": problem_json(&result.problem),
        "score": result.score,
        "tags": result.tags,
        "difficulty": result.difficulty,
    })
}
