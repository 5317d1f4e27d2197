//! Userbase is a minimal CRUD API over a PostgreSQL `users` table.

#![forbid(unsafe_code)]

mod database;
pub mod error;
mod middleware;
mod router;
pub mod telemetry;
mod user;

pub mod config;

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{Method, header};
use axum::routing::get;
use axum::{Router, middleware as AxumMiddleware};
use error::ServerError;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};

pub use database::Database;
pub use user::{User, UserRepository};

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub metrics: Option<PrometheusHandle>,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .on_body_chunk(|chunk: &Bytes, latency: Duration, _span: &tracing::Span| {
                    tracing::trace!(size_bytes = chunk.len(), latency = ?latency, "sending body chunk")
                })
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().latency_unit(LatencyUnit::Micros)),
        )
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
                .allow_headers(Any),
        );

    let mut routes = Router::new()
        // `GET /` goes to `hello`.
        .route("/", get(router::hello))
        .nest("/users", router::users::router())
        .with_state(state.clone());

    // `GET /metrics` is only served once a recorder is installed.
    if let Some(handle) = state.metrics {
        routes = routes.route("/metrics", get(telemetry::metrics).with_state(handle));
    }

    routes
        .route_layer(AxumMiddleware::from_fn(telemetry::track))
        .layer(middleware)
}

/// Initialize the application state.
pub async fn initialize_state(
    config: config::Configuration,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let Some(url) = config.postgres.url.clone() else {
        return Err(format!(
            "missing `{}` environment variable",
            config::DATABASE_URL
        )
        .into());
    };

    let db = Database::new(&url, config.postgres.pool_size).await?;

    let metrics = if config.metrics {
        Some(telemetry::setup_metrics_recorder()?)
    } else {
        None
    };

    Ok(AppState {
        db,
        metrics,
    })
}
