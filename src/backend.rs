use crate::config::ServerConfig;
use crate::telemetry::{log_event, set_threshold, LogLevel};
use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::json;
use std::{
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Serves the built bundle with an `index.html` fallback for unknown paths.
/// The contact API is not served here.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    set_threshold(config.log_level);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        LogLevel::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, app(&config)).await?;
    Ok(())
}

pub fn app(config: &ServerConfig) -> Router {
    let static_service =
        ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(config.index_file()));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn(log_requests))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    log_event(
        LogLevel::Debug,
        "static_request",
        json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": response.status().as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}
