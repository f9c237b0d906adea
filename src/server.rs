use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::{
    io,
    net::SocketAddr,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tokio::time::Instant;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const DOCUMENT_CACHE_CONTROL: &str = "no-cache";
const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("unable to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = non_empty(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_log_level(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    non_empty(value)
        .and_then(|value| value.parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<String>, default: LogLevel) -> LogLevel {
    match non_empty(value)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

pub async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env();
    let address = SocketAddr::from(([0, 0, 0, 0], config.port));

    if !config.dist_dir.join("index.html").is_file() {
        log_event(
            config.log_level,
            LogLevel::Info,
            "dist_missing",
            serde_json::json!({
                "dist_dir": config.dist_dir.display().to_string(),
                "hint": "run `trunk build --release` first",
            }),
        );
    }

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;

    log_event(
        config.log_level,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "address": address.to_string(),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(config))
        .await
        .map_err(ServerError::Serve)
}

/// Static files from `dist`, with every unknown path answered by `index.html` so client-side
/// routes survive a reload.
pub fn router(config: ServerConfig) -> Router {
    let index = ServeFile::new(config.dist_dir.join("index.html"));
    let static_service = ServeDir::new(&config.dist_dir).fallback(index);

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config, observe_request))
}

async fn observe_request(
    State(config): State<ServerConfig>,
    request: Request,
    next: Next,
) -> Response {
    let started_at = Instant::now();
    let request_id = request_id_for(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    log_event(
        config.log_level,
        LogLevel::Debug,
        "request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
        }),
    );

    let mut response = next.run(request).await;
    let status = response.status();
    let headers = response.headers_mut();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    if !headers.contains_key(header::CACHE_CONTROL) {
        let policy = cache_policy(headers.get(header::CONTENT_TYPE));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(policy));
    }

    log_event(
        config.log_level,
        LogLevel::Info,
        "request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

/// The document must be revalidated so new builds are picked up; everything else may be cached.
fn cache_policy(content_type: Option<&HeaderValue>) -> &'static str {
    let is_document = content_type
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"));

    if is_document {
        DOCUMENT_CACHE_CONTROL
    } else {
        ASSET_CACHE_CONTROL
    }
}

fn unix_time() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

/// Trusts a non-blank `x-request-id` from the caller; otherwise mints `folio-<hex millis>-<seq>`.
fn request_id_for(headers: &HeaderMap) -> String {
    let supplied = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim);

    match supplied {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let sequence = REQUEST_SEQUENCE.fetch_add(1, AtomicOrdering::Relaxed);
            format!("folio-{:x}-{sequence}", unix_time().as_millis())
        }
    }
}

fn log_line(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut line = serde_json::json!({
        "ts": unix_time().as_secs(),
        "level": level.as_str(),
        "event": event,
    });

    if let (Some(line), serde_json::Value::Object(extra)) = (line.as_object_mut(), fields) {
        line.extend(extra);
    }
    line
}

/// One JSON object per line on stdout, dropped when below `threshold`.
fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level >= threshold {
        println!("{}", log_line(level, event, fields));
    }
}
