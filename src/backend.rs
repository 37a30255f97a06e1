use crate::contact::{validate, ContactResponse, ContactSubmission};
use crate::logging::{self, log_event, LogLevel};
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::json;
use std::{
    net::SocketAddr,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
};
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_CONTACT_MAX_BYTES: usize = 16 * 1024;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const CONTACT_MAX_BYTES_BOUNDS: (usize, usize) = (1_024, 64 * 1024);

static SUBMISSION_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone, Debug, PartialEq)]
struct ServerConfig {
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
    contact_max_bytes: usize,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = lookup("SITE_DIST_DIR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = lookup("LOG_LEVEL")
            .and_then(|value| LogLevel::from_str(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let contact_max_bytes = parse_with_bounds(
            lookup("CONTACT_MAX_BYTES"),
            DEFAULT_CONTACT_MAX_BYTES,
            CONTACT_MAX_BYTES_BOUNDS,
        );

        Self {
            port,
            dist_dir,
            log_level,
            contact_max_bytes,
        }
    }
}

fn parse_with_bounds<T>(value: Option<String>, default: T, bounds: (T, T)) -> T
where
    T: std::str::FromStr + PartialOrd,
{
    value
        .and_then(|value| value.trim().parse::<T>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env();
    logging::set_max_level(config.log_level);

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;

    log_event(
        LogLevel::Info,
        "server.listening",
        json!({
            "address": address.to_string(),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(&config))
        .await
        .map_err(ServerError::Serve)
}

fn router(config: &ServerConfig) -> Router {
    let static_service = ServeDir::new(&config.dist_dir)
        .not_found_service(ServeFile::new(config.dist_dir.join("index.html")));

    Router::new()
        .route("/api/contact", post(post_contact))
        .layer(DefaultBodyLimit::max(config.contact_max_bytes))
        .fallback_service(static_service)
}

async fn post_contact(
    Json(submission): Json<ContactSubmission>,
) -> (StatusCode, Json<ContactResponse>) {
    let submission_id = SUBMISSION_COUNTER.fetch_add(1, Ordering::Relaxed);

    match validate(&submission) {
        Ok(valid) => {
            log_event(
                LogLevel::Info,
                "contact.received",
                json!({
                    "submission_id": submission_id,
                    "service": valid.service,
                    "message_chars": valid.message.chars().count(),
                }),
            );
            (
                StatusCode::OK,
                Json(ContactResponse {
                    ok: true,
                    error: None,
                }),
            )
        }
        Err(error) => {
            log_event(
                LogLevel::Info,
                "contact.rejected",
                json!({
                    "submission_id": submission_id,
                    "field": error.field().as_str(),
                }),
            );
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ContactResponse {
                    ok: false,
                    error: Some(error.to_string()),
                }),
            )
        }
    }
}
