//! imagelab server - HTTP front end for the transformation pipeline.
//!
//! Every endpoint takes a multipart upload with a `file` field and answers
//! with JSON carrying the resulting JPEG as base64:
//!
//! | Route                          | Transform                  |
//! |--------------------------------|----------------------------|
//! | `POST /upload/`                | none, reports dimensions   |
//! | `POST /channel/{channel}`      | channel isolation          |
//! | `POST /crop/{x}/{y}/{w}/{h}`   | crop                       |
//! | `POST /rotate/{angle}`         | rotation                   |
//! | `POST /draw/{x}/{y}/{w}/{h}`   | rectangle outline          |

pub mod config;
pub mod error;
pub mod routes;
pub mod upload;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;

/// Read-only settings shared by all handlers.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub jpeg_quality: u8,
}

impl From<&ServerConfig> for AppState {
    fn from(config: &ServerConfig) -> Self {
        Self {
            jpeg_quality: config.jpeg_quality,
        }
    }
}

/// Build the router with CORS, tracing and the upload size limit applied.
pub fn app(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/upload/", post(routes::inspect))
        .route("/channel/:channel", post(routes::channel))
        .route("/crop/:x/:y/:w/:h", post(routes::crop))
        .route("/rotate/:angle", post(routes::rotate))
        .route("/draw/:x/:y/:w/:h", post(routes::draw))
        .with_state(AppState::from(config))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
