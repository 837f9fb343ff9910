//! Mapping of pipeline failures onto HTTP responses.

use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::PathRejection;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use imagelab_core::{PipelineError, TransformError};
use serde::Serialize;

/// Header set on every error response.
pub const ERROR_HEADER: &str = "x-error";

/// A request failure with its HTTP status and client-facing message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub detail: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: &'static str, detail: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            detail: detail.into(),
        }
    }

    pub fn missing_file() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "missing-file",
            "Multipart field 'file' is required",
        )
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", detail)
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        let detail = err.to_string();
        match err {
            PipelineError::Decode(_) => Self::new(StatusCode::BAD_REQUEST, "decode", detail),
            PipelineError::InvalidParameter(TransformError::UnknownChannel(_)) => {
                Self::new(StatusCode::NOT_FOUND, "unknown-channel", detail)
            }
            PipelineError::InvalidParameter(_) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid-parameter", detail)
            }
            PipelineError::Encode(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "encode", detail)
            }
        }
    }
}

impl From<TransformError> for ApiError {
    fn from(err: TransformError) -> Self {
        PipelineError::from(err).into()
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::new(err.status(), "multipart", err.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::new(rejection.status(), "multipart", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), "invalid-parameter", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(kind = self.kind, detail = %self.detail, "request failed");
        } else {
            tracing::warn!(kind = self.kind, detail = %self.detail, "request rejected");
        }

        let body = Json(ErrorBody {
            detail: &self.detail,
        });
        let mut response = (self.status, body).into_response();
        response
            .headers_mut()
            .insert(HeaderName::from_static(ERROR_HEADER), HeaderValue::from_static(self.kind));
        response
    }
}
