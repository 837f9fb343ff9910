//! Request handlers, one per transform.
//!
//! Handlers only read the upload and parameters; decoding, transforming and
//! encoding run on the blocking pool through [`run_blocking`]. Extractor
//! rejections are taken as `Result`s so they surface as [`ApiError`]s.

use std::time::Instant;

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use imagelab_core::{pipeline, Channel, EncodedImage, Operation, PipelineError};
use serde::Serialize;

use crate::error::ApiError;
use crate::upload::read_upload;
use crate::AppState;

/// Body of `POST /upload/`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectResponse {
    pub image_base64: String,
    pub filename: Option<String>,
    pub width: u32,
    pub height: u32,
}

/// Body of every transform endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub image_base64: String,
}

impl From<EncodedImage> for ImageResponse {
    fn from(image: EncodedImage) -> Self {
        Self {
            image_base64: image.image_base64,
        }
    }
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn inspect(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<InspectResponse>, ApiError> {
    let upload = read_upload(multipart?).await?;
    let quality = state.jpeg_quality;
    let bytes = upload.bytes;

    let encoded = run_blocking("inspect", move || pipeline::inspect(&bytes, quality)).await?;

    Ok(Json(InspectResponse {
        image_base64: encoded.image_base64,
        filename: upload.filename,
        width: encoded.width,
        height: encoded.height,
    }))
}

pub async fn channel(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageResponse>, ApiError> {
    let Path(channel) = path?;
    let channel: Channel = channel.parse()?;
    transform(state, Operation::Isolate(channel), multipart).await
}

pub async fn crop(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64, i64, i64)>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageResponse>, ApiError> {
    let Path((x, y, width, height)) = path?;
    let op = Operation::Crop {
        x,
        y,
        width,
        height,
    };
    transform(state, op, multipart).await
}

pub async fn rotate(
    State(state): State<AppState>,
    path: Result<Path<f64>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageResponse>, ApiError> {
    let Path(angle) = path?;
    transform(state, Operation::Rotate { angle }, multipart).await
}

pub async fn draw(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64, i64, i64)>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageResponse>, ApiError> {
    let Path((x, y, width, height)) = path?;
    let op = Operation::DrawRectangle {
        x,
        y,
        width,
        height,
    };
    transform(state, op, multipart).await
}

async fn transform(
    state: AppState,
    op: Operation,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageResponse>, ApiError> {
    op.validate()?;
    let upload = read_upload(multipart?).await?;
    let quality = state.jpeg_quality;
    let bytes = upload.bytes;

    let encoded = run_blocking(op.name(), move || pipeline::process(&bytes, &op, quality)).await?;
    Ok(Json(encoded.into()))
}

/// Run a CPU-bound pipeline step off the async workers.
async fn run_blocking<F>(operation: &'static str, job: F) -> Result<EncodedImage, ApiError>
where
    F: FnOnce() -> Result<EncodedImage, PipelineError> + Send + 'static,
{
    let started = Instant::now();
    let encoded = tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ApiError::internal(format!("pipeline task failed: {e}")))??;

    tracing::debug!(
        operation,
        width = encoded.width,
        height = encoded.height,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "pipeline finished"
    );
    Ok(encoded)
}
