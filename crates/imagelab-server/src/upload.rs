//! Multipart upload extraction.

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::ApiError;

/// Name of the form field carrying the image.
pub const FILE_FIELD: &str = "file";

/// The uploaded image and the file name the client gave it.
#[derive(Debug)]
pub struct Upload {
    pub filename: Option<String>,
    pub bytes: Bytes,
}

/// Read the `file` field out of a multipart body, skipping any other fields.
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await?;
        tracing::debug!(?filename, size = bytes.len(), "upload received");
        return Ok(Upload { filename, bytes });
    }
    Err(ApiError::missing_file())
}
