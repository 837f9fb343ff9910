//! Base64 text encoding for image payloads embedded in JSON responses.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Error returned when text is not valid standard base64.
#[derive(Debug, Error)]
#[error("Invalid base64 payload: {0}")]
pub struct TransportError(#[from] base64::DecodeError);

/// Encode bytes as padded standard base64.
pub fn to_text(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode padded standard base64 back into bytes.
pub fn from_text(text: &str) -> Result<Vec<u8>, TransportError> {
    Ok(STANDARD.decode(text)?)
}
