//! Compact, URL-safe encoding of a whole schedule for share links.
//!
//! Pipeline: JSON text, raw DEFLATE, then base64url without padding. The
//! resulting token only uses `A-Z a-z 0-9 - _` and can be used as a path
//! segment as is.

use std::io::{Read, Write};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use thiserror::Error;
use tracing::warn;

use crate::models::Course;

/// Upper bound on the inflated JSON accepted from a token.
pub const MAX_DECODED_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("empty token")]
    Empty,

    #[error("token is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("deflate stream error: {0}")]
    Deflate(#[from] std::io::Error),

    #[error("decoded schedule is larger than 4 MiB")]
    TooLarge,

    #[error("schedule json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn encode(schedule: &[Course]) -> Result<String, CodecError> {
    let json = serde_json::to_vec(schedule)?;

    let mut encoder = DeflateEncoder::new(Vec::with_capacity(json.len() / 2), Compression::best());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

/// Like [`decode`] but reports why a token was rejected.
pub fn try_decode(encoded: &str) -> Result<Vec<Course>, CodecError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(CodecError::Empty);
    }

    let compressed = URL_SAFE_NO_PAD.decode(encoded)?;

    let mut json = Vec::new();
    DeflateDecoder::new(compressed.as_slice())
        .take(MAX_DECODED_BYTES + 1)
        .read_to_end(&mut json)?;
    if json.len() as u64 > MAX_DECODED_BYTES {
        return Err(CodecError::TooLarge);
    }

    Ok(serde_json::from_slice(&json)?)
}

/// Never fails: a broken or tampered token reads as an empty schedule.
pub fn decode(encoded: &str) -> Vec<Course> {
    match try_decode(encoded) {
        Ok(courses) => courses,
        Err(e) => {
            warn!("failed to decode shared schedule: {}", e);
            Vec::new()
        }
    }
}
