// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Serialise `value` as JSON with a content-hash ETag.
/// A matching `If-None-Match` gets an empty 304 instead of the body.
pub fn json_response<T: Serialize>(value: &T, if_none_match: Option<&str>) -> ResultResp {
    let body = serde_json::to_string(value).map_err(|_| ServerError::InternalError)?;
    let etag = etag_for(body.as_bytes());

    if if_none_match.is_some_and(|tags| etag_matches(tags, &etag)) {
        return ResponseBuilder::new()
            .status(304)
            .header("ETag", etag.as_str())
            .body(Body::empty())
            .map_err(|_| ServerError::InternalError);
    }

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .header("ETag", etag.as_str())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

pub fn etag_for(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("\"{}\"", STANDARD.encode(digest))
}

fn etag_matches(header: &str, etag: &str) -> bool {
    header
        .split(',')
        .map(str::trim)
        .any(|tag| tag == "*" || tag == etag || tag.strip_prefix("W/") == Some(etag))
}
