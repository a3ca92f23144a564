//! Acting user extraction from HTTP request headers.

use crate::AppError;
use axum::http::HeaderMap;
use serde_json::json;

/// Header naming the user on whose behalf a request acts.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extracts the acting user id from the `X-User-Id` header.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The header is missing
/// - The value is not valid UTF-8
/// - The value is not a positive integer
pub fn extract_user_id_from_headers(headers: &HeaderMap) -> Result<i64, AppError> {
    let raw = headers
        .get(USER_ID_HEADER)
        .ok_or_else(|| {
            AppError::bad_request("Missing X-User-Id header", json!({ "header": "X-User-Id" }))
        })?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid X-User-Id header", json!({})))?;

    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            "Invalid X-User-Id header",
            json!({ "value": raw }),
        )),
    }
}
