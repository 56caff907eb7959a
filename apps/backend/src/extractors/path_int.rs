use actix_web::HttpRequest;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Parse a named path segment as `i64`, rejecting with 422 and `code`.
///
/// Any integer is accepted; whether a row exists is decided by the lookup.
pub(crate) fn parse_path_i64(
    req: &HttpRequest,
    name: &str,
    label: &str,
    code: ErrorCode,
) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))?;

    raw.parse::<i64>()
        .map_err(|_| AppError::invalid(code, format!("Invalid {label}: {raw}")))
}
