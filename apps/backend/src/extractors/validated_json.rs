use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Book payloads are three short fields; anything past this is not a book.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Strictly-typed JSON body extractor.
///
/// Deserializes the request body into `T` with serde's default strictness:
/// required fields must be present and no numeric/string coercion happens.
/// Any failure is rejected with 422 `VALIDATION_ERROR` before the handler
/// (and therefore storage) runs.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();
        let path = req.path().to_string();

        Box::pin(async move {
            let body = read_body(&mut payload).await?;
            parse_body(&body).map(ValidatedJson).inspect_err(|e| {
                debug!(
                    path = %path,
                    body_size = body.len(),
                    detail = %e.detail(),
                    "json body rejected"
                )
            })
        })
    }
}

async fn read_body(payload: &mut Payload) -> Result<Bytes, AppError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            warn!(error = %e, "failed to read request body");
            AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
        })?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!("Request body exceeds {MAX_BODY_BYTES} bytes"),
            ));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::invalid(ErrorCode::ValidationError, describe_json_error(&e)))
}

/// Client-facing message for a serde_json failure.
///
/// Missing fields are named; type mismatches are not echoed back since the
/// serde message quotes the offending value.
fn describe_json_error(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
        Category::Data => {
            let message = error.to_string();
            match message.strip_prefix("missing field ") {
                Some(rest) => {
                    let field = rest.split(" at line").next().unwrap_or(rest);
                    format!("Invalid JSON: missing field {field}")
                }
                None => "Invalid JSON: wrong types for one or more fields".to_string(),
            }
        }
    }
}
