use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use super::path_int::parse_path_i64;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Book id taken from the `{book_id}` route segment.
///
/// Only the shape is checked here; whether a row exists is the handler's
/// call, since absence maps to 404 rather than 422.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookId(pub i64);

impl FromRequest for BookId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path_i64(req, "book_id", "book id", ErrorCode::InvalidBookId).map(BookId))
    }
}
