use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use super::path_int::parse_path_i64;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Publication year taken from the `{year}` route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationYear(pub i64);

impl FromRequest for PublicationYear {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path_i64(req, "year", "year", ErrorCode::InvalidYear).map(PublicationYear))
    }
}
