#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde::de::DeserializeOwned;

// Logging is auto-installed for every test binary that includes `mod common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert the status, then decode the JSON body.
pub async fn read_json<T: DeserializeOwned>(resp: ServiceResponse<BoxBody>, expected_status: u16) -> T {
    assert_eq!(
        resp.status().as_u16(),
        expected_status,
        "unexpected status for {}",
        resp.request().path()
    );
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "response body is not the expected JSON ({e}): {}",
            String::from_utf8_lossy(&body)
        )
    })
}
