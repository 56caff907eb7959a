//! Task-local trace id for the request currently being served.
//!
//! `RequestTrace` opens the scope; error rendering and DB error logging read
//! the id from anywhere inside the handler future without threading it
//! through every signature.

use tokio::task_local;

const NO_TRACE: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or `"unknown"` outside one.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| NO_TRACE.to_string())
}

/// Drive `future` with `trace_id` visible to [`trace_id()`].
pub async fn with_trace_id<F>(trace_id: String, future: F) -> F::Output
where
    F: std::future::Future,
{
    TRACE_ID.scope(trace_id, future).await
}
