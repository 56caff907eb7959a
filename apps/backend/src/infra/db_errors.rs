//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert through here, and higher
//! layers map `DomainError` to `AppError` via `From`. Raw driver messages are
//! logged with the trace id and never copied into the client-facing detail.

use sea_orm::{ConnAcquireErr, DbErr};
use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    match &e {
        DbErr::RecordNotFound(_) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => {
            warn!(trace_id = %trace_id, error = %e, "db pool acquire timed out");
            DomainError::infra(InfraErrorKind::Timeout, "Database timeout")
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, error = %e, "db connection unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        _ => {
            error!(trace_id = %trace_id, error = %e, "unhandled database error");
            DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database error")
        }
    }
}
