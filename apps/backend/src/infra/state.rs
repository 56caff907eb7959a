use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::infra::schema::ensure_schema;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_profile {
            Some(profile) => {
                // single entrypoint: connect + ensure schema
                let conn = connect_db(&profile).await?;
                ensure_schema(&conn).await?;
                Ok(AppState::new(conn))
            }
            None => Ok(AppState::new_without_db()),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
