//! Create-if-missing bootstrap for the books table.
//!
//! This is not a migration system: the table and its indexes are derived from
//! the SeaORM entity and created with IF NOT EXISTS on every boot.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use tracing::debug;

use crate::entities::books;
use crate::error::AppError;

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(books::Entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    // One single-column index per #[sea_orm(indexed)] column
    for mut index in schema.create_index_from_entity(books::Entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    debug!(table = "books", "schema ensured");
    Ok(())
}
