//! SeaORM adapter for the books table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::books;

pub mod dto;

pub use dto::BookFields;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    books::Entity::find()
        .order_by_asc(books::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Option<books::Model>, sea_orm::DbErr> {
    books::Entity::find()
        .filter(books::Column::Id.eq(book_id))
        .one(conn)
        .await
}

pub async fn list_by_writer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    writer: &str,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    books::Entity::find()
        .filter(books::Column::Writer.eq(writer))
        .order_by_asc(books::Column::Id)
        .all(conn)
        .await
}

pub async fn list_by_year<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    year: i64,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    books::Entity::find()
        .filter(books::Column::Year.eq(year))
        .order_by_asc(books::Column::Id)
        .all(conn)
        .await
}

/// Insert a row; the returned model carries the storage-assigned id.
pub async fn create_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fields: BookFields,
) -> Result<books::Model, sea_orm::DbErr> {
    let active = books::ActiveModel {
        id: NotSet,
        name: Set(fields.name),
        writer: Set(fields.writer),
        year: Set(fields.year),
    };
    active.insert(conn).await
}

/// Overwrite name/writer/year of an existing row. `None` if the id is unknown.
pub async fn update_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
    fields: BookFields,
) -> Result<Option<books::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(conn, book_id).await? else {
        return Ok(None);
    };

    let mut active: books::ActiveModel = existing.into();
    active.name = Set(fields.name);
    active.writer = Set(fields.writer);
    active.year = Set(fields.year);
    active.update(conn).await.map(Some)
}

/// Hard delete. Returns the row as it was before deletion, `None` if absent.
pub async fn delete_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Option<books::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(conn, book_id).await? else {
        return Ok(None);
    };

    existing.clone().delete(conn).await?;
    Ok(Some(existing))
}
