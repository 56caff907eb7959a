//! Book repository functions for domain layer (generic over ConnectionTrait).
//!
//! Absence is a value here (`Option` / empty `Vec`), never an error; handlers
//! decide which absences become 404s.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::adapters::books_sea as books_adapter;
use crate::entities::books;
use crate::errors::domain::DomainError;

/// Domain representation of a catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub writer: String,
    pub year: i64,
}

/// Fields supplied by a caller for create/update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub name: String,
    pub writer: String,
    pub year: i64,
}

impl From<books::Model> for Book {
    fn from(model: books::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            writer: model.writer,
            year: model.year,
        }
    }
}

impl From<NewBook> for books_adapter::BookFields {
    fn from(new_book: NewBook) -> Self {
        Self {
            name: new_book.name,
            writer: new_book.writer,
            year: new_book.year,
        }
    }
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Book>, DomainError> {
    let rows = books_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Book::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Option<Book>, DomainError> {
    let row = books_adapter::find_by_id(conn, book_id).await?;
    Ok(row.map(Book::from))
}

pub async fn list_by_writer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    writer: &str,
) -> Result<Vec<Book>, DomainError> {
    let rows = books_adapter::list_by_writer(conn, writer).await?;
    debug!(writer, count = rows.len(), "books.by_writer");
    Ok(rows.into_iter().map(Book::from).collect())
}

pub async fn list_by_year<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    year: i64,
) -> Result<Vec<Book>, DomainError> {
    let rows = books_adapter::list_by_year(conn, year).await?;
    debug!(year, count = rows.len(), "books.by_year");
    Ok(rows.into_iter().map(Book::from).collect())
}

pub async fn create_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new_book: NewBook,
) -> Result<Book, DomainError> {
    let model = books_adapter::create_book(conn, new_book.into()).await?;
    info!(book_id = model.id, "book.created");
    Ok(Book::from(model))
}

pub async fn update_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
    new_book: NewBook,
) -> Result<Option<Book>, DomainError> {
    let updated = books_adapter::update_book(conn, book_id, new_book.into()).await?;
    if updated.is_some() {
        info!(book_id, "book.updated");
    }
    Ok(updated.map(Book::from))
}

pub async fn delete_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Option<Book>, DomainError> {
    let deleted = books_adapter::delete_book(conn, book_id).await?;
    if deleted.is_some() {
        info!(book_id, "book.deleted");
    }
    Ok(deleted.map(Book::from))
}
