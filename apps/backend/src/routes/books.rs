//! Book catalog endpoints.
//!
//! Every handler validates shape through its extractors, opens one storage
//! session with `with_txn`, and maps absence to 404.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{BookId, PublicationYear, ValidatedJson};
use crate::repos::books::{self, Book, NewBook};
use crate::state::app_state::AppState;

const BOOK_NOT_FOUND: &str = "Book not found";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookResponse {
    pub id: i64,
    pub name: String,
    pub writer: String,
    pub year: i64,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            writer: book.writer,
            year: book.year,
        }
    }
}

/// Body of create and update. Any `id` in the body is ignored; storage
/// assigns it on create and the path names it on update.
#[derive(Debug, Deserialize)]
pub struct BookPayload {
    pub name: String,
    pub writer: String,
    pub year: i64,
}

impl From<BookPayload> for NewBook {
    fn from(payload: BookPayload) -> Self {
        Self {
            name: payload.name,
            writer: payload.writer,
            year: payload.year,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: &'static str,
}

fn book_list(books: Vec<Book>) -> Vec<BookResponse> {
    books.into_iter().map(BookResponse::from).collect()
}

fn book_not_found() -> AppError {
    AppError::not_found(ErrorCode::BookNotFound, BOOK_NOT_FOUND)
}

async fn add_book(
    app_state: web::Data<AppState>,
    body: ValidatedJson<BookPayload>,
) -> Result<HttpResponse, AppError> {
    let new_book = NewBook::from(body.into_inner());

    let book = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(books::create_book(txn, new_book).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(BookResponse::from(book)))
}

async fn get_book(
    app_state: web::Data<AppState>,
    book_id: BookId,
) -> Result<HttpResponse, AppError> {
    let BookId(id) = book_id;

    let book = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(books::find_by_id(txn, id).await?) })
    })
    .await?
    .ok_or_else(book_not_found)?;

    Ok(HttpResponse::Ok().json(BookResponse::from(book)))
}

async fn list_books(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let all = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(books::list_all(txn).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(book_list(all)))
}

async fn books_by_writer(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let writer = path.into_inner();
    let lookup = writer.clone();

    let found = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(books::list_by_writer(txn, &lookup).await?) })
    })
    .await?;

    if found.is_empty() {
        return Err(AppError::not_found(
            ErrorCode::NotFound,
            format!("No books found for {writer} writer"),
        ));
    }

    Ok(HttpResponse::Ok().json(book_list(found)))
}

async fn books_by_year(
    app_state: web::Data<AppState>,
    year: PublicationYear,
) -> Result<HttpResponse, AppError> {
    let PublicationYear(year) = year;

    let found = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(books::list_by_year(txn, year).await?) })
    })
    .await?;

    if found.is_empty() {
        return Err(AppError::not_found(
            ErrorCode::NotFound,
            format!("No books found for {year}"),
        ));
    }

    Ok(HttpResponse::Ok().json(book_list(found)))
}

async fn change_book(
    app_state: web::Data<AppState>,
    book_id: BookId,
    body: ValidatedJson<BookPayload>,
) -> Result<HttpResponse, AppError> {
    let BookId(id) = book_id;
    let changes = NewBook::from(body.into_inner());

    let book = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(books::update_book(txn, id, changes).await?) })
    })
    .await?
    .ok_or_else(book_not_found)?;

    Ok(HttpResponse::Ok().json(BookResponse::from(book)))
}

async fn delete_book(
    app_state: web::Data<AppState>,
    book_id: BookId,
) -> Result<HttpResponse, AppError> {
    let BookId(id) = book_id;

    with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(books::delete_book(txn, id).await?) })
    })
    .await?
    .ok_or_else(book_not_found)?;

    Ok(HttpResponse::Ok().json(DetailResponse {
        detail: "Book deleted",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/book_add", web::post().to(add_book))
        .route("/books", web::get().to(list_books))
        .route(
            "/books/by-writer/{writer_name}",
            web::get().to(books_by_writer),
        )
        .route("/books/by-year/{year}", web::get().to(books_by_year))
        .route("/books/{book_id}", web::delete().to(delete_book))
        .service(
            web::resource("/book/{book_id}")
                .route(web::get().to(get_book))
                .route(web::put().to(change_book)),
        );
}
