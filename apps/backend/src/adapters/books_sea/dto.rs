//! DTOs for books_sea adapter.

/// Column values written by create and update. `id` is never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub name: String,
    pub writer: String,
    pub year: i64,
}
