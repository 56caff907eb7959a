//! Repository functions for domain layer.

pub mod books;
