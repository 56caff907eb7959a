//! Adapters for external dependencies.

pub mod books_sea;
