use actix_web::web;

pub mod books;
pub mod health;

/// Register every application route.
///
/// `main.rs` and the test app builder both go through here, so tests
/// exercise exactly the production routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Book catalog: /book_add, /book/**, /books/**
    cfg.configure(books::configure_routes);
}
