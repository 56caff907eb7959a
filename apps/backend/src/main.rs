use actix_web::{web, App, HttpServer};
use bookshelf::config::db::DbProfile;
use bookshelf::infra::state::build_state;
use bookshelf::middleware::cors::cors_middleware;
use bookshelf::middleware::request_trace::RequestTrace;
use bookshelf::middleware::structured_logger::StructuredLogger;
use bookshelf::middleware::trace_span::TraceSpan;
use bookshelf::routes;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let profile = DbProfile::from_env().unwrap_or_else(|e| {
        eprintln!("❌ {e}");
        std::process::exit(1);
    });

    let app_state = match build_state().with_db(profile.clone()).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(profile = ?profile, host = %host, port, "bookshelf backend starting");
    println!("🚀 Starting Bookshelf Backend on http://{}:{}", host, port);

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
