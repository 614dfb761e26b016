mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    dotenvy::dotenv().ok();

    if let Err(err) = run().await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("Error in DB connection: {}", err);
            std::process::exit(1);
        }
    };

    let app = router::app(AppState::new(db.clone()), startup::setup_cors(&config));

    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    tracing::info!("Starting server on {}", config.address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    db.close().await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
