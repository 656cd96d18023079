mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, service::notification::EmailSender, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let cors = startup::cors_layer(&config)?;
    let email_sender = EmailSender::new(
        startup::setup_reqwest_client(),
        config.brevo_api_key.clone(),
        config.mail_from.clone(),
    );

    startup::ensure_default_admin(&db, &config).await?;

    let app = server::router::router()
        .with_state(AppState::new(db, email_sender, config.app_url.clone()))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
