//! # Chat API
//!
//! REST backend for chats and their messages.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server with graceful shutdown

use anyhow::Result;
use tracing::info;

use chat_api::config::Settings;
use chat_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    chat_api::telemetry::init_tracing();

    info!("Starting Chat API...");

    let settings = Settings::load()?;
    info!(
        addr = %settings.server_addr(),
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
