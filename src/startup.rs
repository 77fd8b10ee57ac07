//! Application Startup
//!
//! Application building, server initialization and graceful shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::application::services::{ChatService, ChatServiceImpl, MessageService, MessageServiceImpl};
use crate::config::{ServerSettings, Settings};
use crate::domain::{ChatRepository, MessageRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgChatRepository, PgMessageRepository};
use crate::presentation::http::routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<dyn ChatService>,
    pub message_service: Arc<dyn MessageService>,
}

impl AppState {
    /// Wire the services over the given storage implementations
    pub fn new(
        chat_repo: Arc<dyn ChatRepository>,
        message_repo: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            chat_service: Arc::new(ChatServiceImpl::new(
                Arc::clone(&chat_repo),
                Arc::clone(&message_repo),
            )),
            message_service: Arc::new(MessageServiceImpl::new(chat_repo, message_repo)),
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    shutdown_timeout: Duration,
}

impl Application {
    /// Build the application from settings
    ///
    /// Connects to PostgreSQL and applies migrations before binding; any
    /// failure here aborts startup.
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let state = AppState::new(
            Arc::new(PgChatRepository::new(db.clone())),
            Arc::new(PgMessageRepository::new(db)),
        );

        Self::with_state(state, &settings.server).await
    }

    /// Bind the HTTP listener for an already wired state
    pub async fn with_state(state: AppState, server: &ServerSettings) -> Result<Self> {
        let router = routes::create_router(state);

        let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            shutdown_timeout: server.shutdown_timeout(),
        })
    }

    /// Run the server until SIGINT or SIGTERM
    pub async fn run_until_stopped(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Run the server until `signal` resolves, then drain in-flight requests
    /// for at most the configured shutdown timeout.
    pub async fn run_until<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let shutdown_timeout = self.shutdown_timeout;
        let (drain_tx, drain_rx) = oneshot::channel::<()>();

        let server = axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            let _ = drain_rx.await;
        });
        let mut server = tokio::spawn(async move { server.await });

        tokio::select! {
            result = &mut server => {
                result??;
                return Ok(());
            }
            _ = signal => {}
        }

        tracing::info!(
            timeout = ?shutdown_timeout,
            "Shutdown signal received, draining in-flight requests"
        );
        let _ = drain_tx.send(());

        match tokio::time::timeout(shutdown_timeout, &mut server).await {
            Ok(result) => result??,
            Err(_) => {
                tracing::warn!("Shutdown timeout elapsed, closing remaining connections");
                server.abort();
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
