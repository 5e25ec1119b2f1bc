//! HTTP server exposing the record endpoints and game pages
//!
//! - `GET /data`: every salary record
//! - `GET /player-stats`: every stored (filtered) stats record
//! - `GET /`, `/nba-salary-game`, `/nba-guess-player`: page shells
//! - `GET /static/*`: files from the configured static directory

pub mod handlers;
pub mod pages;


use crate::core::{config::DEFAULT_STATIC_DIR, AppConfig};
use crate::error::Result;
use crate::service::RecordService;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecordService>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(service: RecordService) -> Self {
        Self {
            service: Arc::new(service),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(pages::index_handler))
        .route("/nba-salary-game", get(pages::salary_game_handler))
        .route("/nba-guess-player", get(pages::guess_player_handler))
        .route("/data", get(handlers::salary_data_handler))
        .route("/player-stats", get(handlers::player_stats_handler))
        .nest_service("/static", ServeDir::new(&state.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind to the configured address and serve until a shutdown signal
pub async fn serve(config: &AppConfig, state: AppState) -> Result<()> {
    let address = config.bind_address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
