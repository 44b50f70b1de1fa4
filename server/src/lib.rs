//! Wishlist Server
//!
//! Layered architecture:
//! - domain: stored entities and id generation
//! - repository: JSON file repositories
//! - handlers: axum handlers for the wish and reservation endpoints

use std::{net::SocketAddr, path::Path};

use axum::{
    middleware::from_fn,
    routing::{get, put},
    Router,
};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod repository;
pub mod state;

use config::Config;
use handlers::{
    create_wish, delete_wish, get_reservations, list_wishes, missing_wish_id, save_reservations,
    update_wish,
};
use state::AppState;

/// API routes plus static files from `static_dir`, unknown paths answered
/// with its `index.html`
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let static_files =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/wishes", get(list_wishes))
        .route("/api/wishes/", get(list_wishes))
        .route("/api/admin/wishes", get(list_wishes).post(create_wish))
        .route(
            "/api/admin/wishes/",
            get(list_wishes)
                .post(create_wish)
                .put(missing_wish_id)
                .delete(missing_wish_id),
        )
        .route(
            "/api/admin/wishes/:id",
            put(update_wish).delete(delete_wish),
        )
        .route(
            "/api/reservation",
            get(get_reservations).post(save_reservations),
        )
        .fallback_service(static_files)
        .layer(from_fn(middleware::log_requests))
        .with_state(state)
}

pub async fn start_server() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    info!(data_dir = %config.data_dir.display(), "Initializing state...");
    let state = AppState::new(&config);

    let app = build_router(state, &config.static_dir);

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Serving on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
