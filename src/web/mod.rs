mod pages;
mod routes;
mod session;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use routes::{PostAction, PostForm};
pub use session::{AccessToken, SESSION_COOKIE};

use crate::backend::SupabaseClient;
use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub backend: SupabaseClient,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: SupabaseClient, config: Config) -> Self {
        Self {
            backend,
            config: Arc::new(config),
        }
    }
}

/// Start the web server and run until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn serve<F>(state: AppState, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", state.config.web_host, state.config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    let static_dir = find_static_dir();
    info!(static_dir = ?static_dir, "Serving static files");

    Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. ./static (development)
/// 2. /usr/share/post-desk/static (installed)
/// 3. Falls back to ./static
fn find_static_dir() -> PathBuf {
    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/post-desk/static"),
    ];

    for path in &candidates {
        if path.is_dir() {
            return path.clone();
        }
    }

    PathBuf::from("./static")
}
