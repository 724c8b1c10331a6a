pub mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::config::WebConfig;
use crate::utils::error::Result;

pub use page::{render_index, PageUrls};

#[derive(Clone)]
struct AppState {
    urls: Arc<PageUrls>,
}

impl From<&WebConfig> for PageUrls {
    fn from(config: &WebConfig) -> Self {
        Self {
            api_gateway_url: config.api_gateway_url.clone(),
            contact_api_url: config.contact_api_url.clone(),
        }
    }
}

pub fn router(urls: PageUrls) -> Router {
    let state = AppState {
        urls: Arc::new(urls),
    };

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .with_state(state)
}

async fn handle_index(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_index(&state.urls))
}

async fn handle_health() -> &'static str {
    "ok"
}

/// Serves the page until Ctrl-C.
pub async fn serve(bind_address: SocketAddr, urls: PageUrls) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    tracing::info!("🌐 Serving contact page on http://{}", listener.local_addr()?);

    axum::serve(listener, router(urls))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web renderer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
