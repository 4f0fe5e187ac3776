//! HTTP surface of the conversion service

pub mod error;
pub mod handlers;

use crate::core::rate::RateProvider;
use anyhow::{Context, Result};
use axum::Router;
use axum::routing::post;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

pub const CONVERT_PATH: &str = "/convertamoeda";

#[derive(Clone)]
pub struct AppState {
    pub rates: Arc<dyn RateProvider>,
    /// Advertised in `Cache-Control` when the rate cache is enabled.
    pub cache_max_age: Option<Duration>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            CONVERT_PATH,
            post(handlers::convert).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}

/// Serves requests on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Listening on http://{addr}{CONVERT_PATH}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}
