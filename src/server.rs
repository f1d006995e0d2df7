use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, error, spotify::SpotifyClient, success, throttle::Throttle};

/// Shared state for all endpoint handlers: the authenticated upstream
/// client and the process-wide call throttle.
pub struct AppState {
    pub spotify: SpotifyClient,
    pub throttle: Throttle,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/playlist", get(api::playlist))
        .route("/album", get(api::album))
        .layer(Extension(state))
}

pub async fn start_api_server(addr: &str, state: Arc<AppState>) {
    let app = router(state);

    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    success!("Listening on {}", addr);
    axum::serve(listener, app).await.unwrap();
}
