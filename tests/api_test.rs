use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Extension, Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use sptracks::Res;
use sptracks::management::TokenManager;
use sptracks::server::{self, AppState};
use sptracks::spotify::SpotifyClient;
use sptracks::throttle::Throttle;

async fn token_endpoint() -> Json<Value> {
    Json(json!({
        "access_token": "test-token",
        "token_type": "Bearer",
        "expires_in": 3600
    }))
}

// Scripted playlist listings: "multi" serves two pages with one deleted
// entry, "limited" simulates upstream throttling, everything else is absent.
async fn playlist_tracks(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Extension(base): Extension<Arc<String>>,
) -> Response {
    match id.as_str() {
        "multi" if params.contains_key("offset") => Json(json!({
            "items": [
                { "track": { "name": "Closing Time", "artists": [{ "name": "Carol" }] } }
            ],
            "next": null
        }))
        .into_response(),
        "multi" => Json(json!({
            "items": [
                { "track": { "name": "Opening Act", "artists": [{ "name": "Alice" }, { "name": "Bob" }] } },
                { "track": null }
            ],
            "next": format!("{}/playlists/multi/tracks?offset=100&limit=100", base)
        }))
        .into_response(),
        "limited" => {
            let mut headers = HeaderMap::new();
            headers.insert("Retry-After", "5".parse().unwrap());
            (
                StatusCode::TOO_MANY_REQUESTS,
                headers,
                Json(json!({ "error": { "status": 429, "message": "rate limited" } })),
            )
                .into_response()
        }
        "limited-quietly" => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": { "status": 429, "message": "rate limited" } })),
        )
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "status": 404, "message": "non existing id" } })),
        )
            .into_response(),
    }
}

// Scripted album listings: "known" serves two pages, "broken" fails with a
// bad gateway, everything else is absent.
async fn album_tracks(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Extension(base): Extension<Arc<String>>,
) -> Response {
    match id.as_str() {
        "known" if params.contains_key("offset") => Json(json!({
            "items": [
                { "name": "Finale", "artists": [{ "name": "Trio" }] }
            ],
            "next": null
        }))
        .into_response(),
        "known" => Json(json!({
            "items": [
                { "name": "Overture", "artists": [] },
                { "name": "Interlude", "artists": [{ "name": "Duo" }] }
            ],
            "next": format!("{}/albums/known/tracks?offset=50&limit=50", base)
        }))
        .into_response(),
        "broken" => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": { "status": 502, "message": "bad gateway" } })),
        )
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "status": 404, "message": "non existing id" } })),
        )
            .into_response(),
    }
}

// Serves a scripted Spotify stand-in on an ephemeral port
async fn spawn_upstream() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base = Arc::new(format!("http://{}", addr));

    let app = Router::new()
        .route("/api/token", post(token_endpoint))
        .route("/playlists/{id}/tracks", get(playlist_tracks))
        .route("/albums/{id}/tracks", get(album_tracks))
        .layer(Extension(base));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

// Serves the proxy under test, pointed at the scripted upstream
async fn spawn_app(upstream: SocketAddr) -> SocketAddr {
    let base = format!("http://{}", upstream);
    let tokens = TokenManager::new(
        "test-client".to_string(),
        "test-secret".to_string(),
        format!("{}/api/token", base),
    );
    let state = Arc::new(AppState {
        spotify: SpotifyClient::new(base, tokens),
        throttle: Throttle::new(Duration::ZERO),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = server::router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

async fn get_json(url: String) -> Res<(StatusCode, Value)> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    let body = response.json::<Value>().await?;
    Ok((status, body))
}

#[tokio::test]
async fn test_playlist_endpoint_flattens_paginated_listing() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(upstream).await;

    let (status, body) = get_json(format!("http://{}/playlist?playlist_id=multi", app))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    // Two pages flattened in order, the deleted entry skipped
    assert_eq!(
        body,
        json!({
            "tracks": [
                { "title": "Opening Act", "artist": "Alice, Bob" },
                { "title": "Closing Time", "artist": "Carol" }
            ]
        })
    );
}

#[tokio::test]
async fn test_album_endpoint_flattens_paginated_listing() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(upstream).await;

    let (status, body) = get_json(format!("http://{}/album?album_id=known", app))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "tracks": [
                { "title": "Overture", "artist": "" },
                { "title": "Interlude", "artist": "Duo" },
                { "title": "Finale", "artist": "Trio" }
            ]
        })
    );
}

#[tokio::test]
async fn test_unknown_playlist_maps_to_not_found() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(upstream).await;

    let (status, body) = get_json(format!("http://{}/playlist?playlist_id=missing", app))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Playlist not found" }));
}

#[tokio::test]
async fn test_unknown_album_maps_to_not_found() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(upstream).await;

    let (status, body) = get_json(format!("http://{}/album?album_id=missing", app))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Album not found" }));
}

#[tokio::test]
async fn test_rate_limit_reports_upstream_retry_delay() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(upstream).await;

    let (status, body) = get_json(format!("http://{}/playlist?playlist_id=limited", app))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, json!({ "detail": "Rate limit hit. Retry after 5 seconds." }));
}

#[tokio::test]
async fn test_rate_limit_without_header_defaults_to_one_second() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(upstream).await;

    let (status, body) = get_json(format!(
        "http://{}/playlist?playlist_id=limited-quietly",
        app
    ))
    .await
    .unwrap();

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, json!({ "detail": "Rate limit hit. Retry after 1 seconds." }));
}

#[tokio::test]
async fn test_upstream_failure_stays_opaque() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(upstream).await;

    let (status, body) = get_json(format!("http://{}/album?album_id=broken", app))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Album API error" }));
}

#[tokio::test]
async fn test_missing_query_parameter_is_rejected() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(upstream).await;

    let (status, body) = get_json(format!("http://{}/playlist", app)).await.unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("playlist_id"));
}

#[tokio::test]
async fn test_health_reports_ok() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(upstream).await;

    let (status, body) = get_json(format!("http://{}/health", app)).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
