use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension, Json,
    extract::Query,
    response::{IntoResponse, Response},
};

use crate::{
    errors::ErrorResponse,
    pager::{ListingKind, collect_tracks},
    server::AppState,
    types::TracksResponse,
    warning,
};

pub async fn playlist(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let Some(playlist_id) = params.get("playlist_id") else {
        return ErrorResponse::missing_param("playlist_id").into_response();
    };

    match collect_tracks(
        &state.spotify,
        &state.throttle,
        ListingKind::Playlist,
        playlist_id,
    )
    .await
    {
        Ok(tracks) => Json(TracksResponse { tracks }).into_response(),
        Err(e) => {
            warning!("Playlist {} fetch failed: {}", playlist_id, e);
            ErrorResponse::classify(&e, ListingKind::Playlist).into_response()
        }
    }
}
