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

pub async fn album(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let Some(album_id) = params.get("album_id") else {
        return ErrorResponse::missing_param("album_id").into_response();
    };

    match collect_tracks(&state.spotify, &state.throttle, ListingKind::Album, album_id).await {
        Ok(tracks) => Json(TracksResponse { tracks }).into_response(),
        Err(e) => {
            warning!("Album {} fetch failed: {}", album_id, e);
            ErrorResponse::classify(&e, ListingKind::Album).into_response()
        }
    }
}
