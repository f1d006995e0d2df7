use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;

use crate::{
    config,
    errors::FetchError,
    management::TokenManager,
    pager::{ListingKind, PageFetcher, PageRequest},
    types::{AlbumTracksPage, PlaylistTracksPage, TrackPage},
};

/// Authenticated Spotify Web API client serving one page per call.
///
/// Holds the HTTP client, the API base URL, and the shared token manager.
/// The base URL is injectable so tests can point the client at a mock
/// upstream.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(api_url: String, tokens: TokenManager) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url,
            tokens: Mutex::new(tokens),
        }
    }

    /// Creates a client from the environment-derived configuration.
    pub fn from_env() -> Self {
        Self::new(config::spotify_apiurl(), TokenManager::from_env())
    }

    fn first_page_url(&self, kind: ListingKind, id: &str) -> String {
        match kind {
            ListingKind::Playlist => format!(
                "{uri}/playlists/{id}/tracks?limit={limit}",
                uri = self.api_url,
                id = id,
                limit = kind.page_limit()
            ),
            ListingKind::Album => format!(
                "{uri}/albums/{id}/tracks?limit={limit}",
                uri = self.api_url,
                id = id,
                limit = kind.page_limit()
            ),
        }
    }
}

impl PageFetcher for SpotifyClient {
    /// Fetches one page of a track listing from the Spotify Web API.
    ///
    /// The first page is addressed by listing ID with the kind's fixed page
    /// limit; subsequent pages follow the `next` URL reported by the
    /// previous page verbatim. Upstream failure statuses are mapped onto
    /// [`FetchError`] here and nowhere else:
    ///
    /// - 429 reads the `Retry-After` header (default 1 second when absent)
    /// - 404 marks the listing as missing
    /// - any other non-success status is an opaque upstream API failure
    ///
    /// # Rate Limiting
    ///
    /// This function performs no waiting or retrying of its own; callers
    /// route every invocation through the process-wide throttle.
    async fn fetch_page(
        &self,
        kind: ListingKind,
        request: PageRequest<'_>,
    ) -> Result<TrackPage, FetchError> {
        let api_url = match request {
            PageRequest::First { id } => self.first_page_url(kind, id),
            PageRequest::Next { url } => url.to_string(),
        };

        let token = self.tokens.lock().await.get_valid_token().await?;
        let response = self.http.get(&api_url).bearer_auth(token).send().await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            // check for retry-after header
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(FetchError::RateLimited { retry_after });
        }
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Api(status));
        }

        match kind {
            ListingKind::Playlist => Ok(TrackPage::Playlist(
                response.json::<PlaylistTracksPage>().await?,
            )),
            ListingKind::Album => Ok(TrackPage::Album(response.json::<AlbumTracksPage>().await?)),
        }
    }
}
