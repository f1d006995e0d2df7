//! Pagination walker and track-item normalization.
//!
//! Drives cursor-based pagination over one track listing (a playlist or an
//! album), feeding every raw item through the normalizer and accumulating
//! the results in page-then-in-page order. The walker knows nothing about
//! HTTP: it is handed an already-authenticated [`PageFetcher`] capability
//! and a [`Throttle`], and it performs no error translation of its own.

use std::future::Future;

use crate::{
    errors::FetchError,
    throttle::Throttle,
    types::{PlaylistItem, TrackObject, TrackPage, TrackRecord},
};

/// Discriminator selecting which page shape and page size rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Playlist,
    Album,
}

impl ListingKind {
    /// Upstream-imposed page size maximum for this listing kind. Not
    /// tunable by callers.
    pub const fn page_limit(self) -> u32 {
        match self {
            ListingKind::Playlist => 100,
            ListingKind::Album => 50,
        }
    }

    /// Capitalized noun used in client-facing error messages.
    pub const fn label(self) -> &'static str {
        match self {
            ListingKind::Playlist => "Playlist",
            ListingKind::Album => "Album",
        }
    }
}

/// A single page fetch: either the first page of a listing or the page
/// behind a continuation URL reported by the previous one.
#[derive(Debug, Clone, Copy)]
pub enum PageRequest<'a> {
    First { id: &'a str },
    Next { url: &'a str },
}

/// The authenticated "fetch one page" capability the walker consumes.
///
/// Implementations own authentication and transport; the walker only
/// sequences calls and accumulates items.
pub trait PageFetcher {
    fn fetch_page(
        &self,
        kind: ListingKind,
        request: PageRequest<'_>,
    ) -> impl Future<Output = Result<TrackPage, FetchError>> + Send;
}

/// One raw upstream item. Playlist pages wrap the track one level deeper
/// than album pages; this is a fixed upstream divergence, dispatched on the
/// listing kind rather than sniffed from the shape.
#[derive(Debug, Clone, Copy)]
pub enum RawItem<'a> {
    Playlist(&'a PlaylistItem),
    Album(&'a TrackObject),
}

/// Maps one raw item onto a `{title, artist}` record.
///
/// Playlist entries whose track is null (deleted or unavailable upstream)
/// yield `None` and are skipped by the walker; album entries always carry a
/// track. The artist field is the comma-joined artist names in upstream
/// order, or the empty string when the track lists none.
pub fn normalize(item: RawItem<'_>) -> Option<TrackRecord> {
    let track = match item {
        RawItem::Playlist(item) => item.track.as_ref()?,
        RawItem::Album(track) => track,
    };

    Some(TrackRecord {
        title: track.name.clone(),
        artist: track
            .artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// The continuation URL of a page, if the listing has more pages.
pub fn page_next_url(page: &TrackPage) -> Option<&str> {
    match page {
        TrackPage::Playlist(page) => page.next.as_deref(),
        TrackPage::Album(page) => page.next.as_deref(),
    }
}

fn collect_page_records(page: &TrackPage, out: &mut Vec<TrackRecord>) {
    match page {
        TrackPage::Playlist(page) => out.extend(
            page.items
                .iter()
                .filter_map(|item| normalize(RawItem::Playlist(item))),
        ),
        TrackPage::Album(page) => out.extend(
            page.items
                .iter()
                .filter_map(|track| normalize(RawItem::Album(track))),
        ),
    }
}

/// Walks all pages of one listing and returns the flattened track records.
///
/// Every page fetch goes through the throttle. Only an absent continuation
/// URL ends the walk; a page with zero items but a continuation URL still
/// continues. Fetch failures propagate unmodified to the caller, which is
/// expected to classify them once at the endpoint boundary.
pub async fn collect_tracks<F: PageFetcher>(
    fetcher: &F,
    throttle: &Throttle,
    kind: ListingKind,
    id: &str,
) -> Result<Vec<TrackRecord>, FetchError> {
    let mut tracks: Vec<TrackRecord> = Vec::new();

    let mut page = throttle
        .run(fetcher.fetch_page(kind, PageRequest::First { id }))
        .await?;

    loop {
        collect_page_records(&page, &mut tracks);

        let Some(next) = page_next_url(&page).map(str::to_string) else {
            break;
        };
        page = throttle
            .run(fetcher.fetch_page(kind, PageRequest::Next { url: &next }))
            .await?;
    }

    Ok(tracks)
}
