//! # Spotify Integration Module
//!
//! This module provides the upstream side of the proxy: fetching pages of
//! playlist and album track listings from the Spotify Web API. It is the
//! only place in the crate that speaks HTTP to Spotify, handling bearer
//! authentication, page-size limits, continuation URLs, and the translation
//! of upstream failure statuses into the crate's error taxonomy.
//!
//! ## Overview
//!
//! [`SpotifyClient`] implements the [`crate::pager::PageFetcher`] capability
//! consumed by the page walker. A fetch goes through the following layers:
//!
//! ```text
//! Endpoint handlers (api)
//!          ↓
//! Page walker (pager)
//!          ↓
//! Spotify Integration Layer
//!     ├── Token acquisition (management::TokenManager)
//!     └── Page fetching (SpotifyClient)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /playlists/{id}/tracks` - playlist track listing pages (limit 100)
//! - `GET /albums/{id}/tracks` - album track listing pages (limit 50)
//!
//! Continuation URLs reported in a page's `next` field are followed
//! verbatim; Spotify encodes offset and limit into them.
//!
//! ## Error Handling
//!
//! Upstream responses are translated into [`crate::errors::FetchError`]
//! before they leave this module:
//!
//! - **429 Too Many Requests** - becomes `RateLimited`, carrying the
//!   `Retry-After` header value (default 1 when absent or malformed)
//! - **404 Not Found** - becomes `NotFound`
//! - **Any other non-success status** - becomes `Api` with the status
//! - **Network or decode failures** - become `Transport`
//!
//! No retries happen here: rate-limit responses surface to the caller
//! instead of being silently retried, and outbound call cadence is handled
//! by [`crate::throttle::Throttle`] above this layer.
//!
//! ## Authentication
//!
//! Requests carry a bearer token minted through the client-credentials
//! grant by [`crate::management::TokenManager`]; the token is refreshed
//! transparently when close to expiry. No user-level OAuth flows are
//! involved.

mod tracks;

pub use tracks::SpotifyClient;
