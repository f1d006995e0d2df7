//! # API Module
//!
//! This module provides the HTTP endpoints of the track listing proxy. It
//! is the outermost layer of the service: query parameters come in, the
//! page walker runs against the Spotify client, and either a flattened
//! track listing or a classified error goes out.
//!
//! ## Endpoints
//!
//! ### Track Listings
//!
//! - [`playlist`] - `GET /playlist?playlist_id=<id>` returns every track of
//!   a playlist as `{"tracks": [{"title", "artist"}, ...]}`, following all
//!   pages of the upstream listing.
//! - [`album`] - `GET /album?album_id=<id>` returns the same shape for an
//!   album's track listing.
//!
//! ### Monitoring
//!
//! - [`health`] - Provides a health check endpoint that returns application
//!   status and version information for monitoring systems.
//!
//! ## Error Contract
//!
//! Failures are translated exactly once, here at the boundary, via
//! [`crate::errors::ErrorResponse::classify`]:
//!
//! - `404` - the requested playlist or album does not exist
//! - `429` - the upstream rate limit was hit; the body names the retry delay
//! - `500` - any other upstream or internal failure, deliberately opaque
//! - `400` - the required query parameter was missing
//!
//! Every error body carries the shape `{"detail": "<message>"}`.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Handlers receive the shared application state (Spotify client plus the
//! process-wide throttle) through an `Extension` layer and stay free of any
//! pagination or classification logic of their own.

mod album;
mod health;
mod playlist;

pub use album::album;
pub use health::health;
pub use playlist::playlist;
