//! Configuration management for the track listing proxy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! server bind address, and the upstream endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (endpoint URLs and bind address only)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file.
///
/// Looks for a `.env` file in the working directory first, then falls back
/// to a platform-specific user-level file under `sptracks/.env` in the local
/// data directory, creating the directory structure for the latter if it
/// does not exist. Missing files are not an error; the service can run from
/// plain environment variables alone.
///
/// # Directory Structure
///
/// The user-level fallback is looked up in:
/// - Linux: `~/.local/share/sptracks/.env`
/// - macOS: `~/Library/Application Support/sptracks/.env`
/// - Windows: `%LOCALAPPDATA%/sptracks/.env`
///
/// # Returns
///
/// Returns `Ok(())` once loading has been attempted, or an error string if
/// the user-level directory cannot be created.
///
/// # Example
///
/// ```
/// use sptracks::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    if dotenv::dotenv().is_ok() {
        return Ok(());
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sptracks/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).ok();
    Ok(())
}

/// Checks that the required Spotify credentials are present.
///
/// The proxy cannot authenticate against the upstream token endpoint without
/// a client ID and secret, so startup verifies both before binding the
/// listener.
///
/// # Returns
///
/// Returns `Ok(())` when both `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`
/// are set, or an error string naming the missing variables.
pub fn require_credentials() -> Result<(), String> {
    if env::var("SPOTIFY_CLIENT_ID").is_err() || env::var("SPOTIFY_CLIENT_SECRET").is_err() {
        return Err("SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET must be set.".to_string());
    }
    Ok(())
}

/// Returns the address the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, falling back to
/// `127.0.0.1:8080` when unset.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set. Use
/// [`require_credentials`] at startup to fail with a readable message
/// instead.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable which contains
/// the client secret obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to the
/// official `https://api.spotify.com/v1` endpoint. Overriding the base URL
/// is primarily useful for pointing the client at a mock upstream.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify token endpoint URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, falling back
/// to the official `https://accounts.spotify.com/api/token` endpoint. Used
/// by the client-credentials grant when minting access tokens.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
