use std::sync::Arc;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use sptracks::{
    config, error, info,
    server::{self, AppState},
    spotify::SpotifyClient,
    throttle::Throttle,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Address to bind the HTTP server to; overrides SERVER_ADDRESS
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = config::require_credentials() {
        error!("{}", e);
    }

    let state = Arc::new(AppState {
        spotify: SpotifyClient::from_env(),
        throttle: Throttle::default(),
    });

    let addr = cli.address.unwrap_or_else(config::server_addr);
    info!("Serving Spotify track listings on {}", addr);
    server::start_api_server(&addr, state).await;
}
