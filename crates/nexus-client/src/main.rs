//! Nexus Miners terminal client.

use nexus_view::Viewport;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bridge;
mod protocol;

use bridge::BridgeConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let url = std::env::var("NEXUS_SERVER").unwrap_or_else(|_| "ws://127.0.0.1:8080".into());
    let name = std::env::var("NEXUS_NAME").unwrap_or_else(|_| "Anonymous".into());
    let viewport = std::env::var("NEXUS_VIEWPORT")
        .ok()
        .and_then(|v| parse_viewport(&v))
        .unwrap_or(Viewport::new(900.0, 700.0));
    let svg_path = std::env::var("NEXUS_BOARD_SVG")
        .unwrap_or_else(|_| "board.svg".into())
        .into();

    info!("Joining {} as {}", url, name);

    bridge::run(BridgeConfig {
        url,
        name,
        viewport,
        svg_path,
    })
    .await?;

    Ok(())
}

/// Parse a `WIDTHxHEIGHT` viewport spec
fn parse_viewport(spec: &str) -> Option<Viewport> {
    let (w, h) = spec.split_once('x')?;
    Some(Viewport::new(w.trim().parse().ok()?, h.trim().parse().ok()?))
}
