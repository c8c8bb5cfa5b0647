//! The event bridge: WebSocket pump between the server and the state store.
//!
//! Inbound frames become [`ServerEvent`]s applied to the single
//! [`StateStore`]; outbound [`ClientIntent`]s flow through an unbounded
//! channel into the socket sink. All state mutation happens in
//! [`apply`], which is pure over the store and unit-testable without a
//! socket.

use crate::protocol::{ClientIntent, ServerEvent};
use futures_util::{SinkExt, StreamExt};
use nexus_view::{
    svg, ActionRequest, BoardRenderer, HexCoord, NoticeToken, PanelRenderer, StateStore, Viewport,
    NOTICE_DURATION,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::AsyncBufReadExt;
use tokio::sync::{mpsc, Mutex};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}

/// Bridge configuration, resolved from the environment in `main`.
pub struct BridgeConfig {
    pub url: String,
    pub name: String,
    pub viewport: Viewport,
    /// Where the rendered board SVG is written after each snapshot
    pub svg_path: PathBuf,
}

/// Apply one inbound event to the store.
///
/// Returns the notice token when the event raised a transient notice; the
/// caller owns scheduling its expiry after [`NOTICE_DURATION`].
pub fn apply(store: &mut StateStore, event: ServerEvent) -> Option<NoticeToken> {
    match event {
        ServerEvent::Welcome { id } => {
            info!("Connected with identity {}", id);
            store.set_identity(id);
            None
        }
        ServerEvent::LobbyUpdate(roster) => {
            store.set_roster(roster);
            None
        }
        ServerEvent::GameStart(state) | ServerEvent::GameUpdate(state) => {
            store.replace(state);
            None
        }
        ServerEvent::ActionError { message } => Some(store.show_transient_notice(message)),
    }
}

/// Parse a console command into an outbound intent.
///
/// Supported: `ready`, `end_turn`, `place q,r q,r`. The console stands in
/// for click wiring when no display host is attached; a DOM host feeds
/// [`nexus_view::map_click`] results into the same channel.
pub fn parse_command(line: &str) -> Option<ClientIntent> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "ready" => Some(ClientIntent::Ready),
        "end_turn" => Some(ClientIntent::Action(ActionRequest::EndTurn)),
        "place" => {
            let hex1 = parse_coord(parts.next()?)?;
            let hex2 = parse_coord(parts.next()?)?;
            Some(ClientIntent::Action(ActionRequest::PlaceConduit {
                hex1,
                hex2,
            }))
        }
        _ => None,
    }
}

fn parse_coord(text: &str) -> Option<HexCoord> {
    let (q, r) = text.split_once(',')?;
    Some(HexCoord::new(
        q.trim().parse().ok()?,
        r.trim().parse().ok()?,
    ))
}

/// Connect and run the bridge until the server closes the connection.
///
/// A dropped session is unrecoverable at this layer; there is no
/// reconnection or resume.
pub async fn run(config: BridgeConfig) -> Result<(), BridgeError> {
    let (ws_stream, _) = connect_async(config.url.as_str()).await?;
    info!("Connected to {}", config.url);

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ClientIntent>();

    // Forward outbound intents into the socket.
    let send_task = tokio::spawn(async move {
        while let Some(intent) = rx.recv().await {
            if let Ok(text) = serde_json::to_string(&intent) {
                if ws_sender.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
        }
    });

    // Console commands feed the same outbound channel a UI host would.
    let command_tx = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Some(intent) => {
                    if command_tx.send(intent).is_err() {
                        break;
                    }
                }
                None => warn!("Unknown command: {}", line.trim()),
            }
        }
    });

    let _ = tx.send(ClientIntent::Join {
        name: config.name.clone(),
    });

    let store = Arc::new(Mutex::new(StateStore::new()));

    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => match serde_json::from_str::<ServerEvent>(&text) {
                Ok(event) => handle_event(event, &store, &config).await,
                Err(e) => warn!("Ignoring malformed frame: {}", e),
            },
            Ok(Message::Close(_)) => {
                info!("Server closed the connection");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                send_task.abort();
                input_task.abort();
                return Err(e.into());
            }
        }
    }

    send_task.abort();
    input_task.abort();
    Ok(())
}

/// Apply an event, arm the notice timer if one was raised, and refresh the
/// rendered view.
async fn handle_event(event: ServerEvent, store: &Arc<Mutex<StateStore>>, config: &BridgeConfig) {
    let token = {
        let mut guard = store.lock().await;
        apply(&mut guard, event)
    };

    // The token makes this timer cancel-safe: a replace or newer notice
    // in the meantime turns the expiry into a no-op.
    if let Some(token) = token {
        let store = Arc::clone(store);
        tokio::spawn(async move {
            tokio::time::sleep(NOTICE_DURATION).await;
            store.lock().await.expire_notice(token);
        });
    }

    let guard = store.lock().await;
    if let Some(message) = guard.display_message() {
        info!("{}", message);
    }
    debug!("Phase: {:?}", guard.phase());

    if let Some(state) = guard.state() {
        let scene = BoardRenderer::render(state, config.viewport);
        if let Err(e) = std::fs::write(&config.svg_path, svg::render(&scene)) {
            warn!("Could not write {}: {}", config.svg_path.display(), e);
        }

        let panel = PanelRenderer::render(state, guard.my_id());
        for card in panel.left.iter().chain(&panel.right) {
            debug!(
                "{}{}: AP {} / resources {}{}",
                card.name,
                if card.is_you { " (you)" } else { "" },
                card.action_points,
                card.controlled_resources,
                if card.is_active { " <- active" } else { "" },
            );
        }
        if let Some(banner) = &panel.banner {
            info!("{}", banner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_view::ClientPhase;

    #[test]
    fn rejection_events_raise_a_notice() {
        let mut store = StateStore::new();
        assert!(apply(
            &mut store,
            ServerEvent::Welcome {
                id: "sid-1".into()
            }
        )
        .is_none());
        assert_eq!(store.phase(), ClientPhase::Lobby { ready: false });

        let token = apply(
            &mut store,
            ServerEvent::ActionError {
                message: "Not your turn.".into(),
            },
        )
        .expect("rejections raise notices");
        assert_eq!(store.display_message(), Some("Not your turn."));

        store.expire_notice(token);
        assert_eq!(store.display_message(), None);
    }

    #[test]
    fn console_commands_parse() {
        assert!(matches!(
            parse_command("ready"),
            Some(ClientIntent::Ready)
        ));
        assert!(matches!(
            parse_command("end_turn"),
            Some(ClientIntent::Action(ActionRequest::EndTurn))
        ));
        assert!(matches!(
            parse_command("place 0,0 1,0"),
            Some(ClientIntent::Action(ActionRequest::PlaceConduit { hex1, hex2 }))
                if hex1 == HexCoord::new(0, 0) && hex2 == HexCoord::new(1, 0)
        ));
        assert!(parse_command("place 0,0").is_none());
        assert!(parse_command("dance").is_none());
    }
}
