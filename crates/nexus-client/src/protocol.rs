//! Wire messages exchanged with the Nexus Miners server.

use nexus_view::{ActionRequest, GameState, LobbyPlayer, PlayerId};
use serde::{Deserialize, Serialize};

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Connection acknowledged; carries the assigned identity
    Welcome { id: PlayerId },

    /// Full lobby roster, replacing the previous one
    LobbyUpdate(Vec<LobbyPlayer>),

    /// The game has started; first full snapshot
    GameStart(GameState),

    /// A fresh authoritative snapshot
    GameUpdate(GameState),

    /// An action was rejected; plain-text reason only
    ActionError { message: String },
}

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientIntent {
    /// Join the waiting lobby under a display name
    Join { name: String },

    /// Toggle the ready flag
    Ready,

    /// A domain action request
    Action(ActionRequest),
}
