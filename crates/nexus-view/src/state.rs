//! Authoritative snapshot model and the client-side state store.
//!
//! Every inbound game message carries a complete [`GameState`]; the client
//! never merges or partially mutates it. [`StateStore`] is the single owner
//! of the latest snapshot plus an ephemeral notice raised by action
//! rejections.

use crate::hex::{EdgeKey, HexCoord};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Server-assigned player identity (opaque session id)
pub type PlayerId = String;

/// How long a transient notice stays on screen before reverting to the
/// snapshot's own message.
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Resource kinds that can sit on a hex.
///
/// `Nexus` is the central objective hex, not a minable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    Iron,
    Carbon,
    Power,
    Nexus,
}

impl ResourceKind {
    /// On-board label for this resource
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Iron => "IRON",
            ResourceKind::Carbon => "CARBON",
            ResourceKind::Power => "POWER",
            ResourceKind::Nexus => "NEXUS",
        }
    }
}

/// A single cell of the board as the server describes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexCell {
    pub q: i32,
    pub r: i32,
    /// Resource tag, if any
    pub resource: Option<ResourceKind>,
    /// Owning player when this cell is a base
    pub is_base_for: Option<PlayerId>,
}

impl HexCell {
    pub fn coord(&self) -> HexCoord {
        HexCoord::new(self.q, self.r)
    }
}

/// A player's claim on one edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conduit {
    pub hex1: HexCoord,
    pub hex2: HexCoord,
    pub player_id: PlayerId,
    pub reinforced: bool,
}

impl Conduit {
    /// Canonical key of the claimed edge
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.hex1, self.hex2)
    }
}

/// Per-player state as carried in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Display color assigned by the server (CSS color string)
    pub color: String,
    pub action_points: u32,
    pub controlled_resources: u32,
    /// The player's base cell (None only before placement)
    #[serde(default)]
    pub base_hex: Option<HexCoord>,
}

/// A player as listed in the lobby roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LobbyPlayer {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    pub is_ready: bool,
}

/// The hex board: extent, cells, and edge claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Grid extent from the center to any edge
    pub radius: u32,
    pub hexes: Vec<HexCell>,
    pub conduits: Vec<Conduit>,
}

impl Board {
    /// Whether a coordinate lies on this board
    pub fn contains(&self, coord: HexCoord) -> bool {
        self.hexes.iter().any(|cell| cell.coord() == coord)
    }

    /// Find the conduit claiming an edge, if any.
    ///
    /// Linear scan; at most one conduit exists per edge and board sizes are
    /// bounded by radius^2.
    pub fn conduit_at(&self, key: EdgeKey) -> Option<&Conduit> {
        self.conduits.iter().find(|c| c.key() == key)
    }
}

/// A complete authoritative snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Ordered list; the order drives panel placement
    pub players: Vec<Player>,
    #[serde(default)]
    pub turn_number: u32,
    pub current_player_id: PlayerId,
    pub message: String,
    pub game_over: bool,
    /// Winner display name, present once `game_over` is set
    pub winner: Option<String>,
}

impl GameState {
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Display color of a player, if the id resolves
    pub fn player_color(&self, id: &str) -> Option<&str> {
        self.player(id).map(|p| p.color.as_str())
    }
}

/// Coarse client lifecycle, derived from the stored data.
///
/// Transitions are driven exclusively by inbound events; there is no stored
/// state machine that could drift from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientPhase {
    Disconnected,
    Lobby { ready: bool },
    InGame { my_turn: bool },
    GameOver { winner: Option<String> },
}

/// Handle for one raised transient notice.
///
/// An expiry carrying a stale token is ignored, so a deferred timeout can
/// never clobber a newer notice or a message from a fresher snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeToken(u64);

/// Holds the single latest known snapshot and the ephemeral notice.
///
/// No other writer may exist; all mutation goes through [`replace`],
/// [`show_transient_notice`], and the identity/roster setters.
///
/// [`replace`]: StateStore::replace
/// [`show_transient_notice`]: StateStore::show_transient_notice
#[derive(Debug, Default)]
pub struct StateStore {
    my_id: Option<PlayerId>,
    roster: Vec<LobbyPlayer>,
    state: Option<GameState>,
    notice: Option<String>,
    notice_gen: u64,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the identity assigned on connection
    pub fn set_identity(&mut self, id: PlayerId) {
        self.my_id = Some(id);
    }

    pub fn my_id(&self) -> Option<&str> {
        self.my_id.as_deref()
    }

    /// Replace the lobby roster wholesale
    pub fn set_roster(&mut self, roster: Vec<LobbyPlayer>) {
        self.roster = roster;
    }

    pub fn roster(&self) -> &[LobbyPlayer] {
        &self.roster
    }

    /// Unconditional wholesale overwrite of the stored snapshot.
    ///
    /// No merge, no validation against the previous state. Also supersedes
    /// any pending transient notice so its expiry becomes a no-op.
    pub fn replace(&mut self, new_state: GameState) {
        self.notice_gen += 1;
        self.notice = None;
        self.state = Some(new_state);
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Record an ephemeral override message without touching the snapshot.
    ///
    /// The caller schedules [`expire_notice`] with the returned token after
    /// [`NOTICE_DURATION`].
    ///
    /// [`expire_notice`]: StateStore::expire_notice
    pub fn show_transient_notice(&mut self, text: impl Into<String>) -> NoticeToken {
        self.notice_gen += 1;
        self.notice = Some(text.into());
        NoticeToken(self.notice_gen)
    }

    /// Clear the notice, unless it has already been superseded
    pub fn expire_notice(&mut self, token: NoticeToken) {
        if token.0 == self.notice_gen {
            self.notice = None;
        }
    }

    /// The message to display: the transient notice when one is live,
    /// otherwise the snapshot's own message.
    pub fn display_message(&self) -> Option<&str> {
        self.notice
            .as_deref()
            .or_else(|| self.state.as_ref().map(|s| s.message.as_str()))
    }

    /// Derive the current lifecycle phase
    pub fn phase(&self) -> ClientPhase {
        let Some(my_id) = self.my_id.as_deref() else {
            return ClientPhase::Disconnected;
        };
        match &self.state {
            Some(state) if state.game_over => ClientPhase::GameOver {
                winner: state.winner.clone(),
            },
            Some(state) => ClientPhase::InGame {
                my_turn: state.current_player_id == my_id,
            },
            None => ClientPhase::Lobby {
                ready: self
                    .roster
                    .iter()
                    .find(|p| p.id == my_id)
                    .map(|p| p.is_ready)
                    .unwrap_or(false),
            },
        }
    }
}
