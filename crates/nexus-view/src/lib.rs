//! Nexus Miners presentation layer.
//!
//! This crate is the display-free half of the Nexus Miners client: it turns
//! authoritative game snapshots into a platform-neutral vector scene and
//! turns clicks on that scene back into domain action requests. The actual
//! transport and draw targets live elsewhere; everything here is testable
//! without a server or a display.
//!
//! # Modules
//!
//! - [`hex`]: axial coordinate system, pixel projection, canonical edge keys
//! - [`state`]: snapshot data model and the single-writer state store
//! - [`scene`]: full-rebuild board renderer producing a scene description
//! - [`panel`]: player list projection into positional UI cards
//! - [`input`]: click-to-action mapping via render-time edge metadata
//! - [`svg`]: adapter from scene description to SVG draw output

pub mod hex;
pub mod input;
pub mod panel;
pub mod scene;
pub mod state;
pub mod svg;

// Re-export commonly used types
pub use hex::{corners, EdgeKey, HexCoord, Point, DIRECTIONS};
pub use input::{map_click, ActionRequest};
pub use panel::{PanelLayout, PanelRenderer, PlayerCard};
pub use scene::{BoardRenderer, Scene, SceneNode, Viewport};
pub use state::{
    Board, ClientPhase, Conduit, GameState, HexCell, LobbyPlayer, NoticeToken, Player, PlayerId,
    ResourceKind, StateStore, NOTICE_DURATION,
};
