//! Click-to-action mapping.
//!
//! Edge primitives carry their endpoint coordinates from render time, so a
//! click resolves to a domain action by reading that metadata straight off
//! the node. No geometric hit-testing happens here, and clicks on anything
//! other than an edge primitive are a no-op.

use crate::hex::HexCoord;
use crate::scene::SceneNode;
use serde::{Deserialize, Serialize};

/// An action request sent to the authority.
///
/// Discriminated by `type` on the wire; new action kinds extend this enum
/// with further variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionRequest {
    /// `{"type": "end_turn"}`
    EndTurn,
    /// `{"type": "place_conduit", "hex1": [q, r], "hex2": [q, r]}`
    PlaceConduit { hex1: HexCoord, hex2: HexCoord },
}

/// Map a clicked scene node to an action request.
///
/// Only [`SceneNode::EdgeHit`] nodes are interpreted; their embedded
/// endpoint pair becomes a conduit placement request.
pub fn map_click(node: &SceneNode) -> Option<ActionRequest> {
    match node {
        SceneNode::EdgeHit { hex1, hex2, .. } => Some(ActionRequest::PlaceConduit {
            hex1: *hex1,
            hex2: *hex2,
        }),
        _ => None,
    }
}
