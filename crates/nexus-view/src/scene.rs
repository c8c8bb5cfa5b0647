//! Full-scene reconstruction of the board from a snapshot.
//!
//! The renderer is stateless: every call rebuilds the complete scene from
//! scratch. Boards are bounded by radius^2 cells, so a full rebuild is cheap
//! and eliminates the whole class of stale-node bugs that incremental
//! diffing invites.
//!
//! The scene is a platform-neutral description; an adapter (see
//! [`crate::svg`]) turns it into actual draw calls.

use crate::hex::{corners, EdgeKey, HexCoord, Point};
use crate::state::{GameState, PlayerId, ResourceKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fraction of the grid size used for polygon fill. Hexes layer above the
/// conduit lines, so the seams left by the smaller fill are where the lines
/// stay visible.
const HEX_FILL_RATIO: f64 = 0.9;

/// Fallback color when an owner id does not resolve to a player
const UNOWNED_COLOR: &str = "#888888";

/// The drawing surface extent at render time.
///
/// A viewport is passed to every render call rather than cached, so the
/// scene always reflects the container's current size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel center of the viewport (the board origin)
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Hex size (radius in pixels) at which a board of the given radius
    /// fits the viewport in both dimensions.
    pub fn hex_size(&self, board_radius: u32) -> f64 {
        let across = (2 * board_radius + 1) as f64;
        let fit_width = self.width / (across * 3.0_f64.sqrt());
        let fit_height = self.height / (1.5 * across + 0.5);
        fit_width.min(fit_height)
    }
}

/// One element of the rendered scene.
///
/// Node order in [`Scene::nodes`] is paint order: edge primitives and
/// conduit lines come first, hex polygons and their markings afterwards so
/// base and resource markings are never occluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneNode {
    /// Clickable edge primitive. The endpoint coordinates embedded here are
    /// the identity metadata the input mapper reads back on click; no
    /// geometric hit-testing happens anywhere.
    EdgeHit {
        hex1: HexCoord,
        hex2: HexCoord,
        from: Point,
        to: Point,
    },
    /// A placed conduit, styled by its owner's color
    ConduitLine {
        from: Point,
        to: Point,
        color: String,
        reinforced: bool,
    },
    /// Filled cell polygon
    HexPolygon {
        coord: HexCoord,
        corners: [Point; 6],
    },
    /// Resource tag centered on its cell
    ResourceLabel { at: Point, resource: ResourceKind },
    /// Base marker for the owning player
    BaseMarker {
        at: Point,
        owner: PlayerId,
        color: String,
    },
}

/// A complete vector scene for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    /// All edge primitives, in paint order
    pub fn edge_hits(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes
            .iter()
            .filter(|n| matches!(n, SceneNode::EdgeHit { .. }))
    }
}

/// Builds the board scene from a snapshot. Stateless; hold no instance.
pub struct BoardRenderer;

impl BoardRenderer {
    /// Rebuild the complete scene for one snapshot.
    ///
    /// Every edge shared by two in-board neighbors is rendered exactly once,
    /// deduplicated through its [`EdgeKey`]; a conduit on that edge adds one
    /// styled line. All hex polygons, labels, and base markers follow.
    pub fn render(state: &GameState, viewport: Viewport) -> Scene {
        let size = viewport.hex_size(state.board.radius);
        let origin = viewport.center();

        let mut nodes = Vec::new();
        let mut seen: HashSet<EdgeKey> = HashSet::new();

        for cell in &state.board.hexes {
            for neighbor in cell.coord().neighbors() {
                if !state.board.contains(neighbor) {
                    continue;
                }
                let key = EdgeKey::new(cell.coord(), neighbor);
                if !seen.insert(key) {
                    continue;
                }

                let (hex1, hex2) = key.endpoints();
                let from = hex1.project(size, origin);
                let to = hex2.project(size, origin);
                nodes.push(SceneNode::EdgeHit {
                    hex1,
                    hex2,
                    from,
                    to,
                });

                if let Some(conduit) = state.board.conduit_at(key) {
                    let color = state
                        .player_color(&conduit.player_id)
                        .unwrap_or(UNOWNED_COLOR)
                        .to_string();
                    nodes.push(SceneNode::ConduitLine {
                        from,
                        to,
                        color,
                        reinforced: conduit.reinforced,
                    });
                }
            }
        }

        for cell in &state.board.hexes {
            let center = cell.coord().project(size, origin);
            nodes.push(SceneNode::HexPolygon {
                coord: cell.coord(),
                corners: corners(center, size * HEX_FILL_RATIO),
            });

            if let Some(resource) = cell.resource {
                nodes.push(SceneNode::ResourceLabel {
                    at: center,
                    resource,
                });
            }

            if let Some(owner) = &cell.is_base_for {
                let color = state
                    .player_color(owner)
                    .unwrap_or(UNOWNED_COLOR)
                    .to_string();
                nodes.push(SceneNode::BaseMarker {
                    at: center,
                    owner: owner.clone(),
                    color,
                });
            }
        }

        Scene { viewport, nodes }
    }
}
