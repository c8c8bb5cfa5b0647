//! Player panel projection.
//!
//! Maps the snapshot's ordered player list onto positional UI cards. The
//! first two players go to the left column, everyone else to the right; the
//! bucketing rule is fixed, not configurable.

use crate::state::{GameState, PlayerId};
use serde::{Deserialize, Serialize};

/// One player's UI card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub id: PlayerId,
    pub name: String,
    /// Color swatch (CSS color string from the server)
    pub color: String,
    pub action_points: u32,
    pub controlled_resources: u32,
    /// Set when the card belongs to the local client
    pub is_you: bool,
    /// Set for the player whose turn it is
    pub is_active: bool,
}

/// The assembled panel for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub left: Vec<PlayerCard>,
    pub right: Vec<PlayerCard>,
    /// Whether the end-turn control is offered
    pub end_turn_enabled: bool,
    /// Terminal banner once the game is over
    pub banner: Option<String>,
}

/// Builds the player panel from a snapshot. Stateless, like the board
/// renderer.
pub struct PanelRenderer;

impl PanelRenderer {
    pub fn render(state: &GameState, my_id: Option<&str>) -> PanelLayout {
        let cards: Vec<PlayerCard> = state
            .players
            .iter()
            .map(|p| PlayerCard {
                id: p.id.clone(),
                name: p.name.clone(),
                color: p.color.clone(),
                action_points: p.action_points,
                controlled_resources: p.controlled_resources,
                is_you: my_id == Some(p.id.as_str()),
                is_active: p.id == state.current_player_id,
            })
            .collect();

        let mut left = cards;
        let right = left.split_off(left.len().min(2));

        let my_turn = my_id == Some(state.current_player_id.as_str());
        let banner = state.game_over.then(|| match &state.winner {
            Some(winner) => format!("Game Over! {winner} wins!"),
            None => "Game Over!".to_string(),
        });

        PanelLayout {
            left,
            right,
            end_turn_enabled: my_turn && !state.game_over,
            banner,
        }
    }
}
