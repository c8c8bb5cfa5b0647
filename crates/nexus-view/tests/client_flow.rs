//! Integration tests for the presentation layer.
//!
//! These tests drive complete flows: a raw server snapshot through the
//! store, the board renderer, a click on a rendered edge, and back out as
//! an action request.

use nexus_view::*;

/// A radius-1 snapshot the way the server would send it
fn snapshot_json() -> &'static str {
    r#"{
        "board": {
            "radius": 1,
            "hexes": [
                {"q": 0, "r": 0, "resource": "NEXUS", "is_base_for": null},
                {"q": 1, "r": 0, "resource": null, "is_base_for": "sid-alice"},
                {"q": 0, "r": 1, "resource": "IRON", "is_base_for": null},
                {"q": -1, "r": 1, "resource": null, "is_base_for": null},
                {"q": -1, "r": 0, "resource": null, "is_base_for": "sid-bob"},
                {"q": 0, "r": -1, "resource": "POWER", "is_base_for": null},
                {"q": 1, "r": -1, "resource": null, "is_base_for": null}
            ],
            "conduits": [
                {"hex1": [0, 0], "hex2": [1, 0], "player_id": "sid-alice", "reinforced": false}
            ]
        },
        "players": [
            {"id": "sid-alice", "name": "Alice", "color": "hsl(0, 70%, 50%)",
             "action_points": 4, "controlled_resources": 1, "base_hex": [1, 0]},
            {"id": "sid-bob", "name": "Bob", "color": "hsl(90, 70%, 50%)",
             "action_points": 0, "controlled_resources": 0, "base_hex": [-1, 0]}
        ],
        "turn_number": 2,
        "current_player_id": "sid-alice",
        "message": "Your turn",
        "game_over": false,
        "winner": null
    }"#
}

fn snapshot() -> GameState {
    serde_json::from_str(snapshot_json()).expect("snapshot should parse")
}

#[test]
fn snapshot_to_scene_to_click_to_action() {
    let mut store = StateStore::new();
    store.set_identity("sid-alice".into());
    store.replace(snapshot());

    let state = store.state().expect("snapshot stored");
    let scene = BoardRenderer::render(state, Viewport::new(800.0, 600.0));

    // Click the first rendered edge primitive.
    let clicked = scene
        .edge_hits()
        .next()
        .expect("a radius-1 board renders edges");
    let action = map_click(clicked).expect("edge clicks map to actions");

    let json = serde_json::to_value(action).unwrap();
    assert_eq!(json["type"], "place_conduit");
    assert!(json["hex1"].is_array());
    assert!(json["hex2"].is_array());

    // Both endpoints must be adjacent cells of the board.
    let hex1 = HexCoord::new(json["hex1"][0].as_i64().unwrap() as i32, json["hex1"][1].as_i64().unwrap() as i32);
    let hex2 = HexCoord::new(json["hex2"][0].as_i64().unwrap() as i32, json["hex2"][1].as_i64().unwrap() as i32);
    assert_eq!(hex1.distance_to(&hex2), 1);
    assert!(state.board.contains(hex1));
    assert!(state.board.contains(hex2));
}

#[test]
fn every_adjacent_pair_renders_exactly_one_edge() {
    let state = snapshot();
    let scene = BoardRenderer::render(&state, Viewport::new(640.0, 480.0));

    let mut counts = std::collections::HashMap::new();
    for node in scene.edge_hits() {
        if let SceneNode::EdgeHit { hex1, hex2, .. } = node {
            *counts.entry(EdgeKey::new(*hex1, *hex2)).or_insert(0u32) += 1;
        }
    }

    assert_eq!(counts.len(), 12, "radius 1 has 12 unique edges");
    for (key, count) in counts {
        assert_eq!(count, 1, "edge {key:?} drawn more than once");
    }

    // Every pair of in-board neighbors is covered, whichever way queried.
    for cell in &state.board.hexes {
        for neighbor in cell.coord().neighbors() {
            if state.board.contains(neighbor) {
                let key = EdgeKey::new(neighbor, cell.coord());
                assert!(
                    scene.edge_hits().any(|n| matches!(
                        n,
                        SceneNode::EdgeHit { hex1, hex2, .. }
                            if EdgeKey::new(*hex1, *hex2) == key
                    )),
                    "missing edge {key:?}"
                );
            }
        }
    }
}

#[test]
fn rejection_notice_overrides_and_reverts() {
    let mut store = StateStore::new();
    store.set_identity("sid-alice".into());
    store.replace(snapshot());
    assert_eq!(store.display_message(), Some("Your turn"));

    // Action rejection arrives; the bridge schedules expiry after
    // NOTICE_DURATION (2 s). Here we drive the expiry by hand.
    let token = store.show_transient_notice("Not enough resources");
    assert_eq!(store.display_message(), Some("Not enough resources"));

    store.expire_notice(token);
    assert_eq!(store.display_message(), Some("Your turn"));
}

#[test]
fn next_snapshot_supersedes_a_pending_notice() {
    let mut store = StateStore::new();
    store.set_identity("sid-alice".into());
    store.replace(snapshot());

    let token = store.show_transient_notice("Hexes are not adjacent.");

    let mut newer = snapshot();
    newer.message = "Bob's turn. AP: 4".into();
    newer.current_player_id = "sid-bob".into();
    store.replace(newer);

    assert_eq!(store.display_message(), Some("Bob's turn. AP: 4"));
    assert_eq!(store.phase(), ClientPhase::InGame { my_turn: false });

    // The old timer fires late; nothing changes.
    store.expire_notice(token);
    assert_eq!(store.display_message(), Some("Bob's turn. AP: 4"));
}

#[test]
fn game_over_suppresses_the_end_turn_control() {
    let mut store = StateStore::new();
    store.set_identity("sid-alice".into());

    let mut terminal = snapshot();
    terminal.game_over = true;
    terminal.winner = Some("Alice".into());
    terminal.message = "Game Over! Alice has connected to the Nexus and wins!".into();
    store.replace(terminal);

    assert_eq!(
        store.phase(),
        ClientPhase::GameOver {
            winner: Some("Alice".into())
        }
    );

    let panel = PanelRenderer::render(store.state().unwrap(), store.my_id());
    assert!(!panel.end_turn_enabled);
    assert_eq!(panel.banner.as_deref(), Some("Game Over! Alice wins!"));
    assert_eq!(panel.left.len(), 2);
    assert!(panel.right.is_empty());
}

#[test]
fn scene_survives_a_serialization_round_trip() {
    // Scenes are plain data so hosts can ship or golden-test them.
    let scene = BoardRenderer::render(&snapshot(), Viewport::new(800.0, 600.0));
    let json = serde_json::to_string(&scene).unwrap();
    let back: Scene = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);

    let svg = svg::render(&scene);
    assert!(svg.contains("edge-hit"));
    assert!(svg.contains("NEXUS"));
}
