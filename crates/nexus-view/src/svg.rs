//! SVG adapter: turns a [`Scene`](crate::scene::Scene) into draw calls.
//!
//! The scene stays platform-neutral; this adapter is the one place that
//! knows about a concrete drawing target. Edge metadata is emitted as
//! `data-hex1`/`data-hex2` attributes so a DOM host can hand a clicked
//! element's pair straight back to [`crate::input::map_click`]-equivalent
//! handling.

use crate::scene::{Scene, SceneNode};
use std::fmt::Write;

/// Invisible but clickable stroke width for edge primitives
const HIT_WIDTH: f64 = 14.0;
/// Stroke widths for plain and reinforced conduits
const CONDUIT_WIDTH: f64 = 4.0;
const REINFORCED_WIDTH: f64 = 8.0;

const HEX_FILL: &str = "#2b3240";
const HEX_STROKE: &str = "#4a5468";
const LABEL_FILL: &str = "#d8dee9";

/// Render a scene as a standalone SVG document.
pub fn render(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.viewport.width,
        h = scene.viewport.height,
    );

    for node in &scene.nodes {
        match node {
            SceneNode::EdgeHit {
                hex1,
                hex2,
                from,
                to,
            } => {
                let _ = writeln!(
                    out,
                    r#"  <line class="edge-hit" data-hex1="{},{}" data-hex2="{},{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="transparent" stroke-width="{}"/>"#,
                    hex1.q, hex1.r, hex2.q, hex2.r, from.x, from.y, to.x, to.y, HIT_WIDTH,
                );
            }
            SceneNode::ConduitLine {
                from,
                to,
                color,
                reinforced,
            } => {
                let width = if *reinforced {
                    REINFORCED_WIDTH
                } else {
                    CONDUIT_WIDTH
                };
                let _ = writeln!(
                    out,
                    r#"  <line class="conduit" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                    from.x, from.y, to.x, to.y, color, width,
                );
            }
            SceneNode::HexPolygon { corners, .. } => {
                let mut points = String::new();
                for p in corners {
                    let _ = write!(points, "{},{} ", p.x, p.y);
                }
                let _ = writeln!(
                    out,
                    r#"  <polygon class="hex" points="{}" fill="{}" stroke="{}"/>"#,
                    points.trim_end(),
                    HEX_FILL,
                    HEX_STROKE,
                );
            }
            SceneNode::ResourceLabel { at, resource } => {
                let _ = writeln!(
                    out,
                    r#"  <text class="resource" x="{}" y="{}" fill="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
                    at.x,
                    at.y,
                    LABEL_FILL,
                    resource.label(),
                );
            }
            SceneNode::BaseMarker { at, color, .. } => {
                let _ = writeln!(
                    out,
                    r#"  <circle class="base" cx="{}" cy="{}" r="6" fill="{}" stroke="{}"/>"#,
                    at.x, at.y, color, LABEL_FILL,
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::{HexCoord, Point};
    use crate::scene::Viewport;

    #[test]
    fn edge_metadata_survives_into_attributes() {
        let scene = Scene {
            viewport: Viewport::new(100.0, 100.0),
            nodes: vec![
                SceneNode::EdgeHit {
                    hex1: HexCoord::new(-1, 1),
                    hex2: HexCoord::new(0, 0),
                    from: Point::new(10.0, 10.0),
                    to: Point::new(20.0, 20.0),
                },
                SceneNode::ConduitLine {
                    from: Point::new(10.0, 10.0),
                    to: Point::new(20.0, 20.0),
                    color: "hsl(90, 70%, 50%)".into(),
                    reinforced: false,
                },
            ],
        };

        let svg = render(&scene);
        assert!(svg.contains(r#"data-hex1="-1,1""#));
        assert!(svg.contains(r#"data-hex2="0,0""#));
        assert!(svg.contains(r#"stroke="hsl(90, 70%, 50%)""#));
        assert!(svg.ends_with("</svg>\n"));
    }
}
