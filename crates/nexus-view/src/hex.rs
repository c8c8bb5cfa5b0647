//! Hex coordinate system using axial coordinates (q, r).
//!
//! This module provides the foundational geometry for the hex board:
//! - `HexCoord`: identifies individual hex cells
//! - `EdgeKey`: canonical, order-independent identity for the edge shared
//!   by two adjacent cells
//! - pixel projection and corner generation for the renderer
//!
//! We use axial coordinates because they make neighbor calculations elegant
//! and avoid the wasted space of offset coordinates.

use serde::{Deserialize, Serialize};

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Axial coordinate for the hex grid.
///
/// - `q` increases going east (right)
/// - `r` increases going southeast
/// - The third coordinate `s` (not stored) satisfies: q + r + s = 0
///
/// On the wire a coordinate is a bare `[q, r]` pair, matching the server's
/// conduit and action encoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

/// The six axial direction vectors, in fixed iteration order.
///
/// The order is significant only for deterministic iteration, not semantics.
pub const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -1)];

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third coordinate (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The six neighboring coordinates, in [`DIRECTIONS`] order
    pub fn neighbors(&self) -> [HexCoord; 6] {
        DIRECTIONS.map(|(dq, dr)| HexCoord::new(self.q + dq, self.r + dr))
    }

    /// Distance to another hex (in hex steps)
    pub fn distance_to(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Project to pixel space (center of the hex).
    ///
    /// Pointy-top orientation; `size` is the hex radius in pixels and
    /// `origin` is the pixel position of the board center. Two adjacent
    /// hexes end up exactly `size * sqrt(3)` apart.
    pub fn project(&self, size: f64, origin: Point) -> Point {
        let x = size * 3.0_f64.sqrt() * (self.q as f64 + self.r as f64 / 2.0);
        let y = size * 1.5 * self.r as f64;
        Point::new(origin.x + x, origin.y + y)
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}

impl From<HexCoord> for (i32, i32) {
    fn from(coord: HexCoord) -> Self {
        (coord.q, coord.r)
    }
}

/// The six corners of a pointy-top hexagon centered at `center`.
///
/// Corners are generated at 60-degree increments starting from a -30-degree
/// offset, giving a consistent winding order for polygon fill.
pub fn corners(center: Point, size: f64) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        Point::new(center.x + size * angle.cos(), center.y + size * angle.sin())
    })
}

/// Canonical identity for the edge between two adjacent hexes.
///
/// Each edge is shared by exactly two hexes; endpoints are sorted by
/// `(q, r)` at construction so that `EdgeKey::new(a, b)` and
/// `EdgeKey::new(b, a)` denote the same edge. This key is the sole
/// mechanism preventing a shared edge from being drawn or click-mapped
/// twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    a: HexCoord,
    b: HexCoord,
}

impl EdgeKey {
    /// Create the canonical key for the edge between two hexes
    pub fn new(h1: HexCoord, h2: HexCoord) -> Self {
        if h1 <= h2 {
            Self { a: h1, b: h2 }
        } else {
            Self { a: h2, b: h1 }
        }
    }

    /// The two endpoint coordinates, in canonical order
    pub const fn endpoints(&self) -> (HexCoord, HexCoord) {
        (self.a, self.b)
    }
}
