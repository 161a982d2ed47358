//! Pixel color → tile semantics.

use macroquad::color::Color;
use std::fmt;

/// Semantic tag of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileTag {
    /// Solid tile: blocks movement and counts as ground
    Wall,
    /// Level exit: touching it requests a scene transition
    Goal,
    /// Walkable, nothing is built for it
    #[default]
    Empty,
}

impl TileTag {
    /// Label used by the debug overlay.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileTag::Wall => "WALL",
            TileTag::Goal => "GOAL",
            TileTag::Empty => "EMPTY",
        }
    }

    /// Whether a brick is built for this tile.
    pub fn is_solid(&self) -> bool {
        !matches!(self, TileTag::Empty)
    }

    /// Outline color for debug rendering.
    pub fn debug_color(&self) -> Option<Color> {
        match self {
            TileTag::Wall => Some(Color::new(1.0, 0.0, 0.0, 1.0)),
            TileTag::Goal => Some(Color::new(0.0, 0.0, 1.0, 1.0)),
            TileTag::Empty => None,
        }
    }
}

impl fmt::Display for TileTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single map pixel means before the spawn marker is pulled out of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelKind {
    /// A regular tile
    Tile(TileTag),
    /// The reserved player spawn marker
    PlayerSpawn,
}

/// Snap each channel to 0 or 1.
#[inline]
fn quantize(c: f32) -> u8 {
    if c.round() >= 1.0 {
        1
    } else {
        0
    }
}

/// Classify a pixel color.
///
/// Channels are rounded to 0/1 before the exact-match lookup: opaque black is
/// a wall, opaque green a goal, opaque yellow the spawn marker. Anything else
/// is walkable.
pub fn classify(color: Color) -> PixelKind {
    let key = (
        quantize(color.r),
        quantize(color.g),
        quantize(color.b),
        quantize(color.a),
    );
    match key {
        (0, 0, 0, 1) => PixelKind::Tile(TileTag::Wall),
        (0, 1, 0, 1) => PixelKind::Tile(TileTag::Goal),
        (1, 1, 0, 1) => PixelKind::PlayerSpawn,
        _ => PixelKind::Tile(TileTag::Empty),
    }
}
