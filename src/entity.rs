//! Capabilities shared by things placed in a scene.

use crate::scene::GameState;
use crate::tile::TileTag;
use macroquad::math::{Rect, Vec2};

/// Something the player can run into.
pub trait Collidable {
    /// Tile semantics used to pick the collision reaction
    fn tile_tag(&self) -> TileTag;
    /// Box tested for overlap
    fn hit_box(&self) -> Rect;
}

/// Something that reacts to a pointer click.
pub trait Clickable {
    /// Area that accepts clicks
    fn click_box(&self) -> Rect;
    /// State to switch to when clicked
    fn on_click(&self) -> Option<GameState>;

    /// Click at `point`, returning the requested state if it landed inside.
    fn clicked(&self, point: Vec2) -> Option<GameState> {
        if self.click_box().contains(point) {
            self.on_click()
        } else {
            None
        }
    }
}
