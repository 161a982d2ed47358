//! Per-tick player vs. brick resolution.

use crate::entity::Collidable;
use crate::player::{Player, Reaction};
use crate::scene::GameState;
use crate::tile::TileTag;
use macroquad::math::Rect;

/// Side effects of one collision pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEffects {
    /// Grounded flag after the pass
    pub grounded: bool,
    /// The pass turned an airborne player into a grounded one
    pub landed: bool,
    /// At least one wall overlapped the hit-box
    pub hit_wall: bool,
    /// A wall reaction cleared the velocity
    pub velocity_cleared: bool,
    /// Scene change requested by a goal
    pub requested_transition: Option<GameState>,
    /// Number of bricks overlapping the hit-box
    pub contacts: usize,
}

impl TickEffects {
    /// Requested scene by name.
    pub fn requested_scene(&self) -> Option<&'static str> {
        self.requested_transition.map(|s| s.as_str())
    }
}

/// `intersect` reports edge contact as a zero-sized rect, so check the area.
fn overlaps_with_area(a: &Rect, b: &Rect) -> bool {
    a.intersect(*b).is_some_and(|r| r.w > 0.0 && r.h > 0.0)
}

/// Run one collision pass of `player` against `bricks`.
///
/// First the grounded box is tested against walls; a positive-area
/// intersection lands an airborne player, nothing here ever un-grounds one.
/// Then every brick overlapping the hit-box, in iteration order, gets its
/// reaction applied. For the hit-box, edge contact counts as overlap.
pub fn resolve<C: Collidable>(player: &mut Player, bricks: &[C]) -> TickEffects {
    let mut fx = TickEffects::default();

    let ground_box = player.grounded_box();
    let near_wall = bricks
        .iter()
        .filter(|b| b.tile_tag() == TileTag::Wall)
        .any(|b| overlaps_with_area(&ground_box, &b.hit_box()));
    if near_wall && !player.is_grounded() {
        fx.landed = player.land();
    }

    let hit_box = player.rect();
    for brick in bricks.iter().filter(|b| hit_box.overlaps(&b.hit_box())) {
        fx.contacts += 1;
        if brick.tile_tag() == TileTag::Wall {
            fx.hit_wall = true;
        }
        match player.collide(brick.tile_tag()) {
            Some(Reaction::Halt) => fx.velocity_cleared = true,
            Some(Reaction::Transition(state)) => fx.requested_transition = Some(state),
            None => {}
        }
    }

    fx.grounded = player.is_grounded();
    fx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridPos;
    use crate::map::Brick;
    use macroquad::math::{vec2, Vec2};

    fn brick(tile: TileTag, x: f32, y: f32) -> Brick {
        Brick {
            tile,
            rect: Rect::new(x * 10.0, y * 10.0, 10.0, 10.0),
            cell: GridPos::new(x as usize, y as usize),
            debug_color: None,
        }
    }

    fn player(x: f32, y: f32, threshold: f32) -> Player {
        Player::new(vec2(x, y), vec2(10.0, 10.0), threshold, GameState::Menu)
    }

    #[test]
    fn wall_in_grounded_box_grounds_the_player() {
        // wall one tile below, 2px gap; a 0.5 grounded box reaches it, the hit-box does not
        let mut p = player(0.0, -2.0, 0.5);
        let bricks = [brick(TileTag::Wall, 0.0, 1.0)];
        let fx = resolve(&mut p, &bricks);
        assert!(fx.grounded);
        assert!(fx.landed);
        assert_eq!(fx.contacts, 0);
        assert_eq!(p.velocity(), Some(Vec2::ZERO));
    }

    #[test]
    fn goal_in_grounded_box_does_not_ground() {
        let mut p = player(0.0, -2.0, 0.5);
        let bricks = [brick(TileTag::Goal, 0.0, 1.0)];
        let fx = resolve(&mut p, &bricks);
        assert!(!fx.grounded);
        assert_eq!(fx.requested_transition, None);
    }

    #[test]
    fn grounding_is_sticky() {
        let mut p = player(0.0, -2.0, 0.5);
        let bricks = [brick(TileTag::Wall, 0.0, 1.0)];
        resolve(&mut p, &bricks);
        p.set_position(vec2(500.0, 500.0));
        let fx = resolve(&mut p, &bricks);
        assert!(fx.grounded);
        assert!(!fx.landed);
        assert!(p.is_grounded());
    }

    #[test]
    fn wall_and_goal_in_one_tick_fire_both_reactions() {
        // hit-box straddles a wall and a goal
        let mut p = player(5.0, 0.0, 0.0);
        let bricks = [brick(TileTag::Wall, 0.0, 0.0), brick(TileTag::Goal, 1.0, 0.0)];
        let fx = resolve(&mut p, &bricks);
        assert_eq!(fx.contacts, 2);
        assert!(fx.hit_wall);
        assert!(fx.velocity_cleared);
        assert_eq!(fx.requested_transition, Some(GameState::Menu));
        assert_eq!(fx.requested_scene(), Some("menu"));
        assert_eq!(p.velocity(), None);
    }

    #[test]
    fn every_overlapping_wall_reacts() {
        let mut p = player(5.0, 5.0, 0.0);
        let bricks = [
            brick(TileTag::Wall, 0.0, 0.0),
            brick(TileTag::Wall, 1.0, 0.0),
            brick(TileTag::Wall, 0.0, 1.0),
        ];
        let fx = resolve(&mut p, &bricks);
        assert_eq!(fx.contacts, 3);
        assert_eq!(p.velocity(), None);
    }

    #[test]
    fn touching_edges_count_as_overlap() {
        let mut p = player(10.0, 0.0, 0.0);
        let bricks = [brick(TileTag::Goal, 0.0, 0.0)];
        let fx = resolve(&mut p, &bricks);
        assert_eq!(fx.contacts, 1);
        assert_eq!(fx.requested_transition, Some(GameState::Menu));
    }

    #[test]
    fn grounded_box_touching_a_wall_edge_does_not_ground() {
        // grounded box (0,0,10,10) shares only the y=10 edge with the wall below
        let mut p = player(0.0, 0.0, 0.0);
        let bricks = [brick(TileTag::Wall, 0.0, 1.0)];
        let fx = resolve(&mut p, &bricks);
        assert!(!fx.grounded);
        assert!(!fx.landed);
        assert!(!p.is_grounded());
        // the hit-box pass still sees the contact
        assert_eq!(fx.contacts, 1);
        assert!(fx.velocity_cleared);
    }

    #[test]
    fn far_bricks_leave_player_untouched() {
        let mut p = player(100.0, 100.0, 0.5);
        let bricks = [brick(TileTag::Wall, 0.0, 0.0), brick(TileTag::Goal, 1.0, 0.0)];
        let fx = resolve(&mut p, &bricks);
        assert_eq!(fx, TickEffects::default());
        assert_eq!(p.velocity(), Some(Vec2::ZERO));
    }
}
