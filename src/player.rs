use crate::config::Config;
use crate::scene::GameState;
use crate::tile::TileTag;
use macroquad::color::Color;
use macroquad::math::{vec2, Rect, Vec2};

/// What touching a tile does to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Movement was stopped
    Halt,
    /// A scene change was requested
    Transition(GameState),
}

/// The player: a hit-box, a padded ground-detection box and a grounded flag.
///
/// `grounded_box` always contains `rect` and moves with it. A `None`
/// velocity means movement is blocked.
#[derive(Debug, Clone)]
pub struct Player {
    rect: Rect,
    grounded_box: Rect,
    grounded: bool,
    velocity: Option<Vec2>,
    threshold: f32,
    goal_target: GameState,
    /// Outline color for debug rendering
    pub debug_color: Option<Color>,
}

/// Pad `rect` by `threshold * size` on every side.
pub fn grounded_box_for(rect: Rect, threshold: f32) -> Rect {
    let pad = rect.size() * threshold;
    Rect::new(
        rect.x - pad.x,
        rect.y - pad.y,
        rect.w + 2.0 * pad.x,
        rect.h + 2.0 * pad.y,
    )
}

impl Player {
    /// Player at `topleft` with an explicit `size`.
    ///
    /// Negative thresholds are clamped to zero so the grounded box never
    /// shrinks inside the hit-box.
    pub fn new(topleft: Vec2, size: Vec2, threshold: f32, goal_target: GameState) -> Self {
        let threshold = threshold.max(0.0);
        let rect = Rect::new(topleft.x, topleft.y, size.x, size.y);
        Self {
            rect,
            grounded_box: grounded_box_for(rect, threshold),
            grounded: false,
            velocity: Some(Vec2::ZERO),
            threshold,
            goal_target,
            debug_color: Some(Color::new(1.0, 0.0, 1.0, 1.0)),
        }
    }

    /// Player configured from `cfg`; `size` falls back to the configured
    /// player size, then to the default one.
    pub fn from_config(topleft: Vec2, size: Option<Vec2>, cfg: &Config) -> Self {
        let size = size.or_else(|| cfg.player_size()).unwrap_or_else(|| {
            let [w, h] = cfg.default_player_size;
            vec2(w, h)
        });
        Self::new(topleft, size, cfg.jump_threshold, cfg.goal_transition)
    }

    /// Collision and render footprint.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Padded box used only for ground detection.
    pub fn grounded_box(&self) -> Rect {
        self.grounded_box
    }

    /// Whether the player may jump.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Current velocity, `None` while blocked.
    pub fn velocity(&self) -> Option<Vec2> {
        self.velocity
    }

    /// Top-left corner of the hit-box.
    pub fn position(&self) -> Vec2 {
        self.rect.point()
    }

    /// Grounded-box padding fraction.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Move the hit-box and re-derive the grounded box.
    pub fn set_position(&mut self, topleft: Vec2) {
        self.rect.move_to(topleft);
        self.grounded_box = grounded_box_for(self.rect, self.threshold);
    }

    /// Airborne → Grounded. Returns `false` if already grounded.
    pub fn land(&mut self) -> bool {
        if self.grounded {
            return false;
        }
        self.grounded = true;
        self.halt_on_landing();
        log::debug!("player grounded at {:?}", self.position());
        true
    }

    // Landing also zeroes velocity, so "on ground" implies "not moving".
    fn halt_on_landing(&mut self) {
        self.velocity = Some(Vec2::ZERO);
    }

    /// Grounded → Airborne. Only allowed while grounded.
    pub fn jump(&mut self, speed: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.grounded = false;
        self.velocity = Some(vec2(0.0, -speed));
        log::debug!("player jumped from {:?}", self.position());
        true
    }

    /// Integrate velocity over `dt`; gravity only pulls while airborne.
    pub fn step(&mut self, dt: f32, gravity: f32) {
        let Some(mut v) = self.velocity else {
            return;
        };
        if !self.grounded {
            v.y += gravity * dt;
        }
        self.velocity = Some(v);
        if v != Vec2::ZERO {
            self.set_position(self.position() + v * dt);
        }
    }

    /// React to touching a tile of type `tag`.
    pub fn collide(&mut self, tag: TileTag) -> Option<Reaction> {
        match tag {
            TileTag::Wall => {
                self.velocity = None;
                Some(Reaction::Halt)
            }
            TileTag::Goal => Some(Reaction::Transition(self.goal_target)),
            TileTag::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player_at_tile(x: f32, y: f32, threshold: f32) -> Player {
        Player::new(vec2(x * 10.0, y * 10.0), vec2(10.0, 10.0), threshold, GameState::Menu)
    }

    #[test]
    fn grounded_box_for_half_threshold() {
        let p = player_at_tile(1.0, 1.0, 0.5);
        assert_eq!(p.grounded_box(), Rect::new(5.0, 5.0, 20.0, 20.0));
    }

    #[test]
    fn set_position_moves_both_boxes_together() {
        let mut p = player_at_tile(1.0, 1.0, 0.5);
        p.set_position(vec2(30.0, 40.0));
        assert_eq!(p.rect(), Rect::new(30.0, 40.0, 10.0, 10.0));
        assert_eq!(p.grounded_box(), Rect::new(25.0, 35.0, 20.0, 20.0));
    }

    #[test]
    fn wall_collision_is_idempotent() {
        let mut p = player_at_tile(0.0, 0.0, 1.0);
        assert_eq!(p.collide(TileTag::Wall), Some(Reaction::Halt));
        let once = p.velocity();
        p.collide(TileTag::Wall);
        assert_eq!(p.velocity(), once);
        assert_eq!(p.velocity(), None);
    }

    #[test]
    fn goal_requests_configured_state_and_empty_is_a_no_op() {
        let mut p = Player::new(Vec2::ZERO, vec2(4.0, 4.0), 0.1, GameState::Quit);
        assert_eq!(
            p.collide(TileTag::Goal),
            Some(Reaction::Transition(GameState::Quit))
        );
        assert_eq!(p.collide(TileTag::Empty), None);
        assert_eq!(p.velocity(), Some(Vec2::ZERO));
    }

    #[test]
    fn landing_zeroes_velocity_and_only_happens_once() {
        let mut p = player_at_tile(0.0, 0.0, 1.0);
        p.collide(TileTag::Wall);
        assert!(p.land());
        assert_eq!(p.velocity(), Some(Vec2::ZERO));
        assert!(!p.land());
    }

    #[test]
    fn jump_requires_ground() {
        let mut p = player_at_tile(0.0, 0.0, 1.0);
        assert!(!p.jump(100.0));
        p.land();
        assert!(p.jump(100.0));
        assert!(!p.is_grounded());
        assert_eq!(p.velocity(), Some(vec2(0.0, -100.0)));
    }

    #[test]
    fn step_applies_gravity_only_while_airborne() {
        let mut p = player_at_tile(0.0, 0.0, 1.0);
        p.step(0.5, 10.0);
        assert_eq!(p.velocity(), Some(vec2(0.0, 5.0)));
        assert_eq!(p.position(), vec2(0.0, 2.5));
        assert_eq!(p.grounded_box().y, 2.5 - 10.0);

        p.land();
        p.step(0.5, 10.0);
        assert_eq!(p.velocity(), Some(Vec2::ZERO));
        assert_eq!(p.position(), vec2(0.0, 2.5));
    }

    #[test]
    fn blocked_player_does_not_move() {
        let mut p = player_at_tile(2.0, 2.0, 1.0);
        p.collide(TileTag::Wall);
        p.step(1.0, 100.0);
        assert_eq!(p.position(), vec2(20.0, 20.0));
    }

    #[test]
    fn from_config_prefers_explicit_size() {
        let mut cfg = Config::default();
        let p = Player::from_config(Vec2::ZERO, Some(vec2(8.0, 8.0)), &cfg);
        assert_eq!(p.rect().size(), vec2(8.0, 8.0));
        let p = Player::from_config(Vec2::ZERO, None, &cfg);
        assert_eq!(p.rect().size(), vec2(32.0, 32.0));
        cfg.player_size = Some([12.0, 16.0]);
        let p = Player::from_config(Vec2::ZERO, None, &cfg);
        assert_eq!(p.rect().size(), vec2(12.0, 16.0));
        assert_eq!(p.threshold(), cfg.jump_threshold);
    }

    proptest! {
        #[test]
        fn grounded_box_contains_rect(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            w in 0.0f32..200.0,
            h in 0.0f32..200.0,
            threshold in 0.0f32..4.0,
            nx in -1000.0f32..1000.0,
            ny in -1000.0f32..1000.0,
        ) {
            let mut p = Player::new(vec2(x, y), vec2(w, h), threshold, GameState::Menu);
            for _ in 0..2 {
                let r = p.rect();
                let g = p.grounded_box();
                prop_assert!(g.left() <= r.left());
                prop_assert!(g.top() <= r.top());
                // far edges are sums of rounded terms
                prop_assert!(g.right() >= r.right() - 1e-3);
                prop_assert!(g.bottom() >= r.bottom() - 1e-3);
                p.set_position(vec2(nx, ny));
            }
        }
    }
}
