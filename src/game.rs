//! Thin driver tying input, physics, collision and scene changes together.

use crate::collision::{resolve, TickEffects};
use crate::config::Config;
use crate::input::InputSnapshot;
use crate::map::Map;
use crate::scene::{GameState, Scene, SceneController};
use anyhow::Context;

/// What happened during one [`Game::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Collision side effects, when a level is active
    pub effects: Option<TickEffects>,
    /// State entered this tick
    pub transition: Option<GameState>,
    /// The player left the ground this tick
    pub jumped: bool,
    /// The game should shut down
    pub quit: bool,
}

/// Owns the active scene and, while playing, the level.
pub struct Game {
    cfg: Config,
    controller: SceneController,
    scene: Scene,
    map: Option<Map>,
    debug: bool,
}

impl Game {
    /// Start in the configured initial state.
    pub fn new(cfg: Config) -> anyhow::Result<Self> {
        let initial = cfg.initial_state;
        let mut game = Self {
            controller: SceneController::new(GameState::Menu),
            scene: Scene::menu(cfg.viewport(), &cfg),
            map: None,
            debug: cfg.debug,
            cfg,
        };
        game.switch_to(initial)?;
        Ok(game)
    }

    /// Advance one frame.
    ///
    /// A failed level load leaves the current scene active and returns the error.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> anyhow::Result<TickReport> {
        let cmds = input.commands();
        let mut report = TickReport::default();

        if cmds.toggle_debug {
            self.debug = !self.debug;
        }
        let mut next = cmds.click.and_then(|point| self.scene.click(point));

        if let Some(map) = self.map.as_mut() {
            let (player, bricks) = map.player_and_bricks();
            if cmds.jump {
                report.jumped = player.jump(self.cfg.jump_speed);
            }
            player.step(dt, self.cfg.gravity);
            let fx = resolve(player, bricks);
            next = fx.requested_transition.or(next);
            report.effects = Some(fx);
        }

        if cmds.quit {
            next = Some(GameState::Quit);
        }

        if let Some(state) = next {
            if self.switch_to(state)? {
                report.transition = Some(state);
            }
        }
        report.quit = self.controller.current() == GameState::Quit;
        Ok(report)
    }

    fn switch_to(&mut self, state: GameState) -> anyhow::Result<bool> {
        if state == self.controller.current() {
            return Ok(false);
        }
        let map = match state {
            GameState::Game => Some(self.load_start_map()?),
            GameState::Menu | GameState::Quit => None,
        };
        self.controller.request(state);
        self.scene = Scene::for_state(state, self.cfg.viewport(), &self.cfg);
        self.map = map;
        Ok(true)
    }

    fn load_start_map(&self) -> anyhow::Result<Map> {
        let name = &self.cfg.start_map;
        let path = self
            .cfg
            .map_path(name)
            .with_context(|| format!("Unknown map {name}"))?;
        Map::load(path, self.cfg.viewport(), &self.cfg)
            .with_context(|| format!("Loading map {name}"))
    }

    /// Active state.
    pub fn state(&self) -> GameState {
        self.controller.current()
    }

    /// Active scene's widgets.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The level, while playing.
    pub fn map(&self) -> Option<&Map> {
        self.map.as_ref()
    }

    /// The level, mutably.
    pub fn map_mut(&mut self) -> Option<&mut Map> {
        self.map.as_mut()
    }

    /// Debug overlays enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Configuration in use.
    pub fn config(&self) -> &Config {
        &self.cfg
    }
}
