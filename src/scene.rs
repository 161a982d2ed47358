//! Game states, scene contents and the transition controller.

use crate::config::Config;
use crate::entity::Clickable;
use crate::ui::Button;
use macroquad::color::Color;
use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// Title menu
    #[default]
    Menu,
    /// A level is being played
    Game,
    /// Shut down
    Quit,
}

impl GameState {
    /// Lowercase name, as used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Menu => "menu",
            GameState::Game => "game",
            GameState::Quit => "quit",
        }
    }

    /// Parse a name, case-insensitively.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "menu" => Some(GameState::Menu),
            "game" => Some(GameState::Game),
            "quit" => Some(GameState::Quit),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the active state and applies transition requests.
#[derive(Debug, Clone)]
pub struct SceneController {
    current: GameState,
}

impl SceneController {
    /// Start in `initial`.
    pub fn new(initial: GameState) -> Self {
        Self { current: initial }
    }

    /// Active state.
    pub fn current(&self) -> GameState {
        self.current
    }

    /// Switch to `next`. Returns `false` if already there.
    pub fn request(&mut self, next: GameState) -> bool {
        if next == self.current {
            return false;
        }
        log::debug!("scene transition {} -> {}", self.current, next);
        self.current = next;
        true
    }
}

/// UI contents of one game state.
#[derive(Debug, Clone)]
pub struct Scene {
    /// State this scene belongs to
    pub state: GameState,
    /// Clear color
    pub background: Color,
    /// Clickable widgets, in draw order
    pub buttons: Vec<Button>,
}

impl Scene {
    /// Scene for `state`, sized to `viewport`.
    pub fn for_state(state: GameState, viewport: Vec2, cfg: &Config) -> Self {
        match state {
            GameState::Game => Self::game(viewport, cfg),
            GameState::Menu | GameState::Quit => Self::menu(viewport, cfg),
        }
    }

    /// Title menu: play and exit buttons stacked in the center.
    pub fn menu(viewport: Vec2, _cfg: &Config) -> Self {
        let size = vec2(viewport.x / 4.0, viewport.y / 12.0);
        let center = viewport / 2.0 - size / 2.0;
        let gap = size.y * 1.5;
        Self {
            state: GameState::Menu,
            background: Color::from_rgba(180, 180, 180, 255),
            buttons: vec![
                Button::new("Play", center - vec2(0.0, gap / 2.0), size, GameState::Game),
                Button::new("Exit Game", center + vec2(0.0, gap / 2.0), size, GameState::Quit),
            ],
        }
    }

    /// In-level scene: a back button in the bottom-left corner.
    pub fn game(viewport: Vec2, cfg: &Config) -> Self {
        let size = vec2(viewport.y / 12.0, viewport.y / 12.0);
        let margin = size * cfg.button_edge_spacing;
        let topleft = vec2(margin.x, viewport.y - margin.y - size.y);
        Self {
            state: GameState::Game,
            background: Color::from_rgba(180, 200, 180, 255),
            buttons: vec![Button::new(" < ", topleft, size, GameState::Menu)],
        }
    }

    /// First button hit by a click at `point`.
    pub fn click(&self, point: Vec2) -> Option<GameState> {
        self.buttons.iter().find_map(|b| b.clicked(point))
    }

    /// Button under the pointer, if any.
    pub fn hovered(&self, point: Vec2) -> Option<&Button> {
        self.buttons.iter().find(|b| b.rect.contains(point))
    }
}
