//! Game configuration.
//!
//! Everything has a default so a partial JSON file (or none at all) works.

use crate::scene::GameState;
use anyhow::Context;
use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Tunables for the whole game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window title
    pub title: String,
    /// Logical viewport the map and UI are laid out in
    pub internal_resolution: [u32; 2],
    /// Window size
    pub external_resolution: [u32; 2],

    /// Grounded-box padding as a fraction of the player size, per side
    pub jump_threshold: f32,
    /// Upward speed given by a jump
    pub jump_speed: f32,
    /// Downward acceleration while airborne
    pub gravity: f32,
    /// Explicit player size; the map tile size is used when absent
    pub player_size: Option<[f32; 2]>,
    /// Player size when built outside a map and no explicit size is set
    pub default_player_size: [f32; 2],

    /// State requested when the player touches a goal
    pub goal_transition: GameState,
    /// State the game starts in
    pub initial_state: GameState,
    /// Start with debug overlays on
    pub debug: bool,
    /// Button margin from the screen edge, as a fraction of the button size
    pub button_edge_spacing: f32,

    /// Known levels by name
    pub maps: BTreeMap<String, PathBuf>,
    /// Level loaded when entering the game state
    pub start_map: String,
}

impl Default for Config {
    fn default() -> Self {
        let mut maps = BTreeMap::new();
        maps.insert(
            "Test_Map_1".to_owned(),
            PathBuf::from("assets/test_map_1.png"),
        );
        Self {
            title: "Space Platformer".to_owned(),
            internal_resolution: [1280, 780],
            external_resolution: [1920, 1080],

            jump_threshold: 2.0,
            jump_speed: 600.0,
            gravity: 1200.0,
            player_size: None,
            default_player_size: [32.0, 32.0],

            goal_transition: GameState::Menu,
            initial_state: GameState::Menu,
            debug: false,
            button_edge_spacing: 1.0 / 3.0,

            maps,
            start_map: "Test_Map_1".to_owned(),
        }
    }
}

impl Config {
    /// Read a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("Reading config file {}", path.display()))?;
        Self::from_json(&txt).with_context(|| format!("Parsing config file {}", path.display()))
    }

    /// Parse a JSON config.
    pub fn from_json(txt: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_json::from_str(txt)?;
        if cfg.jump_threshold.is_nan() || cfg.jump_threshold < 0.0 {
            anyhow::bail!("jump_threshold must be >= 0, got {}", cfg.jump_threshold);
        }
        Ok(cfg)
    }

    /// Image path for a named map.
    pub fn map_path(&self, name: &str) -> Option<&Path> {
        self.maps.get(name).map(PathBuf::as_path)
    }

    /// Logical viewport as a vector.
    pub fn viewport(&self) -> Vec2 {
        let [w, h] = self.internal_resolution;
        vec2(w as f32, h as f32)
    }

    /// Explicit player size, if configured.
    pub fn player_size(&self) -> Option<Vec2> {
        self.player_size.map(|[w, h]| vec2(w, h))
    }
}
