#![warn(missing_docs)]

//! Tile-based platformer core for Macroquad: levels drawn as images,
//! a player with a padded ground-detection box, and per-tick collision resolution.

mod collision;
mod config;
mod entity;
mod error;
mod game;
mod grid;
mod input;
mod layout;
mod loader {
    pub mod image_loader;
}
mod map;
mod player;
pub mod render;
mod scene;
mod tile;
mod ui;

pub use collision::{resolve, TickEffects};
pub use config::Config;
pub use entity::{Clickable, Collidable};
pub use error::LoadError;
pub use game::{Game, TickReport};
pub use grid::{scan_image, GridPos, ScannedMap, TileGrid};
pub use input::{to_logical, Commands, InputSnapshot};
pub use layout::Layout;
pub use loader::image_loader::decode_map_file;
pub use map::{Brick, Map, PlayerSpawn};
pub use player::{grounded_box_for, Player, Reaction};
pub use scene::{GameState, Scene, SceneController};
pub use tile::{classify, PixelKind, TileTag};
pub use ui::Button;
