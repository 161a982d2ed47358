use crate::config::Config;
use crate::entity::Collidable;
use crate::error::LoadError;
use crate::grid::{scan_image, GridPos, ScannedMap, TileGrid};
use crate::layout::Layout;
use crate::loader::image_loader::decode_map_file;
use crate::player::Player;
use crate::tile::TileTag;
use macroquad::color::Color;
use macroquad::math::{Rect, Vec2};
use macroquad::texture::Image;
use std::path::Path;

/// One built, positioned, non-empty tile. Bricks never move.
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    /// Tile semantics, never `Empty`
    pub tile: TileTag,
    /// Screen-space box
    pub rect: Rect,
    /// Grid cell the brick was built from
    pub cell: GridPos,
    /// Outline color for debug rendering
    pub debug_color: Option<Color>,
}

impl Collidable for Brick {
    fn tile_tag(&self) -> TileTag {
        self.tile
    }

    fn hit_box(&self) -> Rect {
        self.rect
    }
}

/// Where and how big the player starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSpawn {
    /// Grid cell
    pub cell: GridPos,
    /// Screen-space box of that cell
    pub rect: Rect,
}

/// A playable level: the grid, its bricks and the player.
///
/// Built once per scene activation and dropped on scene change.
#[derive(Debug, Clone)]
pub struct Map {
    grid: TileGrid,
    layout: Layout,
    bricks: Vec<Brick>,
    spawn: PlayerSpawn,
    player: Player,
}

impl Map {
    /// Load a level image and lay it out in `viewport`.
    pub fn load<P: AsRef<Path>>(path: P, viewport: Vec2, cfg: &Config) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let image = decode_map_file(path)?;
        let map = Self::from_image(&image, viewport, cfg)?;
        log::info!(
            "loaded map {}: {}x{} tiles, {} walls, {} goals, tile size {:.2}",
            path.display(),
            map.grid.width(),
            map.grid.height(),
            map.grid.count(TileTag::Wall),
            map.grid.count(TileTag::Goal),
            map.layout.tile_size,
        );
        Ok(map)
    }

    /// Build from an already decoded image.
    pub fn from_image(image: &Image, viewport: Vec2, cfg: &Config) -> Result<Self, LoadError> {
        let scanned = scan_image(image)?;
        Ok(Self::from_scanned(scanned, viewport, cfg))
    }

    /// Lay out a scanned grid, build its bricks and place the player.
    pub fn from_scanned(scanned: ScannedMap, viewport: Vec2, cfg: &Config) -> Self {
        let ScannedMap { grid, spawn } = scanned;
        let layout = Layout::fit(viewport, grid.width(), grid.height());

        let bricks = grid
            .iter()
            .filter(|(_, tag)| tag.is_solid())
            .map(|(cell, tile)| Brick {
                tile,
                rect: layout.cell_rect(cell),
                cell,
                debug_color: tile.debug_color(),
            })
            .collect();

        let spawn = PlayerSpawn {
            cell: spawn,
            rect: layout.cell_rect(spawn),
        };
        let player = Player::from_config(
            spawn.rect.point(),
            Some(cfg.player_size().unwrap_or_else(|| spawn.rect.size())),
            cfg,
        );

        Self {
            grid,
            layout,
            bricks,
            spawn,
            player,
        }
    }

    /// Logical tile grid.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Screen placement of the grid.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Collidable bricks in row-major build order.
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Where the player started.
    pub fn spawn(&self) -> PlayerSpawn {
        self.spawn
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The player, mutably.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Split borrow for a collision pass.
    pub fn player_and_bricks(&mut self) -> (&mut Player, &[Brick]) {
        (&mut self.player, &self.bricks)
    }

    /// Put the player back at the spawn point.
    pub fn respawn(&mut self, cfg: &Config) {
        let size = self.player.rect().size();
        self.player = Player::from_config(self.spawn.rect.point(), Some(size), cfg);
    }
}
