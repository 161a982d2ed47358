use crate::error::LoadError;
use crate::tile::{classify, PixelKind, TileTag};
use macroquad::texture::Image;

/// Column/row coordinate of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl GridPos {
    /// Shorthand constructor.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Row-major grid of tile tags, sized to the source image.
///
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<TileTag>,
}

/// Result of scanning a map image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedMap {
    /// Logical grid; the spawn cell is stored as `Empty`
    pub grid: TileGrid,
    /// Where the player starts
    pub spawn: GridPos,
}

impl TileGrid {
    /// Build a grid from row-major cells.
    ///
    /// Returns `None` if `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<TileTag>) -> Option<Self> {
        if cells.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tag at `pos`, `None` outside the grid.
    pub fn get(&self, pos: GridPos) -> Option<TileTag> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.cells.get(pos.y * self.width + pos.x).copied()
    }

    /// Every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, TileTag)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, tag)| (GridPos::new(idx % w, idx / w), *tag))
    }

    /// First `Empty` cell in row-major order.
    pub fn first_empty(&self) -> Option<GridPos> {
        self.iter()
            .find(|(_, tag)| *tag == TileTag::Empty)
            .map(|(pos, _)| pos)
    }

    /// Number of cells carrying `tag`.
    pub fn count(&self, tag: TileTag) -> usize {
        self.cells.iter().filter(|t| **t == tag).count()
    }
}

/// Classify every pixel of `image` and pull the spawn marker out of the grid.
///
/// If several spawn markers are present the last one scanned wins. Without a
/// marker the first `Empty` cell becomes the spawn; with neither the map is
/// rejected.
pub fn scan_image(image: &Image) -> Result<ScannedMap, LoadError> {
    let width = image.width();
    let height = image.height();
    if width == 0 || height == 0 {
        return Err(LoadError::EmptyImage { path: None });
    }

    let mut cells = Vec::with_capacity(width * height);
    let mut marker = None;
    let mut markers = 0usize;

    for y in 0..height {
        for x in 0..width {
            match classify(image.get_pixel(x as u32, y as u32)) {
                PixelKind::Tile(tag) => cells.push(tag),
                PixelKind::PlayerSpawn => {
                    cells.push(TileTag::Empty);
                    marker = Some(GridPos::new(x, y));
                    markers += 1;
                }
            }
        }
    }

    if markers > 1 {
        log::warn!("map has {markers} spawn markers, using the last one at {marker:?}");
    }

    let grid = TileGrid {
        width,
        height,
        cells,
    };

    let spawn = match marker.or_else(|| grid.first_empty()) {
        Some(pos) => pos,
        None => return Err(LoadError::NoSpawn { width, height }),
    };

    Ok(ScannedMap { grid, spawn })
}
