// tests/common/mod.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh directory under the system temp dir.
pub fn temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("space_platformer_{tag}_{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

/// Write a level PNG: `#` wall, `G` goal, `P` spawn, anything else white.
pub fn write_map(path: &Path, rows: &[&str]) {
    let w = rows[0].len() as u32;
    let h = rows.len() as u32;
    let png = image::RgbaImage::from_fn(w, h, |x, y| {
        image::Rgba(match rows[y as usize].as_bytes()[x as usize] {
            b'#' => [0, 0, 0, 255],
            b'G' => [0, 255, 0, 255],
            b'P' => [255, 255, 0, 255],
            _ => [255, 255, 255, 255],
        })
    });
    png.save(path).expect("failed to write png");
}
