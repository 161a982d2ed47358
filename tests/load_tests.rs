// tests/load_tests.rs

use macroquad::math::{vec2, Rect};
use space_platformer::{Config, GridPos, LoadError, Map, TileTag};
use std::fs;
use std::path::PathBuf;

mod common;
use common::{temp_dir, write_map};

#[test]
fn shipped_test_map_loads() {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("assets");
    path.push("test_map_1.png");

    let cfg = Config::default();
    let map = Map::load(&path, cfg.viewport(), &cfg).expect("shipped asset should load");

    assert_eq!((map.grid().width(), map.grid().height()), (20, 12));
    assert_eq!(map.grid().count(TileTag::Goal), 2);
    assert_eq!(map.spawn().cell, GridPos::new(1, 10));
    assert_eq!(map.layout().tile_size, 64.0);
    assert_eq!(map.player().rect(), Rect::new(64.0, 646.0, 64.0, 64.0));
    assert_eq!(map.bricks().len(), map.grid().count(TileTag::Wall) + 2);
}

#[test]
fn three_by_three_png_scenario() {
    let dir = temp_dir("scenario");
    let path = dir.join("map.png");
    write_map(&path, &["###", ".P.", "GGG"]);

    let cfg = Config::default();
    let map = Map::load(&path, vec2(90.0, 90.0), &cfg).expect("load");

    let walls = map.bricks().iter().filter(|b| b.tile == TileTag::Wall).count();
    let goals = map.bricks().iter().filter(|b| b.tile == TileTag::Goal).count();
    assert_eq!((walls, goals), (3, 3));
    assert_eq!(map.spawn().cell, GridPos::new(1, 1));
    assert_eq!(map.grid().get(GridPos::new(0, 1)), Some(TileTag::Empty));
    assert_eq!(map.grid().get(GridPos::new(2, 1)), Some(TileTag::Empty));
    assert_eq!(map.player().rect(), Rect::new(30.0, 30.0, 30.0, 30.0));
}

#[test]
fn missing_file_is_an_io_error() {
    let cfg = Config::default();
    let err = Map::load("no/such/map.png", cfg.viewport(), &cfg).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn undecodable_file_is_a_decode_error() {
    let dir = temp_dir("garbage");
    let path = dir.join("map.png");
    fs::write(&path, "{ not an image").expect("failed to write file");

    let cfg = Config::default();
    let err = Map::load(&path, cfg.viewport(), &cfg).unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }));
    assert!(err.to_string().contains("map.png"));
}

#[test]
fn solid_map_without_marker_fails_to_build() {
    let dir = temp_dir("solid");
    let path = dir.join("map.png");
    write_map(&path, &["##", "#G"]);

    let cfg = Config::default();
    let err = Map::load(&path, cfg.viewport(), &cfg).unwrap_err();
    assert!(matches!(err, LoadError::NoSpawn { width: 2, height: 2 }));
}
