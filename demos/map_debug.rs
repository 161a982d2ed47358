use macroquad::prelude::*;
use space_platformer::render::{draw_debug_hud, Renderable};
use space_platformer::{Config, InputSnapshot, Map, TileTag};

fn window_conf() -> Conf {
    Conf {
        window_title: "Map Debug".into(),
        window_width: 1280,
        window_height: 780,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let cfg = Config::default();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/test_map_1.png".to_owned());
    let map = Map::load(&path, cfg.viewport(), &cfg).expect("Failed to load map");

    println!(
        "grid={}x{} walls={} goals={} spawn={:?}",
        map.grid().width(),
        map.grid().height(),
        map.grid().count(TileTag::Wall),
        map.grid().count(TileTag::Goal),
        map.spawn().cell,
    );

    loop {
        clear_background(LIGHTGRAY);

        let input = InputSnapshot::poll(cfg.viewport());
        map.render();
        map.render_debug();
        draw_debug_hud(cfg.viewport(), &input, "map debug");

        draw_text(
            &format!("FPS: {}", get_fps()),
            screen_width() - 135.0,
            55.0,
            30.0,
            RED,
        );

        next_frame().await;
    }
}
