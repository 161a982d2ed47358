use macroquad::prelude::*;
use space_platformer::render::draw_game;
use space_platformer::{Config, Game, InputSnapshot};

fn load_config() -> anyhow::Result<Config> {
    match std::env::args().nth(1) {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn window_conf() -> Conf {
    let cfg = load_config().unwrap_or_default();
    let [w, h] = cfg.external_resolution;
    Conf {
        window_title: cfg.title,
        window_width: w as i32,
        window_height: h as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut game = match load_config().and_then(Game::new) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e:#}");
            return;
        }
    };
    let viewport = game.config().viewport();
    log::info!("starting in {}", game.state());

    loop {
        let input = InputSnapshot::poll(viewport);
        match game.tick(&input, get_frame_time()) {
            Ok(report) if report.quit => break,
            Ok(_) => {}
            // stay in the current scene, the level is unusable
            Err(e) => log::error!("{e:#}"),
        }

        draw_game(&game, &input);
        next_frame().await;
    }
}
