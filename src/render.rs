//! Drawing. Everything here needs a live macroquad window.

use crate::game::Game;
use crate::input::InputSnapshot;
use crate::map::{Brick, Map};
use crate::player::Player;
use crate::scene::Scene;
use crate::tile::TileTag;
use crate::ui::Button;
use macroquad::prelude::*;

const LABEL: Color = BLACK;

/// Something that can draw itself, with an optional debug overlay.
pub trait Renderable {
    /// Normal rendering
    fn render(&self);
    /// Outlines and labels
    fn render_debug(&self) {}
}

fn tile_fill(tag: TileTag) -> Color {
    match tag {
        TileTag::Wall => Color::from_rgba(40, 40, 48, 255),
        TileTag::Goal => Color::from_rgba(60, 200, 90, 255),
        TileTag::Empty => BLANK,
    }
}

fn centered_label(text: &str, rect: Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        rect.x + (rect.w - dims.width) / 2.0,
        rect.y + (rect.h + dims.offset_y) / 2.0,
        font_size,
        color,
    );
}

impl Renderable for Brick {
    fn render(&self) {
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, tile_fill(self.tile));
    }

    fn render_debug(&self) {
        if let Some(color) = self.debug_color {
            draw_rectangle_lines(self.rect.x, self.rect.y, self.rect.w, self.rect.h, 1.0, color);
            centered_label(self.tile.as_str(), self.rect, self.rect.h / 3.0, LABEL);
        }
    }
}

impl Renderable for Player {
    fn render(&self) {
        let r = self.rect();
        draw_rectangle(r.x, r.y, r.w, r.h, Color::from_rgba(240, 200, 40, 255));
    }

    fn render_debug(&self) {
        let Some(color) = self.debug_color else {
            return;
        };
        let r = self.rect();
        let g = self.grounded_box();
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, color);
        draw_rectangle_lines(g.x, g.y, g.w, g.h, 1.0, color);

        let font_size = r.h / 3.0;
        draw_text("Player", r.x, r.y + font_size, font_size, LABEL);
        draw_text(
            if self.is_grounded() { "true" } else { "false" },
            r.x,
            r.y + font_size * 2.0,
            font_size,
            LABEL,
        );
    }
}

impl Renderable for Map {
    fn render(&self) {
        for brick in self.bricks() {
            brick.render();
        }
        self.player().render();
    }

    fn render_debug(&self) {
        for brick in self.bricks() {
            brick.render_debug();
        }
        self.player().render_debug();
    }
}

impl Renderable for Button {
    fn render(&self) {
        let r = self.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, Color::from_rgba(200, 200, 200, 255));
        centered_label(&self.label, r, r.h * 0.6, LABEL);
    }

    fn render_debug(&self) {
        let r = self.rect;
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, GREEN);
    }
}

impl Renderable for Scene {
    fn render(&self) {
        for button in &self.buttons {
            button.render();
        }
    }

    fn render_debug(&self) {
        for button in &self.buttons {
            button.render_debug();
        }
    }
}

/// Viewport border, pointer marker and title.
pub fn draw_debug_hud(viewport: Vec2, input: &InputSnapshot, title: &str) {
    draw_rectangle_lines(0.0, 0.0, viewport.x, viewport.y, 1.0, RED);
    draw_circle(input.pointer.x, input.pointer.y, 2.0, BLACK);
    draw_text(title, 10.0, 30.0, 28.0, WHITE);
}

/// Semi-transparent description of the button under the pointer.
pub fn draw_button_hover(scene: &Scene, input: &InputSnapshot) {
    let Some(button) = scene.hovered(input.pointer) else {
        return;
    };
    let font_size = 16.0;
    let backdrop = Color::new(1.0, 1.0, 1.0, 0.5);
    let text = Color::new(0.0, 0.0, 0.0, 0.5);
    for (i, line) in button.describe().iter().enumerate() {
        let dims = measure_text(line, None, font_size as u16, 1.0);
        let x = input.pointer.x;
        let y = input.pointer.y + i as f32 * font_size;
        draw_rectangle(x, y, dims.width, font_size, backdrop);
        draw_text(line, x, y + dims.offset_y, font_size, text);
    }
}

/// Draw the whole frame into the logical viewport.
pub fn draw_game(game: &Game, input: &InputSnapshot) {
    let viewport = game.config().viewport();
    set_camera(&Camera2D::from_display_rect(Rect::new(
        0.0, 0.0, viewport.x, viewport.y,
    )));
    clear_background(game.scene().background);

    if let Some(map) = game.map() {
        map.render();
    }
    game.scene().render();

    if game.debug() {
        if let Some(map) = game.map() {
            map.render_debug();
        }
        game.scene().render_debug();
        draw_debug_hud(viewport, input, &game.config().title);
        draw_button_hover(game.scene(), input);
    }
    set_default_camera();
}
