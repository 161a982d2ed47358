use crate::entity::Clickable;
use crate::scene::GameState;
use macroquad::math::{Rect, Vec2};

/// Text button that requests a state change when clicked.
#[derive(Debug, Clone)]
pub struct Button {
    /// Caption
    pub label: String,
    /// Screen area
    pub rect: Rect,
    /// Where clicking leads
    pub target: Option<GameState>,
}

impl Button {
    /// Button at `topleft` with the given `size`.
    pub fn new(label: &str, topleft: Vec2, size: Vec2, target: GameState) -> Self {
        Self {
            label: label.to_owned(),
            rect: Rect::new(topleft.x, topleft.y, size.x, size.y),
            target: Some(target),
        }
    }

    /// Debug description, one line per field.
    pub fn describe(&self) -> Vec<String> {
        let r = self.rect;
        vec![
            format!("Button {:?}", self.label),
            format!("rect=({}, {}), ({}, {})", r.x, r.y, r.w, r.h),
            format!("target={}", self.target.map_or("none", |t| t.as_str())),
        ]
    }
}

impl Clickable for Button {
    fn click_box(&self) -> Rect {
        self.rect
    }

    fn on_click(&self) -> Option<GameState> {
        self.target
    }
}
