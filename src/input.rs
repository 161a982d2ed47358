use macroquad::input::{
    get_keys_down, get_keys_pressed, is_mouse_button_pressed, mouse_position, KeyCode, MouseButton,
};
use macroquad::math::{vec2, Vec2};
use macroquad::window::{screen_height, screen_width};
use std::collections::HashSet;

/// Input state for one frame, with the pointer already in logical coordinates.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Keys currently held
    pub held: HashSet<KeyCode>,
    /// Keys that went down this frame
    pub pressed: HashSet<KeyCode>,
    /// Pointer in internal-resolution coordinates
    pub pointer: Vec2,
    /// Left button went down this frame
    pub clicked: bool,
}

/// Actions derived from an [`InputSnapshot`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Commands {
    /// Jump if grounded
    pub jump: bool,
    /// Flip debug overlays
    pub toggle_debug: bool,
    /// Leave the game
    pub quit: bool,
    /// Left click at this logical position
    pub click: Option<Vec2>,
}

/// Rescale a window-space point into the logical viewport.
pub fn to_logical(physical: Vec2, screen: Vec2, internal: Vec2) -> Vec2 {
    if screen.x <= 0.0 || screen.y <= 0.0 {
        return physical;
    }
    physical * internal / screen
}

impl InputSnapshot {
    /// Poll macroquad for the current frame.
    pub fn poll(internal: Vec2) -> Self {
        let (mx, my) = mouse_position();
        let screen = vec2(screen_width(), screen_height());
        Self {
            held: get_keys_down(),
            pressed: get_keys_pressed(),
            pointer: to_logical(vec2(mx, my), screen, internal),
            clicked: is_mouse_button_pressed(MouseButton::Left),
        }
    }

    /// Map raw keys to game actions.
    ///
    /// Ctrl+Space toggles debug and is not a jump.
    pub fn commands(&self) -> Commands {
        let ctrl = self.held.contains(&KeyCode::LeftControl)
            || self.held.contains(&KeyCode::RightControl);
        let space = self.pressed.contains(&KeyCode::Space);
        Commands {
            jump: space && !ctrl,
            toggle_debug: space && ctrl,
            quit: self.held.contains(&KeyCode::Escape) || self.pressed.contains(&KeyCode::Escape),
            click: self.clicked.then_some(self.pointer),
        }
    }
}
