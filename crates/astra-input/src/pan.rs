//! Per-frame directional pan intent.

use glam::Vec2;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::KeyboardState;

/// Snapshot of the directional navigation keys for one frame.
///
/// The scene session reads this instead of polling any global input
/// state; the shell builds one per frame from whatever input source it
/// owns and passes it into the session's tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanInput {
    /// Pan up (W).
    pub up: bool,
    /// Pan down (S).
    pub down: bool,
    /// Pan left (A).
    pub left: bool,
    /// Pan right (D).
    pub right: bool,
}

impl PanInput {
    /// No keys held.
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Sample the WASD keys from a keyboard tracker.
    pub fn from_keyboard(keyboard: &KeyboardState) -> Self {
        Self {
            up: keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyW)),
            down: keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyS)),
            left: keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyA)),
            right: keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyD)),
        }
    }

    /// Net pan axis: +x right, +y up. Opposite keys cancel.
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.up {
            axis.y += 1.0;
        }
        if self.down {
            axis.y -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        axis
    }

    /// Whether any directional key is held.
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}
