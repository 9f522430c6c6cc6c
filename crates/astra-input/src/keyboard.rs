//! Frame-coherent keyboard state tracker.
//!
//! [`KeyboardState`] accumulates winit [`KeyEvent`]s during a frame and
//! answers two questions for any physical key: is it held (pan keys), and
//! was it just pressed this frame (view/label toggles).
//!
//! Physical key codes are used throughout so that WASD navigation works
//! identically regardless of the user's keyboard layout.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Minimal description of a key event, decoupled from winit for tests.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is an OS auto-repeat event.
    pub repeat: bool,
}

/// Tracks per-frame keyboard state using physical (scan-code) keys.
///
/// Forward every [`KeyEvent`] to [`process_event`](Self::process_event),
/// query with [`is_pressed`](Self::is_pressed) /
/// [`just_pressed`](Self::just_pressed), and call
/// [`clear_transients`](Self::clear_transients) at the end of each frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<PhysicalKey>,
    just_pressed: HashSet<PhysicalKey>,
}

impl KeyboardState {
    /// Creates a tracker with no keys pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`], updating internal state.
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    /// Processes a [`RawKeyEvent`]. Repeat events are ignored so held keys
    /// register exactly one press edge.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.pressed.insert(event.key);
                self.just_pressed.insert(event.key);
            }
            ElementState::Released => {
                self.pressed.remove(&event.key);
            }
        }
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_pressed(&self, key: PhysicalKey) -> bool {
        self.pressed.contains(&key)
    }

    /// Returns `true` only during the frame the key transitioned to pressed.
    #[must_use]
    pub fn just_pressed(&self, key: PhysicalKey) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Clears the `just_pressed` set. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
    }
}
