//! Keyboard input tracking and the per-frame pan-intent snapshot the
//! scene session consumes.
//!
//! The rendering shell forwards winit key events into [`KeyboardState`]
//! and hands the session a [`PanInput`] snapshot each frame; no component
//! installs global listeners or polls input on its own.

pub mod keyboard;
pub mod pan;

pub use keyboard::{KeyboardState, RawKeyEvent};
pub use pan::PanInput;
