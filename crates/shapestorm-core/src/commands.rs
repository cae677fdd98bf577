//! Input events fed from the frontend into the simulation.
//!
//! Events are queued and applied at the start of the next frame, after the
//! entity manager has committed its pending changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to. The frontend decides which physical
/// keys map onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Toggles pause on press.
    Pause,
    /// Stops the game on press.
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Shoot.
    Left,
    /// Trigger the ability.
    Right,
}

/// Discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    KeyDown { key: Key },
    KeyUp { key: Key },
    MouseDown { button: MouseButton },
    MouseUp { button: MouseButton },
    /// Pointer moved; position is in world coordinates.
    PointerMoved { position: Vec2 },
    /// The window (or terminal) asked to close.
    Quit,
}
