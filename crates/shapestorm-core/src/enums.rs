//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Coarse entity category used for indexed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Player,
    Enemy,
    Bullet,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Player => "player",
            Tag::Enemy => "enemy",
            Tag::Bullet => "bullet",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level run state of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Systems run every frame.
    #[default]
    Active,
    /// Input is still applied and frames are still rendered, but no
    /// simulation system runs.
    Paused,
    /// Quit was requested; the frame loop should exit.
    Stopped,
}
