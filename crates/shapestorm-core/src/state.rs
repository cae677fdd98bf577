//! Frame snapshot: the complete visible state handed to the renderer after
//! each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, Tag};
use crate::types::Rgba;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Number of simulated (unpaused) frames so far.
    pub frame: u64,
    pub phase: GamePhase,
    pub background: Rgba,
    /// Drawn in entity insertion order.
    pub shapes: Vec<ShapeView>,
    pub hud: HudView,
}

/// One drawable polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeView {
    pub tag: Tag,
    pub position: Vec2,
    /// Degrees.
    pub rotation: f32,
    pub radius: f32,
    pub sides: u32,
    /// Alpha already faded for entities with a limited lifespan.
    pub color: Rgba,
}

/// Text overlays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    /// `"Score: N\nHighscore: M"`.
    pub score_text: String,
    /// `"Ability\nOK"`, `"Ability\nIn Use"` or `"Ability\nIn 1.5s"`.
    pub ability_text: String,
    pub text_color: Rgba,
    pub paused: bool,
}
