//! Entity components.
//!
//! Components are plain data. Game logic lives in systems, not here; the
//! only methods are constructors that check the invariants a component
//! must hold from the moment it exists.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::Rgba;

/// Position and per-frame velocity in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub pos: Vec2,
    /// Displacement applied once per frame (no delta-time scaling).
    pub velocity: Vec2,
    /// Visual spin in degrees per frame.
    pub angle: f32,
}

impl Transform {
    pub fn new(pos: Vec2, velocity: Vec2, angle: f32) -> Self {
        Self {
            pos,
            velocity,
            angle,
        }
    }
}

/// Remaining lifetime in frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeSpan {
    pub total: u32,
    pub remaining: u32,
}

impl LifeSpan {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
        }
    }

    /// Fraction of the lifetime still left, in `[0, 1]`.
    pub fn fraction_left(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.remaining as f32 / self.total as f32
        }
    }
}

/// Player intent flags, written by input handling and consumed by the
/// movement and ability systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    pub ability: bool,
}

/// Circular hit area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Collision {
    pub radius: f32,
}

impl Collision {
    pub fn new(radius: f32) -> Self {
        assert!(radius >= 0.0, "collision radius must be non-negative, got {radius}");
        Self { radius }
    }
}

/// Points awarded when a bullet destroys the entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new(points: u32) -> Self {
        Self { points }
    }
}

/// Regular-polygon visual. `sides` is also the number of fragments an
/// original enemy breaks into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub radius: f32,
    pub sides: u32,
    pub fill: Rgba,
    /// Accumulated visual rotation in degrees.
    pub rotation: f32,
}

impl Shape {
    pub fn new(radius: f32, sides: u32, fill: Rgba) -> Self {
        Self {
            radius,
            sides,
            fill,
            rotation: 0.0,
        }
    }
}
