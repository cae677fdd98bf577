//! Simulation engine for SHAPESTORM.
//!
//! Owns the entity store, runs the per-frame systems in a fixed order and
//! produces `FrameSnapshot`s for the frontend. Completely headless, so a
//! seeded game replays deterministically in tests.

pub mod ability;
pub mod engine;
pub mod entity;
pub mod manager;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::Game;
pub use entity::{Component, Entity, EntityId};
pub use manager::EntityManager;
pub use shapestorm_core as core;

#[cfg(test)]
mod tests;
