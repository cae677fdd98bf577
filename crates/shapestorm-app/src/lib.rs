//! SHAPESTORM terminal frontend.
//!
//! Wires the headless simulation to a crossterm terminal: input
//! translation, the fixed-rate frame loop and a character-cell renderer.

pub mod game_loop;
pub mod input;
pub mod render;
pub mod terminal;
pub mod viewport;

pub use shapestorm_core as core;
