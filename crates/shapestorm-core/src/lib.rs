//! Core types and definitions for SHAPESTORM.
//!
//! This crate defines the vocabulary shared by the simulation and the
//! frontend: components, configuration, input events, frame snapshots and
//! constants. It has no dependency on a terminal or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
