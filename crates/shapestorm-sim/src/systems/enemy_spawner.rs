//! Enemy spawner: one new enemy every `spawn_rate` frames.

use rand_chacha::ChaCha8Rng;

use shapestorm_core::components::{Collision, Transform};
use shapestorm_core::config::EnemyConfig;
use shapestorm_core::types::Bounds;

use crate::manager::EntityManager;
use crate::world_setup;

use super::player;

/// Frames since the last spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnTimer {
    frames: u32,
}

impl SpawnTimer {
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

pub fn run(
    timer: &mut SpawnTimer,
    entities: &mut EntityManager,
    rng: &mut ChaCha8Rng,
    config: &EnemyConfig,
    bounds: Bounds,
) {
    timer.frames += 1;
    if timer.frames < config.spawn_rate {
        return;
    }
    timer.frames = 0;

    let player = player(entities);
    let player_pos = player.require::<Transform>().pos;
    let player_radius = player.require::<Collision>().radius;
    world_setup::spawn_enemy(entities, rng, config, bounds, player_pos, player_radius);
}
