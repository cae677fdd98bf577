//! The `Game` orchestrator.
//!
//! `Game` owns the configuration, the entity store, the RNG and the score
//! and ability state, and runs the systems in a fixed order once per frame.
//! It has no frontend dependency; a seeded game fed the same inputs
//! produces the same snapshots.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shapestorm_core::commands::InputEvent;
use shapestorm_core::config::GameConfig;
use shapestorm_core::enums::GamePhase;
use shapestorm_core::state::FrameSnapshot;
use shapestorm_core::types::Bounds;

use crate::ability::AbilityState;
use crate::manager::EntityManager;
use crate::score::ScoreBoard;
use crate::systems;
use crate::systems::enemy_spawner::SpawnTimer;
use crate::world_setup;

pub struct Game {
    config: GameConfig,
    bounds: Bounds,
    entities: EntityManager,
    rng: ChaCha8Rng,
    phase: GamePhase,
    /// Simulated (unpaused) frames so far.
    frame: u64,
    /// Shot target in world coordinates.
    pointer: Vec2,
    event_queue: VecDeque<InputEvent>,
    spawn_timer: SpawnTimer,
    score: ScoreBoard,
    ability: AbilityState,
}

impl Game {
    /// Start a game with the player at the origin. The player is live
    /// immediately, before the first `tick()`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut entities = EntityManager::new();
        world_setup::spawn_player(&mut entities, &config.player);
        entities.update();

        tracing::info!(seed, width = config.window.width, height = config.window.height, "game started");
        Self {
            bounds: config.window.bounds(),
            config,
            entities,
            rng: ChaCha8Rng::seed_from_u64(seed),
            phase: GamePhase::Active,
            frame: 0,
            pointer: Vec2::ZERO,
            event_queue: VecDeque::new(),
            spawn_timer: SpawnTimer::default(),
            score: ScoreBoard::default(),
            ability: AbilityState::Idle,
        }
    }

    /// Queue an input event for the next `tick()`.
    pub fn queue_event(&mut self, event: InputEvent) {
        self.event_queue.push_back(event);
    }

    pub fn queue_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.event_queue.extend(events);
    }

    /// Run one frame and return what it looks like.
    ///
    /// The entity manager commits first, then queued input is applied. The
    /// simulation systems only run while the game is `Active`; the snapshot
    /// is built regardless.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.entities.update();
        systems::input::run(
            &mut self.event_queue,
            &mut self.entities,
            &mut self.phase,
            &mut self.pointer,
        );

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.frame += 1;
        }

        self.snapshot()
    }

    fn run_systems(&mut self) {
        let config = &self.config;

        systems::enemy_spawner::run(
            &mut self.spawn_timer,
            &mut self.entities,
            &mut self.rng,
            &config.enemy,
            self.bounds,
        );
        systems::movement::run(
            &mut self.entities,
            &config.player,
            &config.bullet,
            self.pointer,
            self.ability.is_active(),
        );
        let player_hit = systems::collision::run(
            &mut self.entities,
            self.bounds,
            &config.enemy,
            &mut self.score,
        );
        if player_hit {
            self.respawn_player();
        }
        systems::lifespan::run(&mut self.entities);
        systems::ability::run(
            &mut self.ability,
            &mut self.entities,
            &self.config.ability,
            self.config.player.color,
        );
        systems::snapshot::advance_rotation(&mut self.entities);
    }

    fn respawn_player(&mut self) {
        world_setup::spawn_player(&mut self.entities, &self.config.player);
        self.score.reset();
        self.ability = AbilityState::Idle;
        tracing::info!(highscore = self.score.highscore, "player respawned");
    }

    /// Snapshot of the current state without advancing.
    pub fn snapshot(&self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(
            &self.entities,
            &self.config,
            self.frame,
            self.phase,
            &self.score,
            &self.ability,
        )
    }

    pub fn is_running(&self) -> bool {
        self.phase != GamePhase::Stopped
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn ability(&self) -> AbilityState {
        self.ability
    }

    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    /// Direct entity access for setting up test scenarios.
    #[cfg(test)]
    pub fn entities_mut(&mut self) -> &mut EntityManager {
        &mut self.entities
    }
}
