//! Gameplay constants that are not exposed through the config file.

/// Enemies never spawn closer to the player than
/// `sqrt(ENEMY_SPAWN_SAFETY_FACTOR) * player_radius`.
pub const ENEMY_SPAWN_SAFETY_FACTOR: f32 = 12.0;

/// Score of an original enemy, per polygon side.
pub const ENEMY_SCORE_PER_SIDE: u32 = 100;

/// Score of a fragment spawned from a destroyed enemy, per polygon side.
pub const FRAGMENT_SCORE_PER_SIDE: u32 = 200;

/// Bullets are drawn as near-circles.
pub const BULLET_POINT_COUNT: u32 = 36;

/// Banner drawn over the playfield while paused.
pub const PAUSE_BANNER: &str = "PAUSE";

/// Config file used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config/game.toml";
