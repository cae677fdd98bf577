//! Game configuration, loaded once at startup from a TOML file.
//!
//! Every section is required. A config that fails to parse or validate is
//! fatal: the game never runs with guessed defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::ENEMY_SPAWN_SAFETY_FACTOR;
use crate::types::{Bounds, Rgba};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Frames per second; also the tick rate of the simulation.
    pub framerate: u32,
    /// Background colour.
    pub color: Rgba,
}

impl WindowConfig {
    /// Playfield rectangle, centred on the origin.
    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.width as f32, self.height as f32)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    pub sides: u32,
    pub size: f32,
    /// Units per frame.
    pub speed: f32,
    /// Spin in degrees per frame.
    pub rotation: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnemyConfig {
    pub sides_min: u32,
    pub sides_max: u32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub rotation: f32,
    pub size: f32,
    pub child_size: f32,
    /// Frames.
    pub child_lifespan: u32,
    /// Frames between spawns.
    pub spawn_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BulletConfig {
    pub speed: f32,
    pub radius: f32,
    /// Frames.
    pub lifespan: u32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreConfig {
    /// Font for graphical frontends. The terminal frontend draws with the
    /// terminal's own font.
    pub font: String,
    pub size: u32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AbilityConfig {
    /// Frames the ability stays active.
    pub duration: u32,
    /// Frames before it can be triggered again.
    pub cooldown: u32,
    pub color: Rgba,
}

/// Complete, immutable game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
    pub score: ScoreConfig,
    pub ability: AbilityConfig,
}

impl GameConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the preconditions the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if w.width == 0 || w.height == 0 {
            return Err(invalid("window.width/height", "playfield must be non-empty"));
        }
        if w.framerate == 0 {
            return Err(invalid("window.framerate", "must be at least 1"));
        }

        let p = &self.player;
        if p.sides < 3 {
            return Err(invalid("player.sides", format!("need at least 3, got {}", p.sides)));
        }
        if !(p.size > 0.0) {
            return Err(invalid("player.size", "must be positive"));
        }
        if !(p.speed >= 0.0) {
            return Err(invalid("player.speed", "must be non-negative"));
        }

        let e = &self.enemy;
        if e.sides_min < 3 {
            return Err(invalid("enemy.sides_min", format!("need at least 3, got {}", e.sides_min)));
        }
        if e.sides_min > e.sides_max {
            return Err(invalid(
                "enemy.sides_max",
                format!("sides_min {} exceeds sides_max {}", e.sides_min, e.sides_max),
            ));
        }
        if !(e.speed_min <= e.speed_max) {
            return Err(invalid(
                "enemy.speed_max",
                format!("speed_min {} exceeds speed_max {}", e.speed_min, e.speed_max),
            ));
        }
        if !(e.size >= 0.0) || !(e.child_size >= 0.0) {
            return Err(invalid("enemy.size/child_size", "must be non-negative"));
        }

        // Enemy placement resamples until it lands outside the safety radius.
        // Some point of the playfield is always at least half a diagonal away
        // from the player, so this is enough for the sampling to terminate.
        let safety_sq = ENEMY_SPAWN_SAFETY_FACTOR * p.size * p.size;
        let half_diagonal_sq = (w.width as f32).powi(2) / 4.0 + (w.height as f32).powi(2) / 4.0;
        if safety_sq >= half_diagonal_sq {
            return Err(invalid(
                "player.size",
                "player is too large for the playfield; enemies could never spawn",
            ));
        }

        if !(self.bullet.radius >= 0.0) {
            return Err(invalid("bullet.radius", "must be non-negative"));
        }
        if self.ability.duration == 0 {
            return Err(invalid("ability.duration", "must be at least 1 frame"));
        }

        Ok(())
    }
}
