//! Movement system.
//!
//! Turns the player's direction flags into a velocity of exactly the
//! configured speed, fires a bullet if shoot is held, then moves every
//! entity one Euler step (`pos += velocity`, no delta time).

use glam::Vec2;

use shapestorm_core::components::{Input, Transform};
use shapestorm_core::config::{BulletConfig, PlayerConfig};

use crate::manager::EntityManager;
use crate::world_setup;

use super::player_mut;

/// `pointer` is the shot target in world coordinates. While
/// `continuous_fire` is set the shoot flag survives the shot, so a held
/// button fires every frame.
pub fn run(
    entities: &mut EntityManager,
    player_config: &PlayerConfig,
    bullet_config: &BulletConfig,
    pointer: Vec2,
    continuous_fire: bool,
) {
    let player = player_mut(entities);
    let player_id = player.id();
    let input = player.require_mut::<Input>();
    let dir = direction(input);
    let shoot = input.shoot;
    if shoot && !continuous_fire {
        input.shoot = false;
    }

    let transform = player.require_mut::<Transform>();
    transform.velocity += dir;
    if transform.velocity.length_squared() != 0.0 {
        transform.velocity = transform.velocity.normalize() * player_config.speed;
    }
    let origin = transform.pos;

    if shoot {
        world_setup::spawn_bullet(entities, origin, pointer, bullet_config);
    }

    for entity in entities.entities_mut() {
        if let Some(transform) = entity.get_mut::<Transform>() {
            transform.pos += transform.velocity;
        }
    }

    if let Some(player) = entities.get_mut(player_id) {
        player.require_mut::<Transform>().velocity = Vec2::ZERO;
    }
}

/// Sum of unit contributions of the held direction keys (+y is down).
fn direction(input: &Input) -> Vec2 {
    let mut d = Vec2::ZERO;
    if input.up {
        d.y -= 1.0;
    }
    if input.down {
        d.y += 1.0;
    }
    if input.left {
        d.x -= 1.0;
    }
    if input.right {
        d.x += 1.0;
    }
    d
}
