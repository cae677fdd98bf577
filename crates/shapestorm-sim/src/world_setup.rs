//! Entity spawn factories.
//!
//! Each factory stages one entity (or a burst of them) in the manager with
//! its full component bundle. Nothing spawned here is visible before the
//! next `EntityManager::update()`.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use shapestorm_core::components::{Collision, Input, LifeSpan, Score, Shape, Transform};
use shapestorm_core::config::{BulletConfig, EnemyConfig, PlayerConfig};
use shapestorm_core::constants::{
    BULLET_POINT_COUNT, ENEMY_SCORE_PER_SIDE, ENEMY_SPAWN_SAFETY_FACTOR, FRAGMENT_SCORE_PER_SIDE,
};
use shapestorm_core::enums::Tag;
use shapestorm_core::types::{Bounds, Rgba};

use crate::entity::EntityId;
use crate::manager::EntityManager;

/// Spawn the player at the origin, at rest.
pub fn spawn_player(entities: &mut EntityManager, config: &PlayerConfig) -> EntityId {
    let player = entities.add_entity(Tag::Player);
    player.add(Shape::new(config.size, config.sides, config.color));
    player.add(Collision::new(config.size));
    player.add(Transform::new(Vec2::ZERO, Vec2::ZERO, config.rotation));
    player.add(Input::default());
    tracing::debug!(id = %player.id(), "spawned player");
    player.id()
}

/// Spawn an original enemy somewhere in `bounds`, clear of the player.
///
/// Draw order from `rng` is fixed (position, velocity, colour, sides) so a
/// seed always reproduces the same enemy.
pub fn spawn_enemy(
    entities: &mut EntityManager,
    rng: &mut ChaCha8Rng,
    config: &EnemyConfig,
    bounds: Bounds,
    player_pos: Vec2,
    player_radius: f32,
) -> EntityId {
    let safety_sq = ENEMY_SPAWN_SAFETY_FACTOR * player_radius * player_radius;
    let sample = |rng: &mut ChaCha8Rng| {
        Vec2::new(
            rng.gen_range(bounds.min.x..=bounds.max.x),
            rng.gen_range(bounds.min.y..=bounds.max.y),
        )
    };
    let mut pos = sample(rng);
    while pos.distance_squared(player_pos) <= safety_sq {
        pos = sample(rng);
    }

    // Two independent speed draws, normalised: direction is not uniform
    // over the circle and the magnitude is always 1.
    let vx = rng.gen_range(config.speed_min..=config.speed_max);
    let vy = rng.gen_range(config.speed_min..=config.speed_max);
    let velocity = Vec2::new(vx, vy).normalize_or_zero();

    let fill = Rgba::opaque(rng.gen(), rng.gen(), rng.gen());
    let sides = rng.gen_range(config.sides_min..=config.sides_max);

    let enemy = entities.add_entity(Tag::Enemy);
    enemy.add(Shape::new(config.size, sides, fill));
    enemy.add(Collision::new(config.size));
    enemy.add(Transform::new(pos, velocity, config.rotation));
    enemy.add(Score::new(ENEMY_SCORE_PER_SIDE * sides));
    tracing::debug!(id = %enemy.id(), sides, x = pos.x, y = pos.y, "spawned enemy");
    enemy.id()
}

/// Burst a destroyed enemy into `parent.sides` short-lived fragments fanned
/// out evenly around its position at the parent's speed.
pub fn spawn_fragments(
    entities: &mut EntityManager,
    parent_transform: &Transform,
    parent_shape: &Shape,
    config: &EnemyConfig,
) {
    let n = parent_shape.sides;
    if n == 0 {
        return;
    }
    let speed = parent_transform.velocity.length();
    let step = 360.0 / n as f32;

    for i in 0..n {
        let direction = Vec2::from_angle((i as f32 * step).to_radians());
        let fragment = entities.add_entity(Tag::Enemy);
        fragment.add(Shape::new(config.child_size, n, parent_shape.fill));
        fragment.add(Collision::new(config.child_size));
        fragment.add(Transform::new(
            parent_transform.pos,
            direction * speed,
            config.rotation,
        ));
        fragment.add(LifeSpan::new(config.child_lifespan));
        fragment.add(Score::new(FRAGMENT_SCORE_PER_SIDE * n));
    }
    tracing::debug!(count = n, "spawned fragments");
}

/// Fire a bullet from `origin` toward `target`. A target on top of the
/// origin gives a bullet at rest.
pub fn spawn_bullet(
    entities: &mut EntityManager,
    origin: Vec2,
    target: Vec2,
    config: &BulletConfig,
) -> EntityId {
    let velocity = (target - origin).normalize_or_zero() * config.speed;
    let bullet = entities.add_entity(Tag::Bullet);
    bullet.add(Shape::new(config.radius, BULLET_POINT_COUNT, config.color));
    bullet.add(Collision::new(config.radius));
    bullet.add(Transform::new(origin, velocity, 0.0));
    bullet.add(LifeSpan::new(config.lifespan));
    bullet.id()
}
