//! Collision system. Three passes, in order:
//!
//! 1. walls: keep every collidable circle inside the playfield, reflecting
//!    the velocity axis of each wall it touched;
//! 2. bullets against enemies: a bullet destroys the first enemy it
//!    overlaps, original enemies burst into fragments, points are awarded;
//! 3. the player against enemies: the first overlap kills both.
//!
//! Enemies destroyed earlier in the frame stay in the tag index until the
//! next commit and still count as hits for later bullets and the player.
//!
//! All hit tests are circle overlaps, `dist² <= (r1 + r2)²`.

use glam::Vec2;

use shapestorm_core::components::{Collision, LifeSpan, Score, Shape, Transform};
use shapestorm_core::config::EnemyConfig;
use shapestorm_core::enums::Tag;
use shapestorm_core::types::Bounds;

use crate::entity::{Entity, EntityId};
use crate::manager::EntityManager;
use crate::score::ScoreBoard;
use crate::world_setup;

use super::player_id;

/// Returns `true` if the player was destroyed this frame. The caller is
/// responsible for spawning its replacement.
pub fn run(
    entities: &mut EntityManager,
    bounds: Bounds,
    enemy_config: &EnemyConfig,
    score: &mut ScoreBoard,
) -> bool {
    contain_in_walls(entities, bounds);
    bullets_against_enemies(entities, enemy_config, score);
    player_against_enemies(entities)
}

fn circle(entity: &Entity) -> Option<(Vec2, f32)> {
    let pos = entity.get::<Transform>()?.pos;
    let radius = entity.get::<Collision>()?.radius;
    Some((pos, radius))
}

fn overlaps((a, ra): (Vec2, f32), (b, rb): (Vec2, f32)) -> bool {
    a.distance_squared(b) <= (ra + rb) * (ra + rb)
}

fn contain_in_walls(entities: &mut EntityManager, bounds: Bounds) {
    for entity in entities.entities_mut() {
        let Some(radius) = entity.get::<Collision>().map(|c| c.radius) else {
            continue;
        };
        let Some(t) = entity.get_mut::<Transform>() else {
            continue;
        };

        if t.pos.x - radius < bounds.min.x {
            t.pos.x = bounds.min.x + radius;
            t.velocity.x = -t.velocity.x;
        }
        if t.pos.x + radius > bounds.max.x {
            t.pos.x = bounds.max.x - radius;
            t.velocity.x = -t.velocity.x;
        }
        if t.pos.y - radius < bounds.min.y {
            t.pos.y = bounds.min.y + radius;
            t.velocity.y = -t.velocity.y;
        }
        if t.pos.y + radius > bounds.max.y {
            t.pos.y = bounds.max.y - radius;
            t.velocity.y = -t.velocity.y;
        }
    }
}

/// First enemy overlapping `hit`, in insertion order.
fn first_enemy_hit(entities: &EntityManager, hit: (Vec2, f32)) -> Option<EntityId> {
    entities
        .entities_with_tag(Tag::Enemy)
        .find(|e| circle(e).is_some_and(|c| overlaps(hit, c)))
        .map(Entity::id)
}

fn bullets_against_enemies(
    entities: &mut EntityManager,
    enemy_config: &EnemyConfig,
    score: &mut ScoreBoard,
) {
    let bullets: Vec<EntityId> = entities.ids(Tag::Bullet).to_vec();

    for bullet_id in bullets {
        let Some(bullet) = entities.get(bullet_id).filter(|b| b.is_alive()) else {
            continue;
        };
        let Some(bullet_circle) = circle(bullet) else {
            continue;
        };
        let Some(enemy_id) = first_enemy_hit(entities, bullet_circle) else {
            continue;
        };

        if let Some(bullet) = entities.get_mut(bullet_id) {
            bullet.destroy();
        }
        let Some(enemy) = entities.get_mut(enemy_id) else {
            continue;
        };
        enemy.destroy();
        let points = enemy.get::<Score>().map_or(0, |s| s.points);
        let fragments = if enemy.has::<LifeSpan>() {
            None
        } else {
            Some((*enemy.require::<Transform>(), *enemy.require::<Shape>()))
        };

        if let Some((transform, shape)) = fragments {
            world_setup::spawn_fragments(entities, &transform, &shape, enemy_config);
        }
        score.award(points);
        tracing::debug!(%bullet_id, %enemy_id, points, score = score.score, "enemy destroyed");
    }
}

fn player_against_enemies(entities: &mut EntityManager) -> bool {
    let player_id = player_id(entities);
    let Some(player_circle) = entities.get(player_id).and_then(circle) else {
        return false;
    };
    let Some(enemy_id) = first_enemy_hit(entities, player_circle) else {
        return false;
    };

    for id in [player_id, enemy_id] {
        if let Some(entity) = entities.get_mut(id) {
            entity.destroy();
        }
    }
    tracing::info!(%player_id, %enemy_id, "player destroyed");
    true
}
