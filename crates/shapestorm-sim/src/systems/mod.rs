//! Per-frame systems, run by `Game::tick` in a fixed order:
//! input, enemy spawner, movement, collision, lifespan, ability, snapshot.
//!
//! Systems are free functions over the entity manager. They keep no state
//! of their own; frame-to-frame state lives in components or is passed in
//! by the engine.

pub mod ability;
pub mod collision;
pub mod enemy_spawner;
pub mod input;
pub mod lifespan;
pub mod movement;
pub mod snapshot;

use shapestorm_core::enums::Tag;

use crate::entity::{Entity, EntityId};
use crate::manager::EntityManager;

/// Id of the one live player.
///
/// # Panics
/// If the player index does not hold exactly one entity.
pub fn player_id(entities: &EntityManager) -> EntityId {
    match entities.ids(Tag::Player) {
        [id] => *id,
        ids => panic!("expected exactly one player entity, found {}", ids.len()),
    }
}

pub fn player(entities: &EntityManager) -> &Entity {
    let id = player_id(entities);
    entities
        .get(id)
        .unwrap_or_else(|| panic!("player {id} is indexed but not live"))
}

pub fn player_mut(entities: &mut EntityManager) -> &mut Entity {
    let id = player_id(entities);
    entities
        .get_mut(id)
        .unwrap_or_else(|| panic!("player {id} is indexed but not live"))
}
