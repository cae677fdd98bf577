//! Lifespan decay: one frame off every `LifeSpan`; an entity dies on the
//! frame its remaining time reaches zero.

use shapestorm_core::components::LifeSpan;

use crate::manager::EntityManager;

pub fn run(entities: &mut EntityManager) {
    for entity in entities.entities_mut() {
        let Some(lifespan) = entity.get_mut::<LifeSpan>() else {
            continue;
        };
        lifespan.remaining = lifespan.remaining.saturating_sub(1);
        if lifespan.remaining == 0 {
            entity.destroy();
        }
    }
}
