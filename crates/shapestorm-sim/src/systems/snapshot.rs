//! Render system: builds the `FrameSnapshot` handed to the frontend.
//!
//! `build_snapshot` is read-only. The visual spin is the one piece of render
//! state that lives on entities, and it is advanced separately by
//! `advance_rotation`, only on simulated frames.

use shapestorm_core::components::{LifeSpan, Shape, Transform};
use shapestorm_core::config::GameConfig;
use shapestorm_core::enums::GamePhase;
use shapestorm_core::state::{FrameSnapshot, HudView, ShapeView};

use crate::ability::AbilityState;
use crate::entity::Entity;
use crate::manager::EntityManager;
use crate::score::ScoreBoard;

/// Spin every drawable entity by its per-frame angle.
pub fn advance_rotation(entities: &mut EntityManager) {
    for entity in entities.entities_mut() {
        let Some(angle) = entity.get::<Transform>().map(|t| t.angle) else {
            continue;
        };
        if let Some(shape) = entity.get_mut::<Shape>() {
            shape.rotation = (shape.rotation + angle) % 360.0;
        }
    }
}

pub fn build_snapshot(
    entities: &EntityManager,
    config: &GameConfig,
    frame: u64,
    phase: GamePhase,
    score: &ScoreBoard,
    ability: &AbilityState,
) -> FrameSnapshot {
    FrameSnapshot {
        frame,
        phase,
        background: config.window.color,
        shapes: entities.entities().iter().filter_map(shape_view).collect(),
        hud: HudView {
            score_text: score.hud_text(),
            ability_text: ability.hud_text(config.window.framerate),
            text_color: config.score.color,
            paused: phase == GamePhase::Paused,
        },
    }
}

fn shape_view(entity: &Entity) -> Option<ShapeView> {
    let shape = entity.get::<Shape>()?;
    let transform = entity.get::<Transform>()?;

    let color = match entity.get::<LifeSpan>() {
        Some(lifespan) => {
            let alpha = 255.0 * lifespan.fraction_left();
            shape.fill.with_alpha(alpha as u8)
        }
        None => shape.fill,
    };

    Some(ShapeView {
        tag: entity.tag(),
        position: transform.pos,
        rotation: shape.rotation,
        radius: shape.radius,
        sides: shape.sides,
        color,
    })
}
