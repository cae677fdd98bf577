//! Ability system: steps the ability state machine from the player's
//! trigger flag and tints the player while the ability is active.
//!
//! The tint starts at the ability colour and fades back to the player's
//! base colour as the active time runs out.

use shapestorm_core::components::{Input, Shape};
use shapestorm_core::config::AbilityConfig;
use shapestorm_core::types::Rgba;

use crate::ability::AbilityState;
use crate::manager::EntityManager;

use super::player_mut;

pub fn run(
    state: &mut AbilityState,
    entities: &mut EntityManager,
    config: &AbilityConfig,
    base_color: Rgba,
) {
    let player = player_mut(entities);
    // A player killed this frame has already had its replacement staged
    // and the ability reset.
    if !player.is_alive() {
        return;
    }

    let triggered = player.require::<Input>().ability;
    let before = *state;
    state.step(triggered, config.duration, config.cooldown);
    if std::mem::discriminant(&before) != std::mem::discriminant(state) {
        tracing::debug!(from = ?before, to = ?*state, "ability transition");
    }

    player.require_mut::<Shape>().fill = match *state {
        AbilityState::Active { remaining } => {
            let t = remaining as f32 / config.duration as f32;
            base_color.lerp(config.color, t)
        }
        AbilityState::Idle | AbilityState::Cooldown { .. } => base_color,
    };
}
