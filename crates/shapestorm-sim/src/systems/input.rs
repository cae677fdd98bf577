//! Applies queued input events to the player's intent flags and to the
//! game phase.
//!
//! Runs every frame, paused or not, so a key released during a pause is
//! not stuck down on resume.

use std::collections::VecDeque;

use glam::Vec2;

use shapestorm_core::commands::{InputEvent, Key, MouseButton};
use shapestorm_core::components::Input;
use shapestorm_core::enums::GamePhase;

use crate::manager::EntityManager;

use super::player_mut;

pub fn run(
    events: &mut VecDeque<InputEvent>,
    entities: &mut EntityManager,
    phase: &mut GamePhase,
    pointer: &mut Vec2,
) {
    if events.is_empty() {
        return;
    }
    let input = player_mut(entities).require_mut::<Input>();

    while let Some(event) = events.pop_front() {
        match event {
            InputEvent::KeyDown { key } => match key {
                Key::Pause => toggle_pause(phase),
                Key::Escape => stop(phase),
                _ => set_direction(input, key, true),
            },
            InputEvent::KeyUp { key } => set_direction(input, key, false),
            InputEvent::MouseDown { button } => set_button(input, button, true),
            InputEvent::MouseUp { button } => set_button(input, button, false),
            InputEvent::PointerMoved { position } => *pointer = position,
            InputEvent::Quit => stop(phase),
        }
    }
}

fn set_direction(input: &mut Input, key: Key, pressed: bool) {
    match key {
        Key::Up => input.up = pressed,
        Key::Down => input.down = pressed,
        Key::Left => input.left = pressed,
        Key::Right => input.right = pressed,
        Key::Pause | Key::Escape => {}
    }
}

fn set_button(input: &mut Input, button: MouseButton, pressed: bool) {
    match button {
        MouseButton::Left => input.shoot = pressed,
        MouseButton::Right => input.ability = pressed,
    }
}

fn toggle_pause(phase: &mut GamePhase) {
    *phase = match *phase {
        GamePhase::Active => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Active,
        GamePhase::Stopped => return,
    };
    tracing::info!(phase = ?*phase, "pause toggled");
}

fn stop(phase: &mut GamePhase) {
    if *phase != GamePhase::Stopped {
        tracing::info!("quit requested");
        *phase = GamePhase::Stopped;
    }
}
