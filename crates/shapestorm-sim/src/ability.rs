//! Timed player buff ("berserk"): while active, a held shoot button fires
//! every frame.
//!
//! ```text
//! Idle --trigger--> Active(duration) --0--> Cooldown(cooldown) --0--> Idle
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityState {
    #[default]
    Idle,
    Active { remaining: u32 },
    Cooldown { remaining: u32 },
}

impl AbilityState {
    pub fn is_active(&self) -> bool {
        matches!(self, AbilityState::Active { .. })
    }

    /// Advance one frame.
    ///
    /// A trigger is honoured on the frame the cooldown runs out, and the
    /// trigger frame already counts as the first active frame.
    pub fn step(&mut self, triggered: bool, duration: u32, cooldown: u32) {
        if let AbilityState::Cooldown { remaining } = self {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                *self = AbilityState::Idle;
            }
        }

        if *self == AbilityState::Idle && triggered {
            *self = AbilityState::Active {
                remaining: duration,
            };
        }

        if let AbilityState::Active { remaining } = self {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                *self = if cooldown == 0 {
                    AbilityState::Idle
                } else {
                    AbilityState::Cooldown {
                        remaining: cooldown,
                    }
                };
            }
        }
    }

    /// Status line for the HUD. Cooldown is shown in seconds at `framerate`.
    pub fn hud_text(&self, framerate: u32) -> String {
        match self {
            AbilityState::Idle => "Ability\nOK".to_string(),
            AbilityState::Active { .. } => "Ability\nIn Use".to_string(),
            AbilityState::Cooldown { remaining } => {
                let secs = *remaining as f32 / framerate.max(1) as f32;
                format!("Ability\nIn {secs:.1}s")
            }
        }
    }
}
