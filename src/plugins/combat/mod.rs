//! Combat plugin: the single place where damage turns into lost hit points.
//!
//! ```text
//! FixedUpdate      monsters write DamageRequest (player target)
//! FixedPostUpdate  spell collisions write DamageRequest (monster target)
//!                  apply_damage  -> Health, writes Died once per depletion
//!                  death handlers (monsters/player) read Died
//! ```
//!
//! Producers never touch `Health` directly; `apply_damage` is the only writer.

use bevy::prelude::*;

use crate::common::state::GameState;

pub mod health;

pub use health::Health;

/// Intent: hurt `target` by `amount` raw damage (before defense).
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct DamageRequest {
    pub target: Entity,
    pub amount: f32,
}

/// `entity` just dropped to zero hit points.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Died {
    pub entity: Entity,
}

/// System set for damage resolution so other plugins can order against it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplyDamage;

pub fn plugin(app: &mut App) {
    app.add_message::<DamageRequest>()
        .add_message::<Died>()
        .add_systems(
            FixedPostUpdate,
            apply_damage
                .in_set(ApplyDamage)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Apply every queued damage request.
///
/// Targets that are gone or already depleted are skipped, so a single death is
/// reported even when several hits land in the same step.
pub fn apply_damage(
    mut requests: MessageReader<DamageRequest>,
    mut q_health: Query<&mut Health>,
    mut died: MessageWriter<Died>,
) {
    for req in requests.read() {
        let Ok(mut health) = q_health.get_mut(req.target) else {
            debug!("damage target {:?} has no Health", req.target);
            continue;
        };

        if health.is_depleted() {
            continue;
        }

        health.take_damage(req.amount);

        if health.is_depleted() {
            died.write(Died { entity: req.target });
        }
    }
}

#[cfg(test)]
mod tests;
