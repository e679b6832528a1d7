use bevy::prelude::*;

use super::components::{PooledSpell, SpellLifetime, SpellState};

/// Active spells whose lifetime ran out are handed to the return commit.
pub fn expire_spells(
    time: Res<Time<Fixed>>,
    mut q: Query<(&mut SpellLifetime, &mut SpellState), With<PooledSpell>>,
) {
    for (mut lifetime, mut state) in &mut q {
        if *state != SpellState::Active {
            continue;
        }

        lifetime.tick(time.delta());
        if lifetime.is_finished() {
            *state = SpellState::PendingReturn;
        }
    }
}
