//! Return commit: recycle spells back into their pool.
//!
//! This system owns the Inactive invariants. An inactive spell is:
//! - hidden
//! - stopped
//! - colliding with nothing
//!
//! `PendingReturn -> Inactive` happens only here, so every spell is released exactly once.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{PooledSpell, SpellState};
use super::pool::{inactive_spell_layers, ObjectPoolManager, SpellPrefab};

pub fn return_to_pool_commit(
    mut pools: ResMut<ObjectPoolManager<SpellPrefab>>,
    mut q: Query<(
        Entity,
        &PooledSpell,
        &mut SpellState,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    )>,
) {
    for (e, pooled, mut state, mut vis, mut vel, mut layers) in &mut q {
        if *state != SpellState::PendingReturn {
            continue;
        }

        *state = SpellState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_spell_layers();

        match pools.get_pool_mut(&pooled.pool) {
            Some(pool) => pool.release(e),
            None => warn!("spell {e:?} belongs to unknown pool {}", pooled.pool),
        }
    }
}
