//! Cast consumer: take spells out of their pool and launch them.
//!
//! Activation is a single insert of value components, so a freshly grown pool entry
//! (whose spawn is still queued) and a recycled one go through the same path.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::heading::facing_rotation;

use super::components::{Spell, SpellLifetime, SpellState};
use super::data::SpellBook;
use super::messages::CastSpellRequest;
use super::pool::{active_spell_layers, ObjectPoolManager, SpellPrefab};

pub fn allocate_spells_from_pool(
    mut commands: Commands,
    mut reader: MessageReader<CastSpellRequest>,
    book: Res<SpellBook>,
    mut pools: ResMut<ObjectPoolManager<SpellPrefab>>,
) {
    for req in reader.read() {
        let Some(data) = book.get(req.spell) else {
            warn!("cast request for unknown spell index {}", req.spell);
            continue;
        };

        let Some(pool) = pools.get_pool_mut(&data.name) else {
            warn!("no pool for spell {}", data.name);
            continue;
        };

        let e = pool.acquire(|prefab| commands.spawn(prefab.inactive_bundle()).id());

        let direction = req.direction.try_normalize().unwrap_or(Vec2::Y);

        commands.entity(e).insert((
            SpellState::Active,
            Spell {
                damage: data.damage,
                speed: data.speed,
                direction,
            },
            SpellLifetime(Timer::from_seconds(data.lifetime.max(0.0), TimerMode::Once)),
            Transform {
                translation: req.origin.extend(2.0),
                rotation: facing_rotation(direction),
                ..default()
            },
            LinearVelocity(direction * data.speed),
            Visibility::Visible,
            active_spell_layers(),
        ));
    }
}
