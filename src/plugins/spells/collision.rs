use avian2d::prelude::*;
use bevy::prelude::*;

use crate::plugins::combat::DamageRequest;
use crate::plugins::monsters::Monster;

use super::components::{PooledSpell, Spell, SpellState};

/// Which side of a contact is the spell, and which gameplay entity it touched.
///
/// The other side is resolved to its rigid body when there is one, so compound
/// colliders still map to the owning monster.
#[inline]
fn split_contact(ev: &CollisionStart, is_spell: impl Fn(Entity) -> bool) -> Option<(Entity, Entity)> {
    if is_spell(ev.collider1) {
        Some((ev.collider1, ev.body2.unwrap_or(ev.collider2)))
    } else if is_spell(ev.collider2) {
        Some((ev.collider2, ev.body1.unwrap_or(ev.collider1)))
    } else {
        None
    }
}

/// Resolve spell triggers: a spell touching a monster deals its damage once and goes
/// back to the pool. Anything else a spell touches is ignored.
pub fn process_spell_collisions(
    mut started: MessageReader<CollisionStart>,
    q_is_spell: Query<(), With<PooledSpell>>,
    mut q_spells: Query<(&Spell, &mut SpellState), With<PooledSpell>>,
    q_monsters: Query<(), With<Monster>>,
    mut damage: MessageWriter<DamageRequest>,
) {
    for ev in started.read() {
        let Some((spell_e, other)) = split_contact(ev, |e| q_is_spell.contains(e)) else {
            continue;
        };

        if !q_monsters.contains(other) {
            continue;
        }

        let Ok((spell, mut state)) = q_spells.get_mut(spell_e) else {
            continue;
        };

        // A spell that already hit something this step is spent.
        if *state != SpellState::Active {
            continue;
        }

        damage.write(DamageRequest {
            target: other,
            amount: spell.damage,
        });
        *state = SpellState::PendingReturn;
    }
}
