//! Producers: turn player intent into spell selection changes and cast requests.
//!
//! Nothing here touches the pools.

use bevy::prelude::*;

use crate::common::{heading::facing, tunables::Tunables};
use crate::plugins::player::{Player, PlayerInput};

use super::data::{SpellBook, SpellSelection};
use super::messages::CastSpellRequest;

/// Seconds until the next cast is allowed while fire is held.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct FireCadence {
    pub ready_in: f32,
}

pub fn cycle_spells(
    input: Res<PlayerInput>,
    book: Res<SpellBook>,
    mut selection: ResMut<SpellSelection>,
) {
    if input.cycle == 0 {
        return;
    }

    let Some(index) = selection.cycle(input.cycle, book.len()) else {
        return;
    };

    if let Some(spell) = book.get(index) {
        info!("current spell: {}", spell.name);
    }
}

/// Cast immediately when fire goes down, then every `fire_rate` seconds while held.
/// Releasing fire resets the cadence.
pub fn request_spell_casts(
    time: Res<Time>,
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    book: Res<SpellBook>,
    selection: Res<SpellSelection>,
    mut cadence: ResMut<FireCadence>,
    q_player: Query<&Transform, With<Player>>,
    mut writer: MessageWriter<CastSpellRequest>,
) {
    if !input.fire_held {
        cadence.ready_in = 0.0;
        return;
    }

    cadence.ready_in = (cadence.ready_in - time.delta_secs()).max(0.0);
    if cadence.ready_in > 0.0 {
        return;
    }

    if book.get(selection.index).is_none() {
        return;
    }

    let player_tf = match q_player.single() {
        Ok(tf) => tf,
        Err(e) => {
            debug!("No single Player Transform: {e:?}");
            return;
        }
    };

    let direction = facing(player_tf);
    let origin = player_tf.translation.truncate() + direction * tunables.weapon_offset;

    writer.write(CastSpellRequest {
        spell: selection.index,
        origin,
        direction,
    });

    cadence.ready_in = tunables.fire_rate;
}
