use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{heading::facing_rotation, tunables::Tunables};
use crate::plugins::combat::DamageRequest;
use crate::plugins::player::Player;

use super::components::{Monster, PendingDespawn};

/// Chase the player, or stand still and strike while within reach.
///
/// Reach is the monster's attack radius plus the player's collider radius, i.e. the
/// attack circle only has to touch the player's body.
pub fn chase_or_attack(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    q_player: Query<(Entity, &Transform), (With<Player>, Without<Monster>)>,
    mut q_monsters: Query<
        (&mut Monster, &mut Transform, &mut LinearVelocity),
        (Without<Player>, Without<PendingDespawn>),
    >,
    mut damage: MessageWriter<DamageRequest>,
) {
    let Ok((player_e, player_tf)) = q_player.single() else {
        return;
    };
    let player_pos = player_tf.translation.truncate();

    for (mut monster, mut tf, mut vel) in &mut q_monsters {
        let to_player = player_pos - tf.translation.truncate();
        let in_range = to_player.length() <= monster.attack_radius + tunables.player_radius;

        let strikes = monster.step_attack(in_range, time.delta());
        for _ in 0..strikes {
            damage.write(DamageRequest {
                target: player_e,
                amount: monster.damage,
            });
        }

        if monster.is_attacking() {
            vel.0 = Vec2::ZERO;
            continue;
        }

        let Some(dir) = to_player.try_normalize() else {
            vel.0 = Vec2::ZERO;
            continue;
        };

        vel.0 = dir * monster.speed;
        tf.rotation = facing_rotation(dir);
    }
}
