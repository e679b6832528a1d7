//! Monsters plugin: a population of chasing melee enemies kept at a target size.
//!
//! `MonsterManager` is the single source of truth for "how many monsters are alive".
//! Spawning registers, death unregisters; the top-up system only compares counts.
//!
//! Death is split across schedules:
//! - FixedPostUpdate: read `Died`, unregister, stop interaction, mark `PendingDespawn`
//! - PostUpdate: despawn marked monsters, after fixed-step work is done
//!
//! The health bar of a despawned monster removes itself (see `ui::health_bars`).

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::combat::{ApplyDamage, Died};

pub mod behaviour;
pub mod components;
pub mod manager;
pub mod spawner;

pub use components::{Monster, MonsterSpawner, PendingDespawn};
pub use manager::{MonsterManager, SpawnPoint};

pub fn plugin(app: &mut App) {
    app.init_resource::<MonsterManager>();

    app.add_systems(
        OnEnter(GameState::InGame),
        (spawner::setup_spawners, spawner::spawn_initial_monsters).chain(),
    );

    app.add_systems(
        Update,
        spawner::maintain_monster_count.run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedUpdate,
        behaviour::chase_or_attack.run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        handle_monster_deaths
            .after(ApplyDamage)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        despawn_marked_monsters.run_if(in_state(GameState::InGame)),
    );
}

/// Dead monsters keep their `Enemy` membership but stop colliding with anything.
#[inline]
fn non_interacting_monster_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

fn handle_monster_deaths(
    mut commands: Commands,
    mut died: MessageReader<Died>,
    mut manager: ResMut<MonsterManager>,
    mut q: Query<(&mut CollisionLayers, &mut LinearVelocity), (With<Monster>, Without<PendingDespawn>)>,
) {
    for ev in died.read() {
        let Ok((mut layers, mut vel)) = q.get_mut(ev.entity) else {
            continue;
        };

        if !manager.on_monster_death(ev.entity) {
            debug!("monster {:?} died without being registered", ev.entity);
        }

        *layers = non_interacting_monster_layers();
        vel.0 = Vec2::ZERO;
        commands.entity(ev.entity).insert(PendingDespawn);
    }
}

fn despawn_marked_monsters(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}

#[cfg(test)]
mod tests;
