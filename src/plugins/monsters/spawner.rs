//! Spawn points and population cadence.
//!
//! ```text
//! OnEnter(InGame): setup_spawners -> spawn_initial_monsters (max_monsters at once)
//! Update:          maintain_monster_count (at most one spawn per frame while below target)
//! ```

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;

use crate::common::{layers::Layer, rng::GameRng, state::GameState, tunables::Tunables};
use crate::plugins::combat::Health;
use crate::plugins::ui::health_bars::spawn_world_health_bar;

use super::components::{Monster, MonsterSpawner};
use super::manager::{MonsterManager, SpawnPoint};

/// Spawn point centres, one per arena quadrant.
pub const SPAWN_POINTS: [Vec2; 4] = [
    Vec2::new(-640.0, 320.0),
    Vec2::new(640.0, 320.0),
    Vec2::new(-640.0, -320.0),
    Vec2::new(640.0, -320.0),
];

#[inline]
pub fn monster_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Player, Layer::PlayerSpell])
}

/// Spawn a monster at `position` and its world-space health bar. Returns the monster.
pub fn spawn_monster(commands: &mut Commands, tunables: &Tunables, position: Vec2) -> Entity {
    let r = tunables.monster_radius;

    let monster = commands
        .spawn((
            Name::new("Monster"),
            Monster::new(
                tunables.monster_speed,
                tunables.monster_damage,
                tunables.monster_attack_radius,
                tunables.monster_attack_interval,
            ),
            Health::new(tunables.monster_max_health, tunables.monster_defense),
            Sprite {
                color: Color::srgb(0.85, 0.2, 0.25),
                custom_size: Some(Vec2::splat(r * 2.0)),
                ..default()
            },
            Transform::from_translation(position.extend(1.0)),
            RigidBody::Kinematic,
            Collider::circle(r),
            monster_layers(),
            LinearVelocity::ZERO,
            Occluder2d::circle(r),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    spawn_world_health_bar(commands, monster, Vec2::new(0.0, r + 8.0), r * 2.0);
    monster
}

/// Spawn one monster at spawner `index` and register it.
///
/// An index with no spawner behind it is a configuration mistake: warn and spawn nothing.
pub fn spawn_monster_at_spawner(
    commands: &mut Commands,
    manager: &mut MonsterManager,
    rng: &mut GameRng,
    tunables: &Tunables,
    index: usize,
) -> Option<Entity> {
    let Some(point) = manager.spawner(index) else {
        warn!("invalid spawner index {index}");
        return None;
    };

    let monster = spawn_monster(commands, tunables, point.random_position(rng));
    manager.register_monster(monster);
    Some(monster)
}

pub fn setup_spawners(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut manager: ResMut<MonsterManager>,
) {
    manager.reset(tunables.max_monsters);

    for position in SPAWN_POINTS {
        let index = manager.add_spawner(SpawnPoint {
            position,
            radius: tunables.spawn_radius,
        });

        commands.spawn((
            Name::new(format!("MonsterSpawner{index}")),
            MonsterSpawner { index },
            Sprite::from_color(Color::srgba(0.6, 0.1, 0.15, 0.35), Vec2::splat(40.0)),
            Transform::from_translation(position.extend(0.5)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

pub fn spawn_initial_monsters(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut manager: ResMut<MonsterManager>,
    mut rng: ResMut<GameRng>,
) {
    for _ in 0..manager.max_monsters() {
        let index = manager.pick_spawner(&mut rng);
        spawn_monster_at_spawner(&mut commands, &mut manager, &mut rng, &tunables, index);
    }

    info!(
        active = manager.active_count(),
        target = manager.max_monsters(),
        "initial monsters spawned"
    );
}

/// Top the population back up, one monster per frame.
pub fn maintain_monster_count(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut manager: ResMut<MonsterManager>,
    mut rng: ResMut<GameRng>,
) {
    if !manager.is_below_target() {
        return;
    }

    if manager.spawner_count() == 0 {
        warn_once!("no monster spawners configured; population cannot be maintained");
        return;
    }

    let index = manager.pick_spawner(&mut rng);
    spawn_monster_at_spawner(&mut commands, &mut manager, &mut rng, &tunables, index);
}
