use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::rng::GameRng;
use crate::common::test_utils::{
    drain_messages, ensure_messages, fixed_time_with_delta, run_system_once,
};
use crate::common::tunables::Tunables;
use crate::plugins::combat::{DamageRequest, Died};
use crate::plugins::player::Player;
use crate::plugins::ui::health_bars::WorldHealthBar;

use super::*;

fn monster_world(max_monsters: usize) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables {
        max_monsters,
        ..default()
    });
    world.insert_resource(GameRng::from_seed(1234));
    world.init_resource::<MonsterManager>();
    world
}

fn monster_count(world: &mut World) -> usize {
    world.query::<&Monster>().iter(world).count()
}

// -----------------------------------------------------------------------------
// Attack state machine
// -----------------------------------------------------------------------------

#[test]
fn entering_range_strikes_immediately() {
    let mut m = Monster::new(1.0, 10.0, 1.0, 1.0);
    assert_eq!(m.step_attack(true, Duration::from_millis(16)), 1);
    assert!(m.is_attacking());
}

#[test]
fn staying_in_range_strikes_once_per_interval() {
    let mut m = Monster::new(1.0, 10.0, 1.0, 1.0);
    m.step_attack(true, Duration::ZERO);

    assert_eq!(m.step_attack(true, Duration::from_millis(600)), 0);
    assert_eq!(m.step_attack(true, Duration::from_millis(600)), 1);
    assert_eq!(m.step_attack(true, Duration::from_millis(300)), 0);
}

#[test]
fn leaving_range_resets_the_attack() {
    let mut m = Monster::new(1.0, 10.0, 1.0, 1.0);
    m.step_attack(true, Duration::ZERO);
    m.step_attack(true, Duration::from_millis(900));

    assert_eq!(m.step_attack(false, Duration::from_millis(16)), 0);
    assert!(!m.is_attacking());

    // Back in range: strike right away, not after the leftover 100ms.
    assert_eq!(m.step_attack(true, Duration::from_millis(16)), 1);
    assert_eq!(m.step_attack(true, Duration::from_millis(200)), 0);
}

// -----------------------------------------------------------------------------
// Manager bookkeeping
// -----------------------------------------------------------------------------

#[test]
fn manager_tracks_registrations_and_deaths() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();

    let mut manager = MonsterManager::new(2);
    assert!(manager.is_below_target());

    manager.register_monster(a);
    manager.register_monster(b);
    assert_eq!(manager.active_count(), 2);
    assert!(!manager.is_below_target());

    assert!(manager.on_monster_death(a));
    assert!(!manager.on_monster_death(a));
    assert_eq!(manager.active(), &[b]);
    assert!(manager.is_below_target());
}

#[test]
fn spawn_point_positions_stay_in_radius() {
    let mut rng = GameRng::from_seed(5);
    let point = SpawnPoint {
        position: Vec2::new(100.0, -50.0),
        radius: 30.0,
    };
    for _ in 0..500 {
        let p = point.random_position(&mut rng);
        assert!(p.distance(point.position) <= 30.0 + 1e-3);
    }
}

// -----------------------------------------------------------------------------
// Spawning cadence
// -----------------------------------------------------------------------------

#[test]
fn session_start_fills_population() {
    let mut world = monster_world(6);

    run_system_once(&mut world, spawner::setup_spawners);
    run_system_once(&mut world, spawner::spawn_initial_monsters);

    assert_eq!(monster_count(&mut world), 6);
    assert_eq!(world.resource::<MonsterManager>().active_count(), 6);
    assert_eq!(
        world.query::<&MonsterSpawner>().iter(&world).count(),
        spawner::SPAWN_POINTS.len()
    );
    assert_eq!(world.query::<&WorldHealthBar>().iter(&world).count(), 6);

    let radius = world.resource::<Tunables>().spawn_radius;
    for tf in world.query_filtered::<&Transform, With<Monster>>().iter(&world) {
        let pos = tf.translation.truncate();
        let near_a_spawner = spawner::SPAWN_POINTS
            .iter()
            .any(|p| p.distance(pos) <= radius + 1e-3);
        assert!(near_a_spawner, "monster at {pos:?} is not near any spawner");
    }
}

#[test]
fn setup_resets_previous_session() {
    let mut world = monster_world(3);
    let stale = world.spawn_empty().id();
    world.resource_mut::<MonsterManager>().register_monster(stale);

    run_system_once(&mut world, spawner::setup_spawners);

    let manager = world.resource::<MonsterManager>();
    assert_eq!(manager.active_count(), 0);
    assert_eq!(manager.max_monsters(), 3);
    assert_eq!(manager.spawner_count(), spawner::SPAWN_POINTS.len());
}

#[test]
fn top_up_spawns_one_per_run_until_target() {
    let mut world = monster_world(3);
    run_system_once(&mut world, spawner::setup_spawners);

    for expected in 1..=3 {
        run_system_once(&mut world, spawner::maintain_monster_count);
        assert_eq!(world.resource::<MonsterManager>().active_count(), expected);
    }

    run_system_once(&mut world, spawner::maintain_monster_count);
    assert_eq!(monster_count(&mut world), 3);
}

#[test]
fn top_up_without_spawners_does_nothing() {
    let mut world = monster_world(3);
    world.resource_mut::<MonsterManager>().reset(3);

    run_system_once(&mut world, spawner::maintain_monster_count);

    assert_eq!(monster_count(&mut world), 0);
}

#[test]
fn invalid_spawner_index_spawns_nothing() {
    let mut world = monster_world(3);
    run_system_once(&mut world, spawner::setup_spawners);

    let spawned = run_system_once(
        &mut world,
        |mut commands: Commands,
         mut manager: ResMut<MonsterManager>,
         mut rng: ResMut<GameRng>,
         tunables: Res<Tunables>| {
            spawner::spawn_monster_at_spawner(&mut commands, &mut manager, &mut rng, &tunables, 99)
        },
    );

    assert!(spawned.is_none());
    assert_eq!(monster_count(&mut world), 0);
}

// -----------------------------------------------------------------------------
// Behaviour
// -----------------------------------------------------------------------------

fn behaviour_world() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables {
        player_radius: 10.0,
        ..default()
    });
    world.insert_resource(fixed_time_with_delta(1.0 / 60.0));
    ensure_messages::<DamageRequest>(&mut world);
    world
}

#[test]
fn far_monster_chases_player() {
    let mut world = behaviour_world();
    world.spawn((Player, Transform::from_xyz(100.0, 0.0, 1.0)));
    let m = world
        .spawn((
            Monster::new(40.0, 10.0, 20.0, 1.0),
            Transform::default(),
            LinearVelocity::ZERO,
        ))
        .id();

    run_system_once(&mut world, behaviour::chase_or_attack);

    assert_eq!(world.get::<LinearVelocity>(m).unwrap().0, Vec2::new(40.0, 0.0));
    assert!(drain_messages::<DamageRequest>(&mut world).is_empty());
}

#[test]
fn monster_in_reach_stops_and_strikes() {
    let mut world = behaviour_world();
    let player = world.spawn((Player, Transform::from_xyz(25.0, 0.0, 1.0))).id();
    let m = world
        .spawn((
            Monster::new(40.0, 10.0, 20.0, 1.0),
            Transform::default(),
            LinearVelocity(Vec2::new(40.0, 0.0)),
        ))
        .id();

    run_system_once(&mut world, behaviour::chase_or_attack);

    assert_eq!(world.get::<LinearVelocity>(m).unwrap().0, Vec2::ZERO);
    assert!(world.get::<Monster>(m).unwrap().is_attacking());
    assert_eq!(
        drain_messages::<DamageRequest>(&mut world),
        vec![DamageRequest { target: player, amount: 10.0 }]
    );

    // Next step is inside the interval: no second strike.
    run_system_once(&mut world, behaviour::chase_or_attack);
    assert!(drain_messages::<DamageRequest>(&mut world).is_empty());
}

#[test]
fn no_player_means_no_behaviour() {
    let mut world = behaviour_world();
    let m = world
        .spawn((
            Monster::new(40.0, 10.0, 20.0, 1.0),
            Transform::default(),
            LinearVelocity(Vec2::new(3.0, 4.0)),
        ))
        .id();

    run_system_once(&mut world, behaviour::chase_or_attack);

    assert_eq!(world.get::<LinearVelocity>(m).unwrap().0, Vec2::new(3.0, 4.0));
}

// -----------------------------------------------------------------------------
// Death
// -----------------------------------------------------------------------------

#[test]
fn dead_monster_is_unregistered_and_despawned() {
    let mut world = World::new();
    ensure_messages::<Died>(&mut world);
    let mut manager = MonsterManager::new(2);

    let m = world
        .spawn((
            Monster::new(40.0, 10.0, 20.0, 1.0),
            spawner::monster_layers(),
            LinearVelocity(Vec2::X),
        ))
        .id();
    manager.register_monster(m);
    world.insert_resource(manager);

    world.write_message(Died { entity: m });
    run_system_once(&mut world, super::handle_monster_deaths);

    assert_eq!(world.resource::<MonsterManager>().active_count(), 0);
    assert!(world.get::<PendingDespawn>(m).is_some());
    assert_eq!(world.get::<LinearVelocity>(m).unwrap().0, Vec2::ZERO);
    assert!(!world.get::<CollisionLayers>(m).unwrap().filters.has_all(Layer::PlayerSpell));

    run_system_once(&mut world, super::despawn_marked_monsters);
    assert!(world.get_entity(m).is_err());
}
