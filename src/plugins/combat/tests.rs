use bevy::prelude::*;

use crate::common::test_utils::{drain_messages, ensure_messages, run_system_once};

use super::{apply_damage, DamageRequest, Died, Health};

fn world_with_messages() -> World {
    let mut world = World::new();
    ensure_messages::<DamageRequest>(&mut world);
    ensure_messages::<Died>(&mut world);
    world
}

#[test]
fn new_health_starts_full_and_clamps_defense() {
    let hp = Health::new(100.0, 1.7);
    assert_eq!(hp.current(), 100.0);
    assert_eq!(hp.defense(), 1.0);
    assert_eq!(hp.fraction(), 1.0);

    let hp = Health::new(50.0, -0.3);
    assert_eq!(hp.defense(), 0.0);
}

#[test]
fn defense_scales_damage() {
    let mut hp = Health::new(100.0, 0.5);
    let lost = hp.take_damage(10.0);
    assert_eq!(lost, 5.0);
    assert_eq!(hp.current(), 95.0);
    assert!((hp.fraction() - 0.95).abs() < 1e-6);
}

#[test]
fn damage_clamps_at_zero() {
    let mut hp = Health::new(10.0, 0.0);
    let lost = hp.take_damage(1000.0);
    assert_eq!(lost, 10.0);
    assert_eq!(hp.current(), 0.0);
    assert!(hp.is_depleted());
}

#[test]
fn negative_damage_never_exceeds_max() {
    let mut hp = Health::new(10.0, 0.0);
    hp.take_damage(4.0);
    hp.take_damage(-100.0);
    assert_eq!(hp.current(), 10.0);
}

#[test]
fn full_defense_ignores_damage() {
    let mut hp = Health::new(10.0, 1.0);
    assert_eq!(hp.take_damage(99.0), 0.0);
    assert!(!hp.is_depleted());
}

#[test]
fn zero_max_reports_empty_fraction() {
    let hp = Health::new(0.0, 0.0);
    assert_eq!(hp.fraction(), 0.0);
    assert!(hp.is_depleted());
}

#[test]
fn apply_damage_hurts_target() {
    let mut world = world_with_messages();
    let target = world.spawn(Health::new(20.0, 0.0)).id();

    world.write_message(DamageRequest { target, amount: 5.0 });
    run_system_once(&mut world, apply_damage);

    assert_eq!(world.get::<Health>(target).unwrap().current(), 15.0);
    assert!(drain_messages::<Died>(&mut world).is_empty());
}

#[test]
fn lethal_hits_in_one_step_report_one_death() {
    let mut world = world_with_messages();
    let target = world.spawn(Health::new(10.0, 0.0)).id();

    for _ in 0..3 {
        world.write_message(DamageRequest { target, amount: 10.0 });
    }
    run_system_once(&mut world, apply_damage);

    let deaths = drain_messages::<Died>(&mut world);
    assert_eq!(deaths, vec![Died { entity: target }]);
}

#[test]
fn missing_target_is_skipped() {
    let mut world = world_with_messages();
    let gone = world.spawn_empty().id();
    world.despawn(gone);
    let alive = world.spawn(Health::new(10.0, 0.0)).id();

    world.write_message(DamageRequest { target: gone, amount: 3.0 });
    world.write_message(DamageRequest { target: alive, amount: 3.0 });
    run_system_once(&mut world, apply_damage);

    assert_eq!(world.get::<Health>(alive).unwrap().current(), 7.0);
}
