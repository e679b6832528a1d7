use std::time::Duration;

use bevy::prelude::*;

/// A chasing melee enemy.
///
/// The attack is a small state machine: entering range strikes immediately and starts
/// the interval timer, staying in range strikes once per interval, leaving range
/// resets it.
#[derive(Component, Debug, Clone)]
pub struct Monster {
    pub speed: f32,
    pub damage: f32,
    pub attack_radius: f32,
    attacking: bool,
    attack_timer: Timer,
}

impl Monster {
    pub fn new(speed: f32, damage: f32, attack_radius: f32, attack_interval: f32) -> Self {
        Self {
            speed,
            damage,
            attack_radius,
            attacking: false,
            attack_timer: Timer::from_seconds(attack_interval.max(0.0), TimerMode::Repeating),
        }
    }

    #[inline]
    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    /// Advance the attack by `dt`. Returns how many strikes land this step.
    pub fn step_attack(&mut self, in_range: bool, dt: Duration) -> u32 {
        if !in_range {
            self.attacking = false;
            return 0;
        }

        if !self.attacking {
            self.attacking = true;
            self.attack_timer.reset();
            return 1;
        }

        self.attack_timer.tick(dt);
        self.attack_timer.times_finished_this_tick()
    }
}

/// A spawn point entity. `index` is its slot in `MonsterManager`.
#[derive(Component, Debug, Clone, Copy)]
pub struct MonsterSpawner {
    pub index: usize,
}

/// Marker: monster is dead and will be despawned outside the physics step.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;
