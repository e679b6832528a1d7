//! World-space health bars.
//!
//! Bars are standalone entities rather than children, so they stay horizontal while
//! their owner rotates. A bar whose owner is gone despawns itself.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::combat::Health;

use super::bar_fill;

const BAR_HEIGHT: f32 = 4.0;
const BAR_Z: f32 = 5.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct WorldHealthBar {
    pub owner: Entity,
    pub offset: Vec2,
    pub width: f32,
}

pub fn spawn_world_health_bar(
    commands: &mut Commands,
    owner: Entity,
    offset: Vec2,
    width: f32,
) -> Entity {
    commands
        .spawn((
            Name::new("HealthBar"),
            WorldHealthBar { owner, offset, width },
            Sprite::from_color(Color::srgb(0.3, 0.85, 0.35), Vec2::new(width, BAR_HEIGHT)),
            Transform::from_xyz(0.0, 0.0, BAR_Z),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

/// Park each bar above its owner, shrink it from the right as health drops.
pub fn sync_world_health_bars(
    mut commands: Commands,
    q_owners: Query<(&Transform, &Health), Without<WorldHealthBar>>,
    mut q_bars: Query<(Entity, &WorldHealthBar, &mut Transform)>,
) {
    for (e, bar, mut tf) in &mut q_bars {
        let Ok((owner_tf, health)) = q_owners.get(bar.owner) else {
            commands.entity(e).despawn();
            continue;
        };

        let fill = bar_fill(health.current(), health.max());
        let left_align = Vec2::new(-(1.0 - fill) * bar.width * 0.5, 0.0);

        tf.translation = (owner_tf.translation.truncate() + bar.offset + left_align).extend(BAR_Z);
        tf.rotation = Quat::IDENTITY;
        tf.scale = Vec3::new(fill, 1.0, 1.0);
    }
}
