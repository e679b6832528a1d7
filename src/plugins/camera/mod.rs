//! Camera plugin (render-only).
//!
//! The camera is spawned once at startup and outlives sessions. It keeps the offset it
//! had from the player when following began and closes the gap exponentially:
//!
//! ```text
//! alpha = 1 - exp(-responsiveness * dt)
//! cam  += (player + offset - cam) * alpha
//! ```
//!
//! Player and camera queries are made disjoint with `Without<...>` so one system can
//! read one `Transform` and write the other.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::player::Player;

const CAMERA_Z: f32 = 999.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct MainCamera {
    pub responsiveness: f32,
    /// Camera minus player position, in the XY plane.
    pub offset: Vec2,
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera)
        .add_systems(OnEnter(GameState::InGame), recenter_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Fraction of the remaining gap to close this frame.
pub fn follow_alpha(responsiveness: f32, dt: f32) -> f32 {
    1.0 - (-responsiveness * dt).exp()
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera {
            responsiveness: tunables.camera_responsiveness,
            offset: Vec2::ZERO,
        },
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, CAMERA_Z),
    ));
}

/// New sessions start with the player at the origin; snap back there.
fn recenter_camera(mut q_cam: Query<(&mut Transform, &MainCamera)>) {
    for (mut tf, cam) in &mut q_cam {
        tf.translation = cam.offset.extend(CAMERA_Z);
    }
}

fn follow_player(
    time: Res<Time>,
    q_player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Player>>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok((mut tf_cam, cam)) = q_cam.single_mut() else {
        return;
    };

    let target = tf_player.translation.truncate() + cam.offset;
    let alpha = follow_alpha(cam.responsiveness, time.delta_secs());
    let next = tf_cam.translation.truncate().lerp(target, alpha);

    tf_cam.translation.x = next.x;
    tf_cam.translation.y = next.y;
}
