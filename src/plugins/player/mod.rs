//! Player plugin.
//!
//! Pipeline:
//! - Update: sample keyboard, write `PlayerInput`
//! - FixedUpdate: rotate the avatar, drive its velocity along its facing
//! - FixedPostUpdate: react to the player's `Died` message
//!
//! Controls are tank-style: forward/back moves along the facing, left/right turns.
//! Casting and spell cycling read `PlayerInput` in the spells plugin.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{heading::facing, layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::combat::{ApplyDamage, Died, Health};

#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// One frame of player intent.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct PlayerInput {
    /// +1 forward, -1 backward.
    pub move_axis: f32,
    /// +1 turns clockwise, -1 counter-clockwise.
    pub rotate_axis: f32,
    pub fire_held: bool,
    /// +1 next spell, -1 previous spell, 0 no change. Edge-triggered.
    pub cycle: i32,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerInput>()
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(OnExit(GameState::InGame), clear_input)
        .add_systems(Update, gather_input.run_if(in_state(GameState::InGame)))
        .add_systems(
            FixedUpdate,
            apply_movement.run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            handle_player_death
                .after(ApplyDamage)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World, Layer::Enemy]);
    let r = tunables.player_radius;

    commands.spawn((
        Name::new("Player"),
        Player,
        Health::new(tunables.player_max_health, tunables.player_defense),
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(r * 2.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Dynamic,
        Collider::circle(r),
        LockedAxes::ROTATION_LOCKED,
        layers,
        LinearVelocity::ZERO,
        TranslationExtrapolation,
        DespawnOnExit(GameState::InGame),
        // Wand tip: shows the facing and sits where spells appear.
        children![(
            Name::new("Wand"),
            Sprite::from_color(Color::srgb(0.95, 0.9, 0.6), Vec2::new(4.0, 10.0)),
            Transform::from_xyz(0.0, tunables.weapon_offset - 5.0, 0.1),
        )],
    ));
}

fn clear_input(mut input: ResMut<PlayerInput>) {
    *input = PlayerInput::default();
}

fn axis(keys: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keys.any_pressed(negative) {
        value -= 1.0;
    }
    if keys.any_pressed(positive) {
        value += 1.0;
    }
    value
}

pub fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    input.move_axis = axis(&keys, [KeyCode::KeyS, KeyCode::ArrowDown], [KeyCode::KeyW, KeyCode::ArrowUp]);
    input.rotate_axis = axis(&keys, [KeyCode::KeyA, KeyCode::ArrowLeft], [KeyCode::KeyD, KeyCode::ArrowRight]);
    input.fire_held = keys.pressed(KeyCode::Space);

    input.cycle = match (keys.just_pressed(KeyCode::KeyE), keys.just_pressed(KeyCode::KeyQ)) {
        (true, false) => 1,
        (false, true) => -1,
        _ => 0,
    };
}

fn apply_movement(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut Transform, &mut LinearVelocity), With<Player>>,
) {
    let Ok((mut tf, mut vel)) = q_player.single_mut() else {
        return;
    };

    if input.rotate_axis != 0.0 {
        let turn = -input.rotate_axis * tunables.player_rotation_speed.to_radians() * time.delta_secs();
        tf.rotate_z(turn);
    }

    vel.0 = facing(&tf) * input.move_axis * tunables.player_move_speed;
}

fn handle_player_death(
    mut died: MessageReader<Died>,
    q_player: Query<(), With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for ev in died.read() {
        if q_player.contains(ev.entity) {
            info!("player died");
            next_state.set(GameState::GameOver);
        }
    }
}
