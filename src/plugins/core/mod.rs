//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::{rng::GameRng, tunables::Tunables};

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.init_resource::<GameRng>();
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.04, 0.08)));
}
