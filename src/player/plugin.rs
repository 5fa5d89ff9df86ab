//! Player plugin wiring avatar spawning, movement and the follow camera.
use bevy::prelude::*;

use crate::player::systems::{follow_player, move_player, spawn_player};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player)
            .add_systems(FixedUpdate, move_player)
            .add_systems(Update, follow_player);
    }
}
