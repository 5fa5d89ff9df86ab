//! WorldPlugin sets up the village scene and the visual side of interaction focus.
use bevy::prelude::*;

use crate::{
    interaction::plugin::InteractionSet,
    world::systems::{
        apply_highlight_materials, log_world_intents, spawn_village_interactables,
        spawn_world_environment,
    },
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AmbientLight {
            color: Color::srgb(0.8, 0.85, 1.0),
            brightness: 300.0,
            ..default()
        })
        .add_systems(
            Startup,
            (spawn_world_environment, spawn_village_interactables),
        )
        .add_systems(
            Update,
            (apply_highlight_materials, log_world_intents).in_set(InteractionSet::Feedback),
        );
    }
}
