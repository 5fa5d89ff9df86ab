use bevy::prelude::*;

mod audio;
mod core;
mod interaction;
mod player;
mod ui;
mod world;

use crate::{
    audio::AudioCuePlugin, core::CorePlugin, interaction::InteractionPlugin, player::PlayerPlugin,
    ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            CorePlugin::default(),
            InteractionPlugin, // Before consumers so its settings and messages exist
            PlayerPlugin,
            WorldPlugin,
            UiPlugin,
            AudioCuePlugin,
        ))
        .run();
}
