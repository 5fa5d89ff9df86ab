// src/ui/plugin.rs
//
// UiPlugin groups the interaction prompt and content panel.

use bevy::prelude::*;

use super::content_panel::ContentPanelPlugin;
use super::events::UiStateChangedEvent;
use super::interaction_prompt::InteractionPromptPlugin;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<UiStateChangedEvent>()
            .add_plugins((ContentPanelPlugin, InteractionPromptPlugin));

        info!("UiPlugin registered");
    }
}
