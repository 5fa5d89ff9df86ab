// src/ui/interaction_prompt/plugin.rs
//
// Plugin registration for the interaction prompt label.

use bevy::prelude::*;

use crate::interaction::plugin::InteractionSet;

use super::components::PromptState;
use super::systems::{
    apply_prompt_events, expire_prompt_label, render_prompt_label, spawn_prompt_label,
};

/// Shows "Press E ..." while an interactable has focus, for at most the
/// prompt's display duration.
///
/// Runs after the content panel so a panel opening in the same frame
/// suppresses the prompt immediately.
pub struct InteractionPromptPlugin;

impl Plugin for InteractionPromptPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PromptState>()
            .add_systems(Startup, spawn_prompt_label)
            .add_systems(
                Update,
                (apply_prompt_events, expire_prompt_label, render_prompt_label)
                    .chain()
                    .in_set(InteractionSet::Feedback)
                    .after(crate::ui::content_panel::systems::spawn_content_panel),
            );

        info!("InteractionPromptPlugin registered");
    }
}
