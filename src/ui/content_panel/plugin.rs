// src/ui/content_panel/plugin.rs
//
// ContentPanelPlugin registers the interaction content panel.

use bevy::prelude::*;

use crate::interaction::plugin::InteractionSet;

use super::components::{ContentPanelSettings, ContentPanelTracker};
use super::systems::{spawn_content_panel, update_content_panel};

/// Shows title, description and lore for interacted objects.
///
/// # Dependencies
///
/// - `InteractionPlugin` must be registered (provides `ContentDisplayRequested`)
/// - `UiPlugin` registers `UiStateChangedEvent`
pub struct ContentPanelPlugin;

impl Plugin for ContentPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPanelSettings>()
            .init_resource::<ContentPanelTracker>()
            .add_systems(
                Update,
                (spawn_content_panel, update_content_panel.after(spawn_content_panel))
                    .in_set(InteractionSet::Feedback),
            );

        info!("ContentPanelPlugin registered");
    }
}
