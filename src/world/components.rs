//! Components used by the world module.
use bevy::prelude::*;

/// Material pair swapped in when an interactable gains or loses focus.
#[derive(Component, Debug, Clone)]
pub struct HighlightMaterials {
    pub base: Handle<StandardMaterial>,
    pub highlight: Handle<StandardMaterial>,
}

impl HighlightMaterials {
    pub fn select(&self, highlighted: bool) -> &Handle<StandardMaterial> {
        if highlighted {
            &self.highlight
        } else {
            &self.base
        }
    }
}
