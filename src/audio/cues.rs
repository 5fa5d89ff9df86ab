//! Audio cue selection and the loaded cue library.
use std::collections::HashMap;

use bevy::prelude::*;

use crate::interaction::{components::InteractionCategory, config::AudioCuePaths};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Door,
    Pickup,
    Lore,
    Prompt,
    Generic,
}

const DOOR_WORDS: &[&str] = &["door", "gate", "cottage", "house"];
const PICKUP_WORDS: &[&str] = &["crate", "chest", "herb", "item"];
const LORE_WORDS: &[&str] = &["stone", "scroll", "book", "lore"];

/// Picks the cue for an interaction: category first, then name keywords.
pub fn select_cue(category: InteractionCategory, display_name: &str) -> AudioCue {
    match category {
        InteractionCategory::Door => return AudioCue::Door,
        InteractionCategory::Item => return AudioCue::Pickup,
        InteractionCategory::Dialogue | InteractionCategory::Npc => return AudioCue::Lore,
        InteractionCategory::Combat | InteractionCategory::General => {}
    }

    let name = display_name.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|word| name.contains(word));
    if mentions(DOOR_WORDS) {
        AudioCue::Door
    } else if mentions(PICKUP_WORDS) {
        AudioCue::Pickup
    } else if mentions(LORE_WORDS) {
        AudioCue::Lore
    } else {
        AudioCue::Generic
    }
}

/// Configured asset path per cue, skipping silent cues.
pub fn configured_cues(paths: &AudioCuePaths) -> Vec<(AudioCue, &str)> {
    [
        (AudioCue::Door, &paths.door),
        (AudioCue::Pickup, &paths.pickup),
        (AudioCue::Lore, &paths.lore),
        (AudioCue::Prompt, &paths.prompt),
        (AudioCue::Generic, &paths.generic),
    ]
    .into_iter()
    .filter_map(|(cue, path)| path.as_deref().map(|path| (cue, path)))
    .collect()
}

/// Handles for every cue that has an asset configured.
#[derive(Resource, Debug, Default)]
pub struct AudioCueLibrary {
    handles: HashMap<AudioCue, Handle<AudioSource>>,
}

impl AudioCueLibrary {
    pub fn insert(&mut self, cue: AudioCue, handle: Handle<AudioSource>) {
        self.handles.insert(cue, handle);
    }

    pub fn get(&self, cue: AudioCue) -> Option<&Handle<AudioSource>> {
        self.handles.get(&cue)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}
