//! Audio plugin wiring cue loading and playback.
use bevy::prelude::*;

use crate::interaction::plugin::InteractionSet;

use super::{
    cues::AudioCueLibrary,
    systems::{load_audio_cues, play_interaction_cues},
};

pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioCueLibrary>()
            .add_systems(Startup, load_audio_cues)
            .add_systems(
                Update,
                play_interaction_cues.in_set(InteractionSet::Feedback),
            );
    }
}
