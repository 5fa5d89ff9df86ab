//! Systems that load cue assets and play them in response to interaction messages.
use bevy::prelude::*;

use crate::interaction::{
    config::InteractionSettings,
    events::{InteractionPromptEvent, ObjectInteractedEvent, PromptAction},
};

use super::cues::{configured_cues, select_cue, AudioCue, AudioCueLibrary};

/// Loads every configured cue through the asset server.
pub fn load_audio_cues(
    asset_server: Res<AssetServer>,
    settings: Res<InteractionSettings>,
    mut library: ResMut<AudioCueLibrary>,
) {
    for (cue, path) in configured_cues(&settings.audio) {
        library.insert(cue, asset_server.load(path.to_string()));
    }
    info!("Audio cues loaded: {}", library.len());
}

/// Plays the prompt cue on focus and a category cue on every interaction.
pub fn play_interaction_cues(
    mut commands: Commands,
    library: Res<AudioCueLibrary>,
    mut prompts: MessageReader<InteractionPromptEvent>,
    mut interactions: MessageReader<ObjectInteractedEvent>,
) {
    for prompt in prompts.read() {
        if prompt.action == PromptAction::Show {
            play_cue(&mut commands, &library, AudioCue::Prompt);
        }
    }

    for event in interactions.read() {
        let cue = select_cue(event.category, &event.display_name);
        debug!("Cue {:?} for {} ({})", cue, event.display_name, event.id);
        play_cue(&mut commands, &library, cue);
    }
}

fn play_cue(commands: &mut Commands, library: &AudioCueLibrary, cue: AudioCue) {
    let Some(handle) = library.get(cue) else {
        debug!("No audio asset configured for cue {:?}", cue);
        return;
    };
    commands.spawn((AudioPlayer::new(handle.clone()), PlaybackSettings::DESPAWN));
}
