//! Audio module: picks and plays feedback cues for prompts and interactions.
pub mod cues;
pub mod plugin;
pub mod systems;

pub use plugin::AudioCuePlugin;
