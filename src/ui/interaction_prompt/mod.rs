// src/ui/interaction_prompt/mod.rs
//
// Interaction prompt module: a single bottom-centre label that follows the
// focus state published by the interaction system.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::InteractionPromptPlugin;
