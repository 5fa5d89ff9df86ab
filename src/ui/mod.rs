// src/ui/mod.rs
//
// UI module providing screen-space feedback for the interaction system.
//
// Current features:
// - Interaction prompt (bottom-centre "Press E" label for the focused object)
// - Content panel (bottom-right title/description/lore after an interaction)

pub mod content_panel;
pub mod events;
pub mod interaction_prompt;
pub mod plugin;

pub use plugin::UiPlugin;
