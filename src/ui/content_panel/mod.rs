// src/ui/content_panel/mod.rs
//
// Content panel module: bottom-right panel with the title, description and
// lore of the last interacted object. Fades out after the content's display
// duration and reports open/close through UiStateChangedEvent.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::ContentPanelPlugin;
