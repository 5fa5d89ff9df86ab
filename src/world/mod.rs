//! World module housing the village scene and interactable visuals.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
