//! Player module - avatar movement and the camera that follows it.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
