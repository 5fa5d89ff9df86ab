//! Core module exposing the simulation clock shared by every plugin.
pub mod plugin;

pub use plugin::CorePlugin;
