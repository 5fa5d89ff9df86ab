//! Interaction module: proximity detection, highlight/prompt focus and dispatch.
pub mod components;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod focus;
pub mod plugin;
pub mod proximity;
pub mod reactivation;
pub mod registry;
pub mod systems;
pub mod telemetry;

pub use plugin::InteractionPlugin;
