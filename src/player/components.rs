//! Components for the player avatar.
use bevy::prelude::*;

/// Marker component identifying the player avatar; proximity is measured from it.
#[derive(Component, Debug)]
pub struct Player;

/// Movement tuning for the player avatar.
#[derive(Component, Debug, Clone)]
pub struct PlayerMotion {
    /// Walking speed in world units per second.
    pub walk_speed: f32,
    pub sprint_multiplier: f32,
}

impl Default for PlayerMotion {
    fn default() -> Self {
        Self {
            walk_speed: 4.0,
            sprint_multiplier: 1.8,
        }
    }
}

/// Camera that trails the player at a fixed offset.
#[derive(Component, Debug, Clone)]
pub struct FollowCamera {
    pub offset: Vec3,
    /// Higher values catch up faster; 0 disables smoothing.
    pub smoothing: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 7.0, 9.0),
            smoothing: 6.0,
        }
    }
}
