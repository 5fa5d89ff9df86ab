// src/ui/content_panel/components.rs
//
// Components and resources for the interaction content panel.

use bevy::prelude::*;

/// Component attached to the content panel root node.
///
/// Owns the lifetime timer that drives fade-out and despawn.
#[derive(Component, Debug)]
pub struct ContentPanel {
    lifetime: Timer,
    fade_duration: f32,
}

impl ContentPanel {
    pub fn new(lifetime_secs: f32, fade_duration: f32) -> Self {
        Self {
            lifetime: Timer::from_seconds(lifetime_secs.max(0.0), TimerMode::Once),
            fade_duration: fade_duration.max(0.0),
        }
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.lifetime.tick(delta);
    }

    pub fn is_finished(&self) -> bool {
        self.lifetime.is_finished()
    }

    /// Alpha multiplier: 1.0 until the final `fade_duration` seconds, then linear to 0.
    pub fn fade_alpha(&self) -> f32 {
        if self.fade_duration <= 0.0 {
            return 1.0;
        }
        let remaining = self.lifetime.remaining_secs();
        if remaining < self.fade_duration {
            remaining / self.fade_duration
        } else {
            1.0
        }
    }
}

/// Marks text nodes inside the panel so they fade with it.
#[derive(Component, Debug)]
pub struct ContentPanelText {
    pub base_color: Color,
}

/// Tracks the single content panel on screen.
#[derive(Resource, Debug, Default)]
pub struct ContentPanelTracker {
    pub active_panel: Option<Entity>,
}

/// Layout and timing for the content panel.
#[derive(Resource, Debug)]
pub struct ContentPanelSettings {
    /// Duration of the fade-out at the end of a panel's lifetime (seconds).
    pub fade_seconds: f32,

    /// Used when the content carries no positive display duration (seconds).
    pub fallback_lifetime_seconds: f32,

    /// Panel width (pixels).
    pub panel_width: f32,

    /// Padding inside panel (pixels).
    pub padding: f32,

    /// Border width (pixels).
    pub border_width: f32,

    /// Offset from bottom edge of screen (pixels).
    pub bottom_offset: f32,

    /// Offset from right edge of screen (pixels).
    pub right_offset: f32,

    pub title_font_size: f32,
    pub body_font_size: f32,
    pub lore_font_size: f32,
}

impl Default for ContentPanelSettings {
    fn default() -> Self {
        Self {
            fade_seconds: 1.0,
            fallback_lifetime_seconds: 5.0,
            panel_width: 380.0,
            padding: 14.0,
            border_width: 2.0,
            bottom_offset: 20.0,
            right_offset: 20.0,
            title_font_size: 20.0,
            body_font_size: 16.0,
            lore_font_size: 14.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn panel_fades_only_at_the_end() {
        let mut panel = ContentPanel::new(4.0, 1.0);
        panel.tick(Duration::from_secs_f32(2.0));
        assert_eq!(panel.fade_alpha(), 1.0);

        panel.tick(Duration::from_secs_f32(1.5));
        assert!((panel.fade_alpha() - 0.5).abs() < 1e-3);
        assert!(!panel.is_finished());

        panel.tick(Duration::from_secs_f32(1.0));
        assert!(panel.is_finished());
    }

    #[test]
    fn zero_fade_never_dims() {
        let mut panel = ContentPanel::new(1.0, 0.0);
        panel.tick(Duration::from_secs_f32(0.99));
        assert_eq!(panel.fade_alpha(), 1.0);
    }
}
