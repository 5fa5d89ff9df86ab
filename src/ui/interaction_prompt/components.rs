// src/ui/interaction_prompt/components.rs
//
// Prompt label state driven by InteractionPromptEvent.

use bevy::prelude::*;

use crate::interaction::{
    components::InteractionCategory,
    events::{InteractionPromptEvent, PromptAction},
};

/// Marker for the prompt label root node.
#[derive(Component, Debug)]
pub struct InteractionPromptLabel;

/// Marker for the prompt's text node.
#[derive(Component, Debug)]
pub struct InteractionPromptText;

/// What the prompt label should currently show.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct PromptState {
    text: Option<String>,
    category: InteractionCategory,
    /// Hidden while another panel covers the screen.
    suppressed: bool,
    /// Seconds left before the label hides itself; `None` keeps it up until `Hide`.
    remaining: Option<f32>,
}

impl PromptState {
    pub fn apply(&mut self, event: &InteractionPromptEvent) {
        match event.action {
            PromptAction::Show | PromptAction::Update => {
                self.text = Some(event.prompt_text.clone());
                self.category = event.category;
                self.remaining = (event.display_duration.is_finite()
                    && event.display_duration > 0.0)
                    .then_some(event.display_duration);
            }
            PromptAction::Hide => {
                self.text = None;
                self.remaining = None;
            }
        }
    }

    pub fn is_timed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Counts down the display duration, returning true when the label expired.
    pub fn tick(&mut self, delta_seconds: f32) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };
        *remaining -= delta_seconds;
        if *remaining > 0.0 {
            return false;
        }
        self.remaining = None;
        self.text = None;
        true
    }

    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }

    /// Text to display, or `None` when the label should be hidden.
    pub fn visible_text(&self) -> Option<&str> {
        if self.suppressed {
            return None;
        }
        self.text.as_deref()
    }

    pub fn category(&self) -> InteractionCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(action: PromptAction, text: &str) -> InteractionPromptEvent {
        InteractionPromptEvent {
            action,
            prompt_text: text.into(),
            display_duration: 5.0,
            category: InteractionCategory::Door,
        }
    }

    #[test]
    fn show_update_hide_cycle() {
        let mut state = PromptState::default();
        state.apply(&event(PromptAction::Show, "Press E to enter"));
        assert_eq!(state.visible_text(), Some("Press E to enter"));
        assert_eq!(state.category(), InteractionCategory::Door);

        state.apply(&event(PromptAction::Update, "Press E to enter again"));
        assert_eq!(state.visible_text(), Some("Press E to enter again"));

        state.apply(&InteractionPromptEvent::hide());
        assert_eq!(state.visible_text(), None);
    }

    #[test]
    fn label_expires_after_display_duration_until_next_show() {
        let mut state = PromptState::default();
        state.apply(&event(PromptAction::Show, "Press E"));

        assert!(!state.tick(4.0));
        assert_eq!(state.visible_text(), Some("Press E"));
        assert!(state.tick(1.5));
        assert_eq!(state.visible_text(), None);
        assert!(!state.is_timed());

        state.apply(&event(PromptAction::Update, "Press E again"));
        assert!(state.is_timed());
        assert_eq!(state.visible_text(), Some("Press E again"));
    }

    #[test]
    fn zero_duration_keeps_label_until_hidden() {
        let mut state = PromptState::default();
        let mut show = event(PromptAction::Show, "Press E");
        show.display_duration = 0.0;
        state.apply(&show);

        assert!(!state.tick(100.0));
        assert_eq!(state.visible_text(), Some("Press E"));
    }

    #[test]
    fn suppression_hides_without_forgetting() {
        let mut state = PromptState::default();
        state.apply(&event(PromptAction::Show, "Press E"));
        state.set_suppressed(true);
        assert_eq!(state.visible_text(), None);

        state.set_suppressed(false);
        assert_eq!(state.visible_text(), Some("Press E"));
    }
}
