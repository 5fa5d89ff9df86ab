//! Messages exchanged between the interaction core and its collaborators.
use bevy::prelude::{Entity, Message};

use super::components::{InteractableId, InteractionCategory, InteractionContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Show,
    Hide,
    Update,
}

/// Drives the interaction prompt label.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct InteractionPromptEvent {
    pub action: PromptAction,
    pub prompt_text: String,
    pub display_duration: f32,
    pub category: InteractionCategory,
}

impl InteractionPromptEvent {
    pub fn hide() -> Self {
        Self {
            action: PromptAction::Hide,
            prompt_text: String::new(),
            display_duration: 0.0,
            category: InteractionCategory::General,
        }
    }
}

/// Fired after every successful dispatch.
#[derive(Message, Debug, Clone)]
pub struct ObjectInteractedEvent {
    #[allow(dead_code)]
    pub entity: Entity,
    pub id: InteractableId,
    pub display_name: String,
    pub category: InteractionCategory,
}

/// Asks for an interaction on `entity`; written by input handling or scripts.
#[derive(Message, Debug, Clone, Copy)]
pub struct TriggerInteractionRequest {
    pub entity: Entity,
}

/// Content payload for the content panel.
#[derive(Message, Debug, Clone)]
pub struct ContentDisplayRequested {
    #[allow(dead_code)]
    pub entity: Entity,
    pub content: InteractionContent,
}

/// A building asked to move the player into its interior scene.
#[derive(Message, Debug, Clone)]
pub struct InteriorTransitionRequested {
    pub entity: Entity,
    pub scene: String,
}

/// A lore marker unlocked a journal entry.
#[derive(Message, Debug, Clone)]
pub struct JournalEntryUnlocked {
    pub entity: Entity,
    pub entry_id: String,
}
