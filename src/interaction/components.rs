//! Interactable component, its content payload and per-variant behaviour data.
use std::fmt;

use bevy::prelude::*;

const DEFAULT_DISPLAY_SECONDS: f32 = 5.0;

/// Unique identifier for an interactable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractableId(u64);

impl InteractableId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[allow(dead_code)]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InteractableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OBJ-{:04}", self.0)
    }
}

/// Resource that issues monotonically increasing interactable ids.
#[derive(Resource, Default)]
pub struct InteractableIdGenerator {
    next: u64,
}

impl InteractableIdGenerator {
    pub fn next_id(&mut self) -> InteractableId {
        let id = self.next;
        self.next += 1;
        InteractableId::new(id)
    }
}

/// Broad category used by prompts and audio cue selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionCategory {
    Door,
    Item,
    Npc,
    Combat,
    Dialogue,
    #[default]
    General,
}

impl InteractionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Item => "item",
            Self::Npc => "npc",
            Self::Combat => "combat",
            Self::Dialogue => "dialogue",
            Self::General => "general",
        }
    }
}

impl fmt::Display for InteractionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the content panel shows when an object is interacted with.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionContent {
    pub title: String,
    pub description: String,
    pub lore_text: String,
    pub category_label: String,
    pub display_duration: f32,
    /// When false the object only accepts a single interaction.
    pub can_repeat: bool,
    pub show_on_interact: bool,
}

impl InteractionContent {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            lore_text: String::new(),
            category_label: String::new(),
            display_duration: DEFAULT_DISPLAY_SECONDS,
            can_repeat: true,
            show_on_interact: true,
        }
    }

    pub fn with_lore(mut self, lore_text: impl Into<String>) -> Self {
        self.lore_text = lore_text.into();
        self
    }

    pub fn with_category_label(mut self, label: impl Into<String>) -> Self {
        self.category_label = label.into();
        self
    }

    pub fn with_display_duration(mut self, seconds: f32) -> Self {
        self.display_duration = seconds;
        self
    }

    pub fn single_use(mut self) -> Self {
        self.can_repeat = false;
        self
    }

    /// Content is only displayable with a non-blank title and description.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Mutable interaction bookkeeping carried by every interactable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionState {
    pub interactable: bool,
    /// Mirrors scene activation; inactive objects are hidden and never scanned.
    pub active: bool,
    pub has_been_interacted: bool,
    pub times_interacted: u32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            interactable: true,
            active: true,
            has_been_interacted: false,
            times_interacted: 0,
        }
    }
}

/// Variant-specific behaviour executed after the common dispatch bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionBehavior {
    /// A building; entering is possible when an interior scene is named.
    Building { interior_scene: Option<String> },
    /// A world prop that can be consumed and optionally respawn.
    Prop {
        consume_on_use: bool,
        respawn_seconds: Option<f32>,
    },
    /// A lore marker that may unlock a journal entry.
    Lore { journal_entry: Option<String> },
    Generic,
}

impl InteractionBehavior {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Building { .. } => "building",
            Self::Prop { .. } => "prop",
            Self::Lore { .. } => "lore",
            Self::Generic => "generic",
        }
    }
}

/// Why an object currently refuses interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    Disabled,
    Inactive,
    AlreadyUsed,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Disabled => "interaction disabled",
            Self::Inactive => "object inactive",
            Self::AlreadyUsed => "single-use content already consumed",
        };
        f.write_str(label)
    }
}

/// An object in the world the player can engage with.
#[derive(Component, Debug, Clone)]
pub struct Interactable {
    pub id: InteractableId,
    pub display_name: String,
    pub category: InteractionCategory,
    pub prompt_text: Option<String>,
    pub content: Option<InteractionContent>,
    pub state: InteractionState,
    pub behavior: InteractionBehavior,
    highlighted: bool,
}

impl Interactable {
    pub fn new(
        id: InteractableId,
        display_name: impl Into<String>,
        category: InteractionCategory,
        behavior: InteractionBehavior,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            category,
            prompt_text: None,
            content: None,
            state: InteractionState::default(),
            behavior,
            highlighted: false,
        }
    }

    pub fn with_content(mut self, content: InteractionContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt_text = Some(prompt.into());
        self
    }

    /// Returns `Ok` when the object accepts an interaction right now.
    pub fn availability(&self) -> Result<(), UnavailableReason> {
        if !self.state.interactable {
            return Err(UnavailableReason::Disabled);
        }
        if !self.state.active {
            return Err(UnavailableReason::Inactive);
        }
        let single_use = self.content.as_ref().is_some_and(|content| !content.can_repeat);
        if single_use && self.state.has_been_interacted {
            return Err(UnavailableReason::AlreadyUsed);
        }
        Ok(())
    }

    pub fn can_interact(&self) -> bool {
        self.availability().is_ok()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Sets the highlight flag, returning whether it actually changed.
    pub fn set_highlighted(&mut self, highlighted: bool) -> bool {
        if self.highlighted == highlighted {
            return false;
        }
        self.highlighted = highlighted;
        true
    }

    pub fn prompt(&self) -> String {
        self.prompt_text
            .clone()
            .unwrap_or_else(|| format!("Press E to interact with {}", self.display_name))
    }

    /// How long prompts and panels for this object stay on screen.
    pub fn display_duration(&self, fallback: f32) -> f32 {
        self.content
            .as_ref()
            .map(|content| content.display_duration)
            .filter(|seconds| *seconds > 0.0)
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crate_prop() -> Interactable {
        Interactable::new(
            InteractableId::new(3),
            "Supply Crate",
            InteractionCategory::Item,
            InteractionBehavior::Prop {
                consume_on_use: true,
                respawn_seconds: Some(2.0),
            },
        )
    }

    #[test]
    fn content_requires_title_and_description() {
        assert!(InteractionContent::new("Well", "A stone well.").is_valid());
        assert!(!InteractionContent::new("", "A stone well.").is_valid());
        assert!(!InteractionContent::new("Well", "").is_valid());
        assert!(!InteractionContent::new("   ", "A stone well.").is_valid());
        assert!(!InteractionContent::new("Well", "\t\n").is_valid());
    }

    #[test]
    fn availability_reports_first_blocking_reason() {
        let mut prop = crate_prop();
        assert_eq!(prop.availability(), Ok(()));

        prop.state.active = false;
        assert_eq!(prop.availability(), Err(UnavailableReason::Inactive));

        prop.state.interactable = false;
        assert_eq!(prop.availability(), Err(UnavailableReason::Disabled));
        assert!(!prop.can_interact());
    }

    #[test]
    fn single_use_content_blocks_after_first_interaction() {
        let mut prop = crate_prop().with_content(InteractionContent::new("Crate", "Food").single_use());
        assert!(prop.can_interact());

        prop.state.has_been_interacted = true;
        assert_eq!(prop.availability(), Err(UnavailableReason::AlreadyUsed));

        prop.content = None;
        assert!(prop.can_interact());
    }

    #[test]
    fn highlight_toggle_is_idempotent() {
        let mut prop = crate_prop();
        assert!(prop.set_highlighted(true));
        assert!(!prop.set_highlighted(true));
        assert!(prop.is_highlighted());
        assert!(prop.set_highlighted(false));
        assert!(!prop.set_highlighted(false));
    }

    #[test]
    fn prompt_falls_back_to_display_name() {
        let prop = crate_prop();
        assert_eq!(prop.prompt(), "Press E to interact with Supply Crate");
        assert_eq!(prop.with_prompt("Open crate").prompt(), "Open crate");
        assert_eq!(InteractableId::new(7).to_string(), "OBJ-0007");
    }
}
