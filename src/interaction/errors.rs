//! Error and diagnostic types surfaced by the interaction system.
use std::fmt;

use bevy::prelude::Entity;

use super::components::{InteractableId, UnavailableReason};

/// Why a trigger request was rejected. No state is mutated on rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionError {
    /// Setup validation failed; the system accepts no interactions.
    Inert,
    /// The entity is gone or carries no `Interactable`.
    Missing { entity: Entity },
    Unavailable {
        id: InteractableId,
        name: String,
        reason: UnavailableReason,
    },
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inert => write!(f, "interaction system is disabled"),
            Self::Missing { entity } => write!(f, "no interactable on entity {:?}", entity),
            Self::Unavailable { id, name, reason } => {
                write!(f, "{} ({}) cannot be interacted with: {}", name, id, reason)
            }
        }
    }
}

impl std::error::Error for InteractionError {}

/// A configuration problem found by setup validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupIssue {
    MissingActor,
    NonPositiveRadius(f32),
    InvalidContent { id: InteractableId, name: String },
}

impl SetupIssue {
    /// Blocking issues leave the interaction system inert.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::MissingActor | Self::NonPositiveRadius(_))
    }
}

impl fmt::Display for SetupIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingActor => write!(f, "no player entity to measure proximity from"),
            Self::NonPositiveRadius(radius) => {
                write!(f, "interaction radius must be positive (got {:.2})", radius)
            }
            Self::InvalidContent { id, name } => {
                write!(f, "{} ({}) has content without a title or description", name, id)
            }
        }
    }
}

/// Result of validating the interaction setup.
#[derive(Debug, Clone, Default)]
pub struct SetupReport {
    pub issues: Vec<SetupIssue>,
}

impl SetupReport {
    pub fn is_ok(&self) -> bool {
        !self.issues.iter().any(SetupIssue::is_blocking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_issues_do_not_block() {
        let report = SetupReport {
            issues: vec![SetupIssue::InvalidContent {
                id: InteractableId::new(2),
                name: "Well".into(),
            }],
        };
        assert!(report.is_ok());

        let report = SetupReport {
            issues: vec![SetupIssue::NonPositiveRadius(0.0)],
        };
        assert!(!report.is_ok());
    }

    #[test]
    fn display_names_the_object() {
        let error = InteractionError::Unavailable {
            id: InteractableId::new(4),
            name: "Lore Stone".into(),
            reason: UnavailableReason::AlreadyUsed,
        };
        let message = error.to_string();
        assert!(message.contains("Lore Stone"));
        assert!(message.contains("OBJ-0004"));
        assert!(message.contains("already consumed"));
        assert!(SetupIssue::MissingActor.to_string().contains("player"));
    }
}
