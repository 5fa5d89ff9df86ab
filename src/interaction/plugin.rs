//! Interaction plugin wiring the registry, focus tracking and dispatch systems.
use bevy::prelude::*;

use super::{
    components::InteractableIdGenerator,
    config::InteractionSettings,
    events::{
        ContentDisplayRequested, InteractionPromptEvent, InteriorTransitionRequested,
        JournalEntryUnlocked, ObjectInteractedEvent, TriggerInteractionRequest,
    },
    focus::InteractionFocus,
    reactivation::ReactivationQueue,
    registry::InteractableRegistry,
    systems::{
        advance_reactivations, handle_interaction_input, process_interaction_requests,
        register_spawned_interactables, report_nearby_interactables, scan_nearest_interactable,
        sync_interactable_visibility, unregister_removed_interactables, validate_interaction_setup, InteractionReadiness,
    },
    telemetry::{record_interaction_history, InteractionHistory},
};

/// Ordering labels for the interaction frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InteractionSet {
    /// Registry bookkeeping and due reactivations.
    Lifecycle,
    /// Proximity scan and focus transitions.
    Detect,
    /// Input polling and dispatch.
    Dispatch,
    /// Consumers of the messages published above.
    Feedback,
}

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        let settings = InteractionSettings::load_or_default();
        info!(
            target: "interaction",
            "Interaction configured: radius {:.2}, prompt {:.1}s",
            settings.interaction_radius, settings.default_display_seconds
        );

        app.insert_resource(settings)
            .init_resource::<InteractableIdGenerator>()
            .init_resource::<InteractableRegistry>()
            .init_resource::<InteractionFocus>()
            .init_resource::<ReactivationQueue>()
            .init_resource::<InteractionReadiness>()
            .init_resource::<InteractionHistory>()
            .add_message::<InteractionPromptEvent>()
            .add_message::<ObjectInteractedEvent>()
            .add_message::<TriggerInteractionRequest>()
            .add_message::<ContentDisplayRequested>()
            .add_message::<InteriorTransitionRequested>()
            .add_message::<JournalEntryUnlocked>()
            .configure_sets(
                Update,
                (
                    InteractionSet::Lifecycle,
                    InteractionSet::Detect,
                    InteractionSet::Dispatch,
                    InteractionSet::Feedback,
                )
                    .chain(),
            )
            .add_systems(PostStartup, validate_interaction_setup)
            .add_systems(
                Update,
                (
                    (
                        register_spawned_interactables,
                        unregister_removed_interactables,
                        advance_reactivations,
                    )
                        .chain()
                        .in_set(InteractionSet::Lifecycle),
                    scan_nearest_interactable.in_set(InteractionSet::Detect),
                    (handle_interaction_input, process_interaction_requests)
                        .chain()
                        .in_set(InteractionSet::Dispatch),
                    (
                        sync_interactable_visibility,
                        record_interaction_history,
                        report_nearby_interactables,
                    )
                        .in_set(InteractionSet::Feedback),
                ),
            );
    }
}
