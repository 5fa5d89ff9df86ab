//! Systems and the `InteractionSystem` param that implement the interaction loop.
use bevy::{ecs::system::SystemParam, prelude::*};

use crate::{core::plugin::SimulationClock, player::components::Player};

use super::{
    components::Interactable,
    config::InteractionSettings,
    dispatch::{dispatch_interaction, reactivate, BehaviorEffect, InteractionOutcome},
    errors::{InteractionError, SetupIssue, SetupReport},
    events::{
        ContentDisplayRequested, InteractionPromptEvent, InteriorTransitionRequested,
        JournalEntryUnlocked, ObjectInteractedEvent, PromptAction, TriggerInteractionRequest,
    },
    focus::{FocusTransition, InteractionFocus},
    proximity::{nearest_candidate, within_radius, NearestCandidate, ProximityCandidate},
    reactivation::ReactivationQueue,
    registry::InteractableRegistry,
    telemetry::{InteractionHistory, InteractionRecordKind},
};

const REPORTED_HISTORY_RECORDS: usize = 5;

/// Whether setup validation left the interaction system usable.
#[derive(Resource, Debug)]
pub struct InteractionReadiness {
    pub enabled: bool,
}

impl Default for InteractionReadiness {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(SystemParam)]
pub struct InteractionOutputs<'w> {
    prompts: MessageWriter<'w, InteractionPromptEvent>,
    interacted: MessageWriter<'w, ObjectInteractedEvent>,
    content: MessageWriter<'w, ContentDisplayRequested>,
    interiors: MessageWriter<'w, InteriorTransitionRequested>,
    journal: MessageWriter<'w, JournalEntryUnlocked>,
}

/// Registry, focus, dispatch and reactivation bundled behind one system param.
///
/// Setup code and gameplay systems reach the interaction core through this
/// param instead of a global instance.
#[derive(SystemParam)]
pub struct InteractionSystem<'w, 's> {
    registry: ResMut<'w, InteractableRegistry>,
    focus: ResMut<'w, InteractionFocus>,
    reactivations: ResMut<'w, ReactivationQueue>,
    readiness: ResMut<'w, InteractionReadiness>,
    clock: Res<'w, SimulationClock>,
    settings: Res<'w, InteractionSettings>,
    interactables: Query<'w, 's, (&'static mut Interactable, &'static Transform)>,
    actors: Query<'w, 's, &'static Transform, (With<Player>, Without<Interactable>)>,
    outputs: InteractionOutputs<'w>,
}

impl InteractionSystem<'_, '_> {
    /// Adds `entity` to the registry; duplicates are ignored.
    pub fn register(&mut self, entity: Entity) -> bool {
        if !self.interactables.contains(entity) {
            warn!(target: "interaction", "Refusing to register {:?}: no Interactable component", entity);
            return false;
        }

        let added = self.registry.register(entity);
        if added {
            debug!(target: "interaction", "Registered interactable {:?} ({} live)", entity, self.registry.len());
        } else {
            debug!(target: "interaction", "Interactable {:?} already registered", entity);
        }
        added
    }

    /// Removes `entity`, tearing down its highlight/prompt and pending respawn first.
    pub fn unregister(&mut self, entity: Entity) -> bool {
        let exit = self.focus.release(entity);
        if let Some(exit) = exit {
            self.apply_transition(exit);
        }
        if self.reactivations.cancel(entity) {
            debug!(target: "interaction", "Cancelled pending reactivation for {:?}", entity);
        }

        let removed = self.registry.unregister(entity);
        if removed {
            debug!(target: "interaction", "Unregistered interactable {:?} ({} live)", entity, self.registry.len());
        }
        removed
    }

    /// Registered entities that are still alive and active.
    pub fn all(&self) -> Vec<Entity> {
        self.registry
            .iter()
            .filter(|entity| {
                self.interactables
                    .get(*entity)
                    .is_ok_and(|(interactable, _)| interactable.state.active)
            })
            .collect()
    }

    /// Live, active registered entities within `radius` of `position`.
    pub fn in_range(&self, position: Vec3, radius: f32) -> Vec<Entity> {
        let live = self.registry.iter().filter_map(|entity| {
            self.interactables
                .get(entity)
                .ok()
                .filter(|(interactable, _)| interactable.state.active)
                .map(|(_, transform)| (entity, transform.translation))
        });
        within_radius(position, radius, live)
    }

    pub fn actor_position(&self) -> Option<Vec3> {
        self.actors
            .single()
            .ok()
            .map(|transform| transform.translation)
    }

    /// Recomputes the nearest candidate and applies any focus transitions.
    pub fn scan(&mut self) -> Option<NearestCandidate> {
        let actor = self.actor_position()?;

        let candidates: Vec<ProximityCandidate> = self
            .registry
            .iter()
            .filter_map(|entity| {
                self.interactables
                    .get(entity)
                    .ok()
                    .map(|(interactable, transform)| ProximityCandidate {
                        entity,
                        position: transform.translation,
                        eligible: interactable.can_interact(),
                    })
            })
            .collect();

        let nearest = nearest_candidate(actor, self.settings.interaction_radius, candidates);
        let transitions = self.focus.observe(nearest.map(|candidate| candidate.entity));
        for transition in transitions {
            self.apply_transition(transition);
        }
        nearest
    }

    fn apply_transition(&mut self, transition: FocusTransition) {
        match transition {
            FocusTransition::Exit(entity) => {
                if let Ok((mut interactable, _)) = self.interactables.get_mut(entity) {
                    interactable.set_highlighted(false);
                }
                self.outputs.prompts.write(InteractionPromptEvent::hide());
            }
            FocusTransition::Enter(entity) => {
                let Ok((mut interactable, _)) = self.interactables.get_mut(entity) else {
                    return;
                };
                interactable.set_highlighted(true);
                debug!(target: "interaction", "Focused {} ({})", interactable.display_name, interactable.id);
                self.outputs.prompts.write(InteractionPromptEvent {
                    action: PromptAction::Show,
                    prompt_text: interactable.prompt(),
                    display_duration: interactable
                        .display_duration(self.settings.default_display_seconds),
                    category: interactable.category,
                });
            }
        }
    }

    /// Executes an interaction on `entity`, publishing its results.
    ///
    /// Rejections are logged and leave every piece of state untouched.
    pub fn trigger(&mut self, entity: Entity) -> Result<InteractionOutcome, InteractionError> {
        if !self.readiness.enabled {
            debug!(target: "interaction", "Ignoring trigger on {:?}: interaction system inert", entity);
            return Err(InteractionError::Inert);
        }

        let Ok((mut interactable, _)) = self.interactables.get_mut(entity) else {
            let error = InteractionError::Missing { entity };
            warn!(target: "interaction", "Interaction rejected: {}", error);
            return Err(error);
        };

        let outcome = match dispatch_interaction(&mut interactable) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(target: "interaction", "Interaction rejected: {}", error);
                return Err(error);
            }
        };

        info!(
            target: "interaction",
            "Interacted with {} ({}, {}) x{}",
            interactable.display_name,
            interactable.id,
            interactable.behavior.variant_name(),
            outcome.times_interacted
        );

        let still_eligible = interactable.can_interact();
        let refreshed_prompt = InteractionPromptEvent {
            action: PromptAction::Update,
            prompt_text: interactable.prompt(),
            display_duration: interactable.display_duration(self.settings.default_display_seconds),
            category: interactable.category,
        };
        let interacted = ObjectInteractedEvent {
            entity,
            id: interactable.id,
            display_name: interactable.display_name.clone(),
            category: interactable.category,
        };

        match &outcome.effect {
            BehaviorEffect::None => {}
            BehaviorEffect::InteriorTransition { scene } => {
                self.outputs.interiors.write(InteriorTransitionRequested {
                    entity,
                    scene: scene.clone(),
                });
            }
            BehaviorEffect::Consumed { respawn_after } => match respawn_after {
                Some(delay) => {
                    if self.reactivations.schedule(entity, self.clock.elapsed(), *delay) {
                        debug!(target: "interaction", "{:?} respawns in {:.1}s", entity, delay.as_secs_f32());
                    } else {
                        warn!(target: "interaction", "Respawn delay for {:?} overflows the game clock; consumed permanently", entity);
                    }
                }
                None => debug!(target: "interaction", "{:?} consumed permanently", entity),
            },
            BehaviorEffect::JournalUnlock { entry_id } => {
                self.outputs.journal.write(JournalEntryUnlocked {
                    entity,
                    entry_id: entry_id.clone(),
                });
            }
        }

        if let Some(content) = &outcome.content {
            self.outputs.content.write(ContentDisplayRequested {
                entity,
                content: content.clone(),
            });
        }
        self.outputs.interacted.write(interacted);

        if still_eligible && self.focus.nearest() == Some(entity) {
            self.outputs.prompts.write(refreshed_prompt);
        }

        Ok(outcome)
    }

    /// Reactivates every consumed prop whose respawn delay has elapsed.
    pub fn reactivate_due(&mut self) {
        let due = self.reactivations.drain_due(self.clock.elapsed());
        for entity in due {
            match self.interactables.get_mut(entity) {
                Ok((mut interactable, _)) => {
                    reactivate(&mut interactable.state);
                    info!(target: "interaction", "{} ({}) respawned", interactable.display_name, interactable.id);
                }
                Err(_) => debug!(target: "interaction", "Skipping reactivation for missing {:?}", entity),
            }
        }
    }

    /// Checks the actor, radius and content setup, enabling or disabling the system.
    pub fn validate(&mut self) -> SetupReport {
        let contents = self.interactables.iter().map(|(interactable, _)| interactable);
        let report = validate_setup(
            self.actor_position().is_some(),
            self.settings.interaction_radius,
            contents,
        );
        self.readiness.enabled = report.is_ok();
        report
    }

    pub fn is_enabled(&self) -> bool {
        self.readiness.enabled
    }
}

/// Collects setup issues for the given actor presence, radius and objects.
pub fn validate_setup<'a>(
    has_actor: bool,
    radius: f32,
    interactables: impl IntoIterator<Item = &'a Interactable>,
) -> SetupReport {
    let mut issues = Vec::new();
    if !has_actor {
        issues.push(SetupIssue::MissingActor);
    }
    if radius <= 0.0 {
        issues.push(SetupIssue::NonPositiveRadius(radius));
    }
    for interactable in interactables {
        let invalid = interactable
            .content
            .as_ref()
            .is_some_and(|content| !content.is_valid());
        if invalid {
            issues.push(SetupIssue::InvalidContent {
                id: interactable.id,
                name: interactable.display_name.clone(),
            });
        }
    }
    SetupReport { issues }
}

pub fn validate_interaction_setup(mut interactions: InteractionSystem) {
    let report = interactions.validate();
    for issue in &report.issues {
        if issue.is_blocking() {
            warn!(target: "interaction", "Interaction setup error: {}", issue);
        } else {
            warn!(target: "interaction", "Interaction setup warning: {}", issue);
        }
    }

    if report.is_ok() {
        info!(target: "interaction", "Interaction setup valid ({} warnings)", report.issues.len());
    } else {
        warn!(target: "interaction", "Interaction system disabled until setup is fixed");
    }
}

/// Registers interactables spawned since the last frame.
pub fn register_spawned_interactables(
    mut params: ParamSet<(Query<Entity, Added<Interactable>>, InteractionSystem)>,
) {
    let spawned: Vec<Entity> = params.p0().iter().collect();
    if spawned.is_empty() {
        return;
    }

    let mut interactions = params.p1();
    for entity in spawned {
        interactions.register(entity);
    }
}

/// Unregisters interactables that were despawned or lost their component.
pub fn unregister_removed_interactables(
    mut removed: RemovedComponents<Interactable>,
    mut interactions: InteractionSystem,
) {
    for entity in removed.read() {
        interactions.unregister(entity);
    }
}

pub fn advance_reactivations(mut interactions: InteractionSystem) {
    interactions.reactivate_due();
}

pub fn scan_nearest_interactable(mut interactions: InteractionSystem) {
    if !interactions.is_enabled() {
        return;
    }
    interactions.scan();
}

/// Turns the interact key into a trigger request for the focused object.
pub fn handle_interaction_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    focus: Res<InteractionFocus>,
    mut requests: MessageWriter<TriggerInteractionRequest>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }

    let Some(entity) = focus.nearest() else {
        debug!(target: "interaction", "Interact pressed with nothing in range");
        return;
    };
    requests.write(TriggerInteractionRequest { entity });
}

pub fn process_interaction_requests(
    mut requests: MessageReader<TriggerInteractionRequest>,
    mut interactions: InteractionSystem,
) {
    for request in requests.read() {
        if let Ok(outcome) = interactions.trigger(request.entity) {
            debug!(target: "interaction", "Dispatch effect: {:?}", outcome.effect);
        }
    }
}

/// Logs the live interactables around the player and the latest history when F3 is pressed.
pub fn report_nearby_interactables(
    keyboard: Res<ButtonInput<KeyCode>>,
    history: Res<InteractionHistory>,
    interactions: InteractionSystem,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }
    let Some(actor) = interactions.actor_position() else {
        info!(target: "interaction", "No player to report around");
        return;
    };

    let nearby = interactions.in_range(actor, interactions.settings.interaction_radius * 4.0);
    info!(
        target: "interaction",
        "{} live interactables, {} nearby",
        interactions.all().len(),
        nearby.len()
    );
    for entity in nearby {
        if let Ok((interactable, _)) = interactions.interactables.get(entity) {
            info!(
                target: "interaction",
                "  {} {} (used {}x recently)",
                interactable.id,
                interactable.display_name,
                history.count_for(interactable.id)
            );
        }
    }

    for record in history.records().rev().take(REPORTED_HISTORY_RECORDS) {
        match &record.kind {
            InteractionRecordKind::Interacted { id, display_name } => info!(
                target: "interaction",
                "  [{:.1}s] interacted with {} ({})",
                record.occurred_at_seconds, display_name, id
            ),
            InteractionRecordKind::JournalUnlocked { entry_id } => info!(
                target: "interaction",
                "  [{:.1}s] journal entry '{}' unlocked",
                record.occurred_at_seconds, entry_id
            ),
        }
    }
}

/// Hides inactive interactables and shows them again once reactivated.
pub fn sync_interactable_visibility(
    mut query: Query<(&Interactable, &mut Visibility), Changed<Interactable>>,
) {
    for (interactable, mut visibility) in query.iter_mut() {
        let desired = if interactable.state.active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != desired {
            *visibility = desired;
        }
    }
}
