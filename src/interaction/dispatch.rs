//! Interaction dispatch: precondition check, bookkeeping and variant hooks.
use std::time::Duration;

use super::{
    components::{Interactable, InteractionBehavior, InteractionContent, InteractionState},
    errors::InteractionError,
};

/// Side effect requested by a variant hook, carried out by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorEffect {
    None,
    InteriorTransition { scene: String },
    /// The object was consumed; `respawn_after` schedules its reactivation.
    Consumed { respawn_after: Option<Duration> },
    JournalUnlock { entry_id: String },
}

/// What a successful dispatch produced.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionOutcome {
    pub times_interacted: u32,
    pub effect: BehaviorEffect,
    /// Present when the content is valid and configured to display.
    pub content: Option<InteractionContent>,
}

/// Runs an interaction against `interactable`.
///
/// On rejection nothing is mutated.
pub fn dispatch_interaction(
    interactable: &mut Interactable,
) -> Result<InteractionOutcome, InteractionError> {
    interactable
        .availability()
        .map_err(|reason| InteractionError::Unavailable {
            id: interactable.id,
            name: interactable.display_name.clone(),
            reason,
        })?;

    interactable.state.times_interacted = interactable.state.times_interacted.saturating_add(1);
    interactable.state.has_been_interacted = true;

    let effect = on_interacted(&interactable.behavior, &mut interactable.state);

    let content = interactable
        .content
        .as_ref()
        .filter(|content| content.show_on_interact && content.is_valid())
        .cloned();

    Ok(InteractionOutcome {
        times_interacted: interactable.state.times_interacted,
        effect,
        content,
    })
}

/// Variant hook executed after the common bookkeeping.
pub fn on_interacted(behavior: &InteractionBehavior, state: &mut InteractionState) -> BehaviorEffect {
    match behavior {
        InteractionBehavior::Building { interior_scene } => interior_scene
            .as_ref()
            .filter(|scene| !scene.trim().is_empty())
            .map(|scene| BehaviorEffect::InteriorTransition {
                scene: scene.clone(),
            })
            .unwrap_or(BehaviorEffect::None),
        InteractionBehavior::Prop {
            consume_on_use,
            respawn_seconds,
        } => {
            if !consume_on_use {
                return BehaviorEffect::None;
            }
            state.interactable = false;
            state.active = false;
            BehaviorEffect::Consumed {
                respawn_after: respawn_delay(*respawn_seconds),
            }
        }
        InteractionBehavior::Lore { journal_entry } => journal_entry
            .as_ref()
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| BehaviorEffect::JournalUnlock {
                entry_id: entry.clone(),
            })
            .unwrap_or(BehaviorEffect::None),
        InteractionBehavior::Generic => BehaviorEffect::None,
    }
}

/// Converts a configured respawn delay, treating non-positive or
/// unrepresentable values as "never respawns".
fn respawn_delay(seconds: Option<f32>) -> Option<Duration> {
    seconds
        .filter(|seconds| seconds.is_finite() && *seconds > 0.0)
        .and_then(|seconds| Duration::try_from_secs_f32(seconds).ok())
}

/// Restores a consumed prop once its respawn delay has elapsed.
pub fn reactivate(state: &mut InteractionState) {
    state.active = true;
    state.interactable = true;
    state.has_been_interacted = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::components::{InteractableId, InteractionCategory, UnavailableReason};

    fn interactable(behavior: InteractionBehavior) -> Interactable {
        Interactable::new(
            InteractableId::new(1),
            "Thing",
            InteractionCategory::General,
            behavior,
        )
    }

    #[test]
    fn single_use_content_dispatches_exactly_once() {
        let mut notice = interactable(InteractionBehavior::Generic)
            .with_content(InteractionContent::new("Notice", "Town rules.").single_use());

        let outcome = dispatch_interaction(&mut notice).expect("first interaction succeeds");
        assert_eq!(outcome.times_interacted, 1);
        assert!(notice.state.has_been_interacted);

        for _ in 0..3 {
            let err = dispatch_interaction(&mut notice).expect_err("repeat is rejected");
            assert!(matches!(
                err,
                InteractionError::Unavailable {
                    reason: UnavailableReason::AlreadyUsed,
                    ..
                }
            ));
        }
        assert_eq!(notice.state.times_interacted, 1);
    }

    #[test]
    fn rejection_leaves_state_untouched() {
        let mut thing = interactable(InteractionBehavior::Generic);
        thing.state.interactable = false;
        let before = thing.state;

        assert!(dispatch_interaction(&mut thing).is_err());
        assert_eq!(thing.state, before);
    }

    #[test]
    fn content_is_surfaced_only_when_valid_and_enabled() {
        let mut valid = interactable(InteractionBehavior::Generic)
            .with_content(InteractionContent::new("Well", "Cold water.").with_lore("Dug by the first settlers."));
        let outcome = dispatch_interaction(&mut valid).unwrap();
        assert_eq!(outcome.content.map(|c| c.lore_text), Some("Dug by the first settlers.".to_string()));

        let mut blank = interactable(InteractionBehavior::Generic)
            .with_content(InteractionContent::new("Well", " "));
        assert!(dispatch_interaction(&mut blank).unwrap().content.is_none());

        let mut hidden_content = InteractionContent::new("Well", "Cold water.");
        hidden_content.show_on_interact = false;
        let mut hidden = interactable(InteractionBehavior::Generic).with_content(hidden_content);
        assert!(dispatch_interaction(&mut hidden).unwrap().content.is_none());
    }

    #[test]
    fn building_with_interior_requests_transition() {
        let mut house = interactable(InteractionBehavior::Building {
            interior_scene: Some("cottage_interior".into()),
        });
        let outcome = dispatch_interaction(&mut house).unwrap();
        assert_eq!(
            outcome.effect,
            BehaviorEffect::InteriorTransition {
                scene: "cottage_interior".into()
            }
        );

        let mut shed = interactable(InteractionBehavior::Building {
            interior_scene: None,
        });
        assert_eq!(dispatch_interaction(&mut shed).unwrap().effect, BehaviorEffect::None);
    }

    #[test]
    fn consumed_prop_blocks_until_reactivated() {
        let mut crate_prop = interactable(InteractionBehavior::Prop {
            consume_on_use: true,
            respawn_seconds: Some(2.0),
        });

        let outcome = dispatch_interaction(&mut crate_prop).unwrap();
        assert_eq!(
            outcome.effect,
            BehaviorEffect::Consumed {
                respawn_after: Some(Duration::from_secs(2))
            }
        );
        assert!(!crate_prop.state.interactable);
        assert!(dispatch_interaction(&mut crate_prop).is_err());
        assert_eq!(crate_prop.state.times_interacted, 1);

        reactivate(&mut crate_prop.state);
        assert!(crate_prop.state.interactable);
        assert!(!crate_prop.state.has_been_interacted);
        assert!(crate_prop.can_interact());
    }

    #[test]
    fn prop_without_respawn_is_consumed_for_good() {
        let mut herb = interactable(InteractionBehavior::Prop {
            consume_on_use: true,
            respawn_seconds: Some(0.0),
        });
        assert_eq!(
            dispatch_interaction(&mut herb).unwrap().effect,
            BehaviorEffect::Consumed { respawn_after: None }
        );
        assert!(!herb.state.active);

        for bad in [f32::INFINITY, f32::NAN, f32::MAX, -1.0] {
            let mut stone = interactable(InteractionBehavior::Prop {
                consume_on_use: true,
                respawn_seconds: Some(bad),
            });
            assert_eq!(
                dispatch_interaction(&mut stone).unwrap().effect,
                BehaviorEffect::Consumed { respawn_after: None },
                "respawn delay {bad}"
            );
        }

        let mut bench = interactable(InteractionBehavior::Prop {
            consume_on_use: false,
            respawn_seconds: None,
        });
        dispatch_interaction(&mut bench).unwrap();
        assert!(bench.can_interact());
    }

    #[test]
    fn lore_unlocks_named_journal_entry() {
        let mut stone = interactable(InteractionBehavior::Lore {
            journal_entry: Some("founding_of_hearthvale".into()),
        });
        assert_eq!(
            dispatch_interaction(&mut stone).unwrap().effect,
            BehaviorEffect::JournalUnlock {
                entry_id: "founding_of_hearthvale".into()
            }
        );
    }
}
