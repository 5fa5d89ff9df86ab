//! Highlight/prompt state machine tracking the nearest interactable.
use bevy::prelude::*;

/// Edge emitted when the focused interactable changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTransition {
    Enter(Entity),
    Exit(Entity),
}

/// Current nearest and highlighted interactables.
///
/// The two only differ while a transition list is being applied; after
/// every `observe` or `release` they are equal.
#[derive(Resource, Debug, Default)]
pub struct InteractionFocus {
    nearest: Option<Entity>,
    highlighted: Option<Entity>,
}

impl InteractionFocus {
    pub fn nearest(&self) -> Option<Entity> {
        self.nearest
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn highlighted(&self) -> Option<Entity> {
        self.highlighted
    }

    /// Feeds the latest scan result, returning the transitions to apply in order.
    ///
    /// An unchanged result yields nothing, so transitions fire on edges only.
    pub fn observe(&mut self, nearest: Option<Entity>) -> Vec<FocusTransition> {
        if nearest == self.nearest {
            return Vec::new();
        }

        let mut transitions = Vec::with_capacity(2);
        if let Some(previous) = self.highlighted.take() {
            transitions.push(FocusTransition::Exit(previous));
        }

        self.nearest = nearest;
        if let Some(next) = nearest {
            self.highlighted = Some(next);
            transitions.push(FocusTransition::Enter(next));
        }
        transitions
    }

    /// Drops `entity` from focus ahead of unregistration.
    ///
    /// Returns the exit transition when `entity` was focused.
    pub fn release(&mut self, entity: Entity) -> Option<FocusTransition> {
        if self.nearest != Some(entity) && self.highlighted != Some(entity) {
            return None;
        }
        self.nearest = None;
        self.highlighted = None;
        Some(FocusTransition::Exit(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn idle_to_tracking_enters_once() {
        let e = entities(1);
        let mut focus = InteractionFocus::default();

        assert_eq!(focus.observe(Some(e[0])), vec![FocusTransition::Enter(e[0])]);
        assert!(focus.observe(Some(e[0])).is_empty());
        assert_eq!(focus.highlighted(), Some(e[0]));
    }

    #[test]
    fn switching_candidates_exits_before_entering() {
        let e = entities(2);
        let mut focus = InteractionFocus::default();
        focus.observe(Some(e[0]));

        assert_eq!(
            focus.observe(Some(e[1])),
            vec![FocusTransition::Exit(e[0]), FocusTransition::Enter(e[1])]
        );
        assert_eq!(focus.nearest(), Some(e[1]));
        assert_eq!(focus.highlighted(), Some(e[1]));
    }

    #[test]
    fn tracking_to_idle_exits() {
        let e = entities(1);
        let mut focus = InteractionFocus::default();
        focus.observe(Some(e[0]));

        assert_eq!(focus.observe(None), vec![FocusTransition::Exit(e[0])]);
        assert!(focus.observe(None).is_empty());
        assert_eq!(focus.highlighted(), None);
    }

    #[test]
    fn highlighted_tracks_nearest_over_any_sequence() {
        let e = entities(3);
        let mut focus = InteractionFocus::default();
        let sequence = [
            Some(e[0]),
            Some(e[0]),
            Some(e[1]),
            None,
            Some(e[2]),
            Some(e[1]),
            None,
            None,
        ];

        for step in sequence {
            let transitions = focus.observe(step);
            let enters = transitions
                .iter()
                .filter(|t| matches!(t, FocusTransition::Enter(_)))
                .count();
            assert!(enters <= 1);
            assert_eq!(focus.highlighted(), focus.nearest());
            assert_eq!(focus.nearest(), step);
        }
    }

    #[test]
    fn release_exits_only_the_focused_entity() {
        let e = entities(2);
        let mut focus = InteractionFocus::default();
        focus.observe(Some(e[0]));

        assert_eq!(focus.release(e[1]), None);
        assert_eq!(focus.release(e[0]), Some(FocusTransition::Exit(e[0])));
        assert_eq!(focus.nearest(), None);
        assert_eq!(focus.release(e[0]), None);
        // A later scan that finds nothing must not exit again.
        assert!(focus.observe(None).is_empty());
    }
}
