//! Deferred reactivation callbacks keyed by game time.
use std::time::Duration;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy)]
struct PendingReactivation {
    owner: Entity,
    due_at: Duration,
}

/// One-shot callback queue polled once per frame against the game clock.
///
/// Each owner has at most one pending entry.
#[derive(Resource, Debug, Default)]
pub struct ReactivationQueue {
    pending: Vec<PendingReactivation>,
}

impl ReactivationQueue {
    /// Queues `owner` to reactivate `delay` after `now`, replacing any earlier entry.
    ///
    /// Returns false, leaving nothing queued, when the due time overflows.
    pub fn schedule(&mut self, owner: Entity, now: Duration, delay: Duration) -> bool {
        self.cancel(owner);
        let Some(due_at) = now.checked_add(delay) else {
            return false;
        };
        self.pending.push(PendingReactivation { owner, due_at });
        true
    }

    /// Removes the pending entry for `owner`, returning whether one existed.
    pub fn cancel(&mut self, owner: Entity) -> bool {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.owner != owner);
        self.pending.len() != before
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_pending(&self, owner: Entity) -> bool {
        self.pending.iter().any(|entry| entry.owner == owner)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Pops every entry due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Duration) -> Vec<Entity> {
        let mut due: Vec<PendingReactivation> = Vec::new();
        self.pending.retain(|entry| {
            if entry.due_at <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| entry.due_at);
        due.into_iter().map(|entry| entry.owner).collect()
    }
}
