//! Rolling in-memory history of dispatched interactions for debug overlays.
use std::collections::VecDeque;

use bevy::prelude::*;

use super::{
    components::InteractableId,
    events::{JournalEntryUnlocked, ObjectInteractedEvent},
};

const DEFAULT_INTERACTION_HISTORY_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionRecordKind {
    Interacted {
        id: InteractableId,
        display_name: String,
    },
    JournalUnlocked {
        entry_id: String,
    },
}

#[derive(Debug, Clone)]
pub struct InteractionRecord {
    pub occurred_at_seconds: f64,
    pub kind: InteractionRecordKind,
}

/// Bounded log; the oldest records are dropped first.
#[derive(Resource, Debug)]
pub struct InteractionHistory {
    capacity: usize,
    records: VecDeque<InteractionRecord>,
}

impl InteractionHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            records: VecDeque::new(),
        }
    }

    pub fn push(&mut self, record: InteractionRecord) {
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn records(&self) -> impl DoubleEndedIterator<Item = &InteractionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// How many times `id` shows up in the retained history.
    pub fn count_for(&self, id: InteractableId) -> usize {
        self.records
            .iter()
            .filter(|record| {
                matches!(&record.kind, InteractionRecordKind::Interacted { id: recorded, .. } if *recorded == id)
            })
            .count()
    }
}

impl Default for InteractionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_INTERACTION_HISTORY_CAPACITY)
    }
}

pub fn record_interaction_history(
    time: Res<Time>,
    mut history: ResMut<InteractionHistory>,
    mut interactions: MessageReader<ObjectInteractedEvent>,
    mut unlocks: MessageReader<JournalEntryUnlocked>,
) {
    let now = time.elapsed_secs_f64();

    for event in interactions.read() {
        history.push(InteractionRecord {
            occurred_at_seconds: now,
            kind: InteractionRecordKind::Interacted {
                id: event.id,
                display_name: event.display_name.clone(),
            },
        });
    }

    for event in unlocks.read() {
        history.push(InteractionRecord {
            occurred_at_seconds: now,
            kind: InteractionRecordKind::JournalUnlocked {
                entry_id: event.entry_id.clone(),
            },
        });
    }

    debug!(target: "interaction", "Interaction history holds {} records", history.len());
}
