// src/ui/events.rs
//
// Messages published by UI panels for other presentation layers.

use bevy::prelude::Message;

/// Panels that report their open/closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiPanel {
    Content,
}

/// Fired when a panel opens or closes.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStateChangedEvent {
    pub panel: UiPanel,
    pub open: bool,
}
