// src/ui/interaction_prompt/systems.rs
//
// Systems that keep the on-screen interaction prompt in sync with focus.

use bevy::prelude::*;

use crate::interaction::{components::InteractionCategory, events::InteractionPromptEvent};
use crate::ui::events::{UiPanel, UiStateChangedEvent};

use super::components::{InteractionPromptLabel, InteractionPromptText, PromptState};

const BACKGROUND_COLOR: Color = Color::srgba(0.05, 0.05, 0.07, 0.8);
const FONT_SIZE: f32 = 18.0;

/// Spawns the (initially hidden) prompt label at the bottom centre of the screen.
pub fn spawn_prompt_label(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(90.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                display: Display::None,
                ..default()
            },
            InteractionPromptLabel,
            Name::new("Interaction Prompt"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                    ..default()
                },
                BackgroundColor(BACKGROUND_COLOR),
                Text::new(""),
                TextFont {
                    font_size: FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                InteractionPromptText,
            ));
        });
}

/// Folds prompt and panel messages into `PromptState`.
pub fn apply_prompt_events(
    mut state: ResMut<PromptState>,
    mut prompts: MessageReader<InteractionPromptEvent>,
    mut ui_changes: MessageReader<UiStateChangedEvent>,
) {
    for change in ui_changes.read() {
        if change.panel == UiPanel::Content {
            state.set_suppressed(change.open);
        }
    }
    for prompt in prompts.read() {
        state.apply(prompt);
    }
}

/// Hides the label once its display duration runs out.
pub fn expire_prompt_label(time: Res<Time>, mut state: ResMut<PromptState>) {
    if !state.is_timed() {
        return;
    }
    if state.bypass_change_detection().tick(time.delta_secs()) {
        state.set_changed();
    }
}

/// Pushes `PromptState` into the label's layout and text.
pub fn render_prompt_label(
    state: Res<PromptState>,
    mut labels: Query<&mut Node, With<InteractionPromptLabel>>,
    mut texts: Query<(&mut Text, &mut TextColor), With<InteractionPromptText>>,
) {
    if !state.is_changed() {
        return;
    }

    let visible = state.visible_text();
    for mut node in labels.iter_mut() {
        node.display = if visible.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }

    let Some(text_value) = visible else {
        return;
    };
    for (mut text, mut color) in texts.iter_mut() {
        text.0 = text_value.to_string();
        color.0 = category_color(state.category());
    }
}

fn category_color(category: InteractionCategory) -> Color {
    match category {
        InteractionCategory::Door => Color::srgb(0.95, 0.85, 0.6),
        InteractionCategory::Item => Color::srgb(0.7, 0.95, 0.7),
        InteractionCategory::Npc | InteractionCategory::Dialogue => Color::srgb(0.7, 0.85, 1.0),
        InteractionCategory::Combat => Color::srgb(1.0, 0.6, 0.55),
        InteractionCategory::General => Color::WHITE,
    }
}
