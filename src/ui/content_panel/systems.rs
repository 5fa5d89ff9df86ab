// src/ui/content_panel/systems.rs
//
// Systems for spawning, fading and despawning the content panel.

use bevy::prelude::*;

use crate::interaction::events::ContentDisplayRequested;
use crate::ui::events::{UiPanel, UiStateChangedEvent};

use super::components::{ContentPanel, ContentPanelSettings, ContentPanelText, ContentPanelTracker};

const BACKGROUND_COLOR: Color = Color::srgba(0.08, 0.08, 0.1, 0.92);
const BORDER_COLOR: Color = Color::srgb(0.45, 0.4, 0.3);
const TITLE_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);
const BODY_COLOR: Color = Color::WHITE;
const LORE_COLOR: Color = Color::srgb(0.75, 0.75, 0.85);
const LABEL_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);

/// Shows the most recent content request, replacing any panel already on screen.
pub fn spawn_content_panel(
    mut commands: Commands,
    mut tracker: ResMut<ContentPanelTracker>,
    settings: Res<ContentPanelSettings>,
    mut requests: MessageReader<ContentDisplayRequested>,
    mut ui_state: MessageWriter<UiStateChangedEvent>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };
    let content = &request.content;

    let was_open = match tracker.active_panel.take() {
        Some(old_panel) => {
            commands.entity(old_panel).despawn();
            true
        }
        None => false,
    };

    let lifetime = if content.display_duration > 0.0 {
        content.display_duration
    } else {
        settings.fallback_lifetime_seconds
    };

    info!("Showing content panel '{}' for {:.1}s", content.title, lifetime);

    let text_width = settings.panel_width - settings.padding * 2.0;
    let panel_entity = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset),
                right: Val::Px(settings.right_offset),
                width: Val::Px(settings.panel_width),
                padding: UiRect::all(Val::Px(settings.padding)),
                border: UiRect::all(Val::Px(settings.border_width)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            BorderColor::from(BORDER_COLOR),
            ContentPanel::new(lifetime, settings.fade_seconds),
            Name::new("Content Panel"),
        ))
        .with_children(|parent| {
            if !content.category_label.trim().is_empty() {
                parent.spawn((
                    Text::new(content.category_label.to_uppercase()),
                    TextFont {
                        font_size: settings.lore_font_size,
                        ..default()
                    },
                    TextColor(LABEL_COLOR),
                    ContentPanelText {
                        base_color: LABEL_COLOR,
                    },
                ));
            }

            parent.spawn((
                Text::new(content.title.clone()),
                TextFont {
                    font_size: settings.title_font_size,
                    ..default()
                },
                TextColor(TITLE_COLOR),
                ContentPanelText {
                    base_color: TITLE_COLOR,
                },
            ));

            parent.spawn((
                Text::new(content.description.clone()),
                TextFont {
                    font_size: settings.body_font_size,
                    ..default()
                },
                TextColor(BODY_COLOR),
                Node {
                    max_width: Val::Px(text_width),
                    ..default()
                },
                ContentPanelText {
                    base_color: BODY_COLOR,
                },
            ));

            if !content.lore_text.trim().is_empty() {
                parent.spawn((
                    Text::new(content.lore_text.clone()),
                    TextFont {
                        font_size: settings.lore_font_size,
                        ..default()
                    },
                    TextColor(LORE_COLOR),
                    Node {
                        max_width: Val::Px(text_width),
                        ..default()
                    },
                    ContentPanelText {
                        base_color: LORE_COLOR,
                    },
                ));
            }
        })
        .id();

    tracker.active_panel = Some(panel_entity);
    if !was_open {
        ui_state.write(UiStateChangedEvent {
            panel: UiPanel::Content,
            open: true,
        });
    }
}

/// Ticks the panel lifetime, fades it out and despawns it when finished.
pub fn update_content_panel(
    mut commands: Commands,
    time: Res<Time>,
    mut tracker: ResMut<ContentPanelTracker>,
    mut panels: Query<(Entity, &mut ContentPanel, &mut BackgroundColor)>,
    mut texts: Query<(&ContentPanelText, &mut TextColor)>,
    mut ui_state: MessageWriter<UiStateChangedEvent>,
) {
    for (entity, mut panel, mut background) in panels.iter_mut() {
        panel.tick(time.delta());

        if panel.is_finished() {
            if tracker.active_panel == Some(entity) {
                tracker.active_panel = None;
                ui_state.write(UiStateChangedEvent {
                    panel: UiPanel::Content,
                    open: false,
                });
            }
            commands.entity(entity).despawn();
            continue;
        }

        let alpha = panel.fade_alpha();
        background.0 = BACKGROUND_COLOR.with_alpha(alpha * 0.92);
        for (text, mut color) in texts.iter_mut() {
            color.0 = text.base_color.with_alpha(alpha);
        }
    }
}
