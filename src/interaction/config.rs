//! Interaction tuning loaded from `config/interaction.toml`.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/interaction.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawInteractionConfig {
    #[serde(default)]
    detection: RawDetectionSection,
    #[serde(default)]
    prompt: RawPromptSection,
    #[serde(default)]
    highlight: RawHighlightSection,
    #[serde(default)]
    audio: RawAudioSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawDetectionSection {
    radius: f32,
}

impl Default for RawDetectionSection {
    fn default() -> Self {
        Self { radius: 2.5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPromptSection {
    display_seconds: f32,
}

impl Default for RawPromptSection {
    fn default() -> Self {
        Self {
            display_seconds: 5.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawHighlightSection {
    color: [f32; 3],
}

impl Default for RawHighlightSection {
    fn default() -> Self {
        Self {
            color: [1.0, 0.85, 0.3],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawAudioSection {
    door_cue: Option<String>,
    pickup_cue: Option<String>,
    lore_cue: Option<String>,
    prompt_cue: Option<String>,
    generic_cue: Option<String>,
}

/// Asset paths for each audio cue; `None` leaves the cue silent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioCuePaths {
    pub door: Option<String>,
    pub pickup: Option<String>,
    pub lore: Option<String>,
    pub prompt: Option<String>,
    pub generic: Option<String>,
}

/// Tunable parameters for proximity detection and feedback.
#[derive(Resource, Debug, Clone)]
pub struct InteractionSettings {
    /// Candidates must be strictly closer than this (world units).
    pub interaction_radius: f32,
    /// Fallback prompt/panel duration when content does not set one.
    pub default_display_seconds: f32,
    pub highlight_color: Color,
    pub audio: AudioCuePaths,
}

impl InteractionSettings {
    pub fn load_or_default() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => Self::parse(&data).unwrap_or_else(|err| {
                warn!(
                    "Failed to parse {} ({}). Falling back to defaults.",
                    path.display(),
                    err
                );
                RawInteractionConfig::default().into()
            }),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    path.display(),
                    err
                );
                RawInteractionConfig::default().into()
            }
        }
    }

    fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawInteractionConfig>(data).map(Into::into)
    }
}

impl Default for InteractionSettings {
    fn default() -> Self {
        RawInteractionConfig::default().into()
    }
}

impl From<RawInteractionConfig> for InteractionSettings {
    fn from(value: RawInteractionConfig) -> Self {
        let default_radius = RawDetectionSection::default().radius;
        // Non-positive radii are kept so setup validation can report them.
        let interaction_radius = if value.detection.radius.is_finite() {
            value.detection.radius
        } else {
            default_radius
        };

        let display_seconds = value.prompt.display_seconds;
        let default_display_seconds = if display_seconds.is_finite() && display_seconds > 0.0 {
            display_seconds
        } else {
            RawPromptSection::default().display_seconds
        };

        let [r, g, b] = value.highlight.color;
        let audio = value.audio;

        Self {
            interaction_radius,
            default_display_seconds,
            highlight_color: Color::srgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)),
            audio: AudioCuePaths {
                door: non_blank(audio.door_cue),
                pickup: non_blank(audio.pickup_cue),
                lore: non_blank(audio.lore_cue),
                prompt: non_blank(audio.prompt_cue),
                generic: non_blank(audio.generic_cue),
            },
        }
    }
}

fn non_blank(path: Option<String>) -> Option<String> {
    path.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = InteractionSettings::parse("").expect("empty toml parses");
        assert!((settings.interaction_radius - 2.5).abs() < f32::EPSILON);
        assert!((settings.default_display_seconds - 5.0).abs() < f32::EPSILON);
        assert_eq!(settings.audio, AudioCuePaths::default());
    }

    #[test]
    fn sections_override_defaults() {
        let settings = InteractionSettings::parse(
            r#"
            [detection]
            radius = 1.5

            [prompt]
            display_seconds = -3.0

            [audio]
            door_cue = "audio/door.ogg"
            lore_cue = "   "
            "#,
        )
        .expect("valid toml");

        assert!((settings.interaction_radius - 1.5).abs() < f32::EPSILON);
        assert!((settings.default_display_seconds - 5.0).abs() < f32::EPSILON);
        assert_eq!(settings.audio.door.as_deref(), Some("audio/door.ogg"));
        assert_eq!(settings.audio.lore, None);
    }

    #[test]
    fn non_positive_radius_survives_for_validation() {
        let settings = InteractionSettings::parse("[detection]\nradius = 0.0\n").unwrap();
        assert_eq!(settings.interaction_radius, 0.0);
    }

    #[test]
    fn missing_file_falls_back() {
        let settings = InteractionSettings::load_from(Path::new("config/does_not_exist.toml"));
        assert!(settings.interaction_radius > 0.0);
    }
}
