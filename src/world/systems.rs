//! Systems for the world module.
use bevy::{
    math::primitives::{Cuboid, Cylinder, Plane3d, Sphere},
    prelude::*,
};

use crate::{
    interaction::{
        components::{
            Interactable, InteractableIdGenerator, InteractionBehavior, InteractionCategory,
            InteractionContent,
        },
        config::InteractionSettings,
        events::{InteriorTransitionRequested, JournalEntryUnlocked},
    },
    player::components::FollowCamera,
    world::components::HighlightMaterials,
};

const GROUND_SCALE: f32 = 60.0;
const CAMERA_START_POS: Vec3 = Vec3::new(0.0, 8.0, 15.0);

/// Spawns the ground plane, the sun and the follow camera.
pub fn spawn_world_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Plane3d::default()))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(90, 140, 90),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        })),
        Transform::from_scale(Vec3::splat(GROUND_SCALE)),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(16.0, 32.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_START_POS).looking_at(Vec3::ZERO, Vec3::Y),
        FollowCamera::default(),
    ));
}

/// Spawns the village objects the player can interact with.
pub fn spawn_village_interactables(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut ids: ResMut<InteractableIdGenerator>,
    settings: Res<InteractionSettings>,
) {
    let prototypes = [
        (
            Interactable::new(
                ids.next_id(),
                "Miller's Cottage",
                InteractionCategory::Door,
                InteractionBehavior::Building {
                    interior_scene: Some("cottage_interior".into()),
                },
            )
            .with_prompt("Press E to enter the cottage")
            .with_content(
                InteractionContent::new("Miller's Cottage", "A low stone house smelling of flour.")
                    .with_category_label("Building"),
            ),
            Mesh::from(Cuboid::new(3.0, 2.5, 3.0)),
            Color::srgb_u8(170, 130, 90),
            Vec3::new(-6.0, 1.25, -4.0),
        ),
        (
            Interactable::new(
                ids.next_id(),
                "Supply Crate",
                InteractionCategory::Item,
                InteractionBehavior::Prop {
                    consume_on_use: true,
                    respawn_seconds: Some(10.0),
                },
            )
            .with_content(
                InteractionContent::new("Supply Crate", "Bread, rope and a flint. Restocked daily.")
                    .with_category_label("Supplies")
                    .with_display_duration(3.0),
            ),
            Mesh::from(Cuboid::new(0.8, 0.8, 0.8)),
            Color::srgb_u8(150, 110, 60),
            Vec3::new(2.5, 0.4, 1.0),
        ),
        (
            Interactable::new(
                ids.next_id(),
                "Wild Herb",
                InteractionCategory::Item,
                InteractionBehavior::Prop {
                    consume_on_use: true,
                    respawn_seconds: None,
                },
            )
            .with_prompt("Press E to pick the herb")
            .with_content(
                InteractionContent::new("Wild Herb", "Bitter leaves used for poultices.")
                    .single_use(),
            ),
            Mesh::from(Sphere::new(0.3)),
            Color::srgb_u8(80, 170, 70),
            Vec3::new(4.5, 0.3, -2.0),
        ),
        (
            Interactable::new(
                ids.next_id(),
                "Founders' Stone",
                InteractionCategory::Dialogue,
                InteractionBehavior::Lore {
                    journal_entry: Some("founding_of_hearthvale".into()),
                },
            )
            .with_prompt("Press E to read the inscription")
            .with_content(
                InteractionContent::new("Founders' Stone", "Names are carved deep into the granite.")
                    .with_lore("Seven families crossed the pass in the year of the long frost and settled by the river.")
                    .with_category_label("Lore")
                    .with_display_duration(8.0),
            ),
            Mesh::from(Cuboid::new(0.6, 1.6, 0.3)),
            Color::srgb_u8(130, 130, 140),
            Vec3::new(-1.5, 0.8, -7.0),
        ),
        (
            Interactable::new(
                ids.next_id(),
                "Village Well",
                InteractionCategory::General,
                InteractionBehavior::Generic,
            )
            .with_content(InteractionContent::new("Village Well", "The water is cold and clear.")),
            Mesh::from(Cylinder::new(0.9, 1.0)),
            Color::srgb_u8(110, 110, 120),
            Vec3::new(0.0, 0.5, -2.0),
        ),
    ];

    let count = prototypes.len();
    for (interactable, mesh, color, position) in prototypes {
        let base = materials.add(StandardMaterial {
            base_color: color,
            ..default()
        });
        let highlight = materials.add(StandardMaterial {
            base_color: color,
            emissive: settings.highlight_color.to_linear() * 0.6,
            ..default()
        });
        let name = format!("{} ({})", interactable.display_name, interactable.id);

        commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(base.clone()),
            HighlightMaterials { base, highlight },
            Transform::from_translation(position),
            Visibility::default(),
            interactable,
            Name::new(name),
        ));
    }

    info!("Spawned {} village interactables", count);
}

/// Swaps the mesh material whenever an interactable's highlight flag changes.
pub fn apply_highlight_materials(
    mut query: Query<
        (&Interactable, &HighlightMaterials, &mut MeshMaterial3d<StandardMaterial>),
        Changed<Interactable>,
    >,
) {
    for (interactable, materials, mut material) in query.iter_mut() {
        let wanted = materials.select(interactable.is_highlighted());
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}

/// Interior scenes and the journal are not part of this prototype; their
/// requests are acknowledged in the log.
pub fn log_world_intents(
    mut interiors: MessageReader<InteriorTransitionRequested>,
    mut journal: MessageReader<JournalEntryUnlocked>,
) {
    for request in interiors.read() {
        info!(
            "Interior transition requested by {:?}: {}",
            request.entity, request.scene
        );
    }
    for unlock in journal.read() {
        info!(
            "Journal entry '{}' unlocked by {:?}",
            unlock.entry_id, unlock.entity
        );
    }
}
