//! Player movement and camera follow systems.
use bevy::{math::primitives::Capsule3d, prelude::*};

use crate::player::components::{FollowCamera, Player, PlayerMotion};

const PLAYER_START_POS: Vec3 = Vec3::new(0.0, 0.9, 6.0);

/// Spawns the player capsule.
pub fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Capsule3d::new(0.35, 1.1)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(70, 110, 200),
            ..default()
        })),
        Transform::from_translation(PLAYER_START_POS),
        Player,
        PlayerMotion::default(),
        Name::new("Player"),
    ));
    info!("Player spawned at {:?}", PLAYER_START_POS);
}

/// Planar WASD direction, normalised (zero when no key is held).
pub fn movement_direction(keyboard: &ButtonInput<KeyCode>) -> Vec3 {
    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction -= Vec3::Z;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction += Vec3::Z;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction -= Vec3::X;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction += Vec3::X;
    }
    direction.normalize_or_zero()
}

/// Moves the player at the fixed physics rate.
pub fn move_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut query: Query<(&PlayerMotion, &mut Transform), With<Player>>,
) {
    let direction = movement_direction(&keyboard);
    if direction == Vec3::ZERO {
        return;
    }

    let Ok((motion, mut transform)) = query.single_mut() else {
        return;
    };

    let speed = if keyboard.pressed(KeyCode::ShiftLeft) {
        motion.walk_speed * motion.sprint_multiplier
    } else {
        motion.walk_speed
    };
    transform.translation += direction * speed * time.delta_secs();
}

/// Keeps the camera trailing the player.
pub fn follow_player(
    time: Res<Time>,
    player: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut cameras: Query<(&FollowCamera, &mut Transform), Without<Player>>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };
    let focus = player_transform.translation;

    for (follow, mut transform) in cameras.iter_mut() {
        let target = focus + follow.offset;
        transform.translation = if follow.smoothing > 0.0 {
            let t = (follow.smoothing * time.delta_secs()).clamp(0.0, 1.0);
            transform.translation.lerp(target, t)
        } else {
            target
        };
        transform.look_at(focus, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_input_is_normalised() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::KeyD);

        let direction = movement_direction(&keyboard);
        assert!((direction.length() - 1.0).abs() < 1e-5);
        assert!(direction.x > 0.0 && direction.z < 0.0);
    }

    #[test]
    fn opposing_keys_cancel_out() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::KeyD);
        assert_eq!(movement_direction(&keyboard), Vec3::ZERO);
    }
}
