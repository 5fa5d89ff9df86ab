//! Nearest-candidate selection for the proximity scan.
use bevy::prelude::*;

/// One registry entry as seen by the scan.
#[derive(Debug, Clone, Copy)]
pub struct ProximityCandidate {
    pub entity: Entity,
    pub position: Vec3,
    /// Active and currently accepting interaction.
    pub eligible: bool,
}

/// The winning candidate and its distance to the actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestCandidate {
    pub entity: Entity,
    pub distance: f32,
}

/// Picks the closest eligible candidate strictly inside `radius`.
///
/// Equidistant candidates resolve to the first one yielded.
pub fn nearest_candidate(
    actor: Vec3,
    radius: f32,
    candidates: impl IntoIterator<Item = ProximityCandidate>,
) -> Option<NearestCandidate> {
    let mut nearest: Option<NearestCandidate> = None;
    for candidate in candidates {
        if !candidate.eligible {
            continue;
        }

        let distance = actor.distance(candidate.position);
        if distance >= radius {
            continue;
        }

        match nearest {
            Some(best) if distance >= best.distance => {}
            _ => {
                nearest = Some(NearestCandidate {
                    entity: candidate.entity,
                    distance,
                })
            }
        }
    }
    nearest
}

/// Entities whose position lies within `radius` (inclusive) of `origin`.
pub fn within_radius(
    origin: Vec3,
    radius: f32,
    positions: impl IntoIterator<Item = (Entity, Vec3)>,
) -> Vec<Entity> {
    let radius_sq = radius * radius;
    positions
        .into_iter()
        .filter(|(_, position)| origin.distance_squared(*position) <= radius_sq)
        .map(|(entity, _)| entity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(world: &mut World, count: usize) -> Vec<Entity> {
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    fn candidate(entity: Entity, x: f32, eligible: bool) -> ProximityCandidate {
        ProximityCandidate {
            entity,
            position: Vec3::new(x, 0.0, 0.0),
            eligible,
        }
    }

    #[test]
    fn picks_closest_inside_radius() {
        let mut world = World::new();
        let e = spawn(&mut world, 2);

        let nearest = nearest_candidate(
            Vec3::ZERO,
            1.5,
            [candidate(e[0], 1.0, true), candidate(e[1], 1.2, true)],
        )
        .expect("a candidate is in range");
        assert_eq!(nearest.entity, e[0]);
        assert!((nearest.distance - 1.0).abs() < 1e-6);

        // Actor moves so the first is 2.0 away and the second 1.0 away.
        let nearest = nearest_candidate(
            Vec3::new(-1.0, 0.0, 0.0),
            1.5,
            [candidate(e[0], 1.0, true), candidate(e[1], 0.0, true)],
        )
        .expect("second candidate still in range");
        assert_eq!(nearest.entity, e[1]);
    }

    #[test]
    fn ineligible_and_out_of_range_are_never_selected() {
        let mut world = World::new();
        let e = spawn(&mut world, 3);

        let nearest = nearest_candidate(
            Vec3::ZERO,
            2.0,
            [
                candidate(e[0], 0.5, false),
                candidate(e[1], 2.0, true),
                candidate(e[2], 3.0, true),
            ],
        );
        assert!(nearest.is_none());
    }

    #[test]
    fn ties_resolve_to_first_yielded() {
        let mut world = World::new();
        let e = spawn(&mut world, 2);

        let nearest = nearest_candidate(
            Vec3::ZERO,
            5.0,
            [candidate(e[0], 1.0, true), candidate(e[1], -1.0, true)],
        );
        assert_eq!(nearest.map(|n| n.entity), Some(e[0]));
    }

    #[test]
    fn selection_matches_brute_force_minimum() {
        let mut world = World::new();
        let e = spawn(&mut world, 8);
        let xs = [4.2, -0.7, 3.3, 0.9, -2.5, 6.0, 1.1, -0.8];
        let candidates: Vec<_> = e
            .iter()
            .zip(xs)
            .enumerate()
            .map(|(i, (entity, x))| candidate(*entity, x, i % 3 != 1))
            .collect();

        for radius in [0.5_f32, 1.0, 2.0, 5.0] {
            let expected = candidates
                .iter()
                .filter(|c| c.eligible && c.position.length() < radius)
                .min_by(|a, b| a.position.length().total_cmp(&b.position.length()))
                .map(|c| c.entity);
            let actual = nearest_candidate(Vec3::ZERO, radius, candidates.clone())
                .map(|n| n.entity);
            assert_eq!(actual, expected, "radius {radius}");
        }
    }

    #[test]
    fn within_radius_is_inclusive() {
        let mut world = World::new();
        let e = spawn(&mut world, 3);
        let hits = within_radius(
            Vec3::ZERO,
            2.0,
            [
                (e[0], Vec3::new(2.0, 0.0, 0.0)),
                (e[1], Vec3::new(0.0, 0.0, 1.0)),
                (e[2], Vec3::new(0.0, 2.1, 0.0)),
            ],
        );
        assert_eq!(hits, vec![e[0], e[1]]);
    }
}
