//! Asteroid splitting
//!
//! A split always destroys the asteroid. Above the minimum radius it leaves
//! two children at the same spot, each `min_radius` smaller, flying off at
//! ±angle from the parent's heading and slightly faster. Radius drops by a
//! fixed step per generation, so a lineage starting at `r` ends within
//! `ceil(r / min_radius)` generations.

use glam::Vec2;
use rand::Rng;

use super::entity::{Body, Entity, EntityId};
use super::state::World;
use crate::rotate_degrees;
use crate::settings::SplitSettings;

/// Parent velocity rotated by `+angle_deg` and `-angle_deg`, scaled by `boost`
pub fn deflected_velocities(vel: Vec2, angle_deg: f32, boost: f32) -> [Vec2; 2] {
    [
        rotate_degrees(vel, angle_deg) * boost,
        rotate_degrees(vel, -angle_deg) * boost,
    ]
}

/// Child bodies for a given deflection angle, or `None` when the parent is
/// too small to leave anything behind
pub fn split_bodies(
    parent: &Body,
    min_radius: f32,
    angle_deg: f32,
    boost: f32,
) -> Option<[Body; 2]> {
    if parent.radius <= min_radius {
        return None;
    }
    let radius = parent.radius - min_radius;
    let [a, b] = deflected_velocities(parent.vel, angle_deg, boost);
    Some([
        Body::new(parent.pos, a, radius),
        Body::new(parent.pos, b, radius),
    ])
}

/// Upper bound on how many generations of splits a lineage can go through
pub fn max_split_generations(radius: f32, min_radius: f32) -> u32 {
    (radius as f64 / min_radius as f64).ceil().max(0.0) as u32
}

/// Random deflection angle within the configured range
pub fn random_deflection(rng: &mut impl Rng, split: &SplitSettings) -> f32 {
    rng.random_range(split.angle_min_deg..=split.angle_max_deg)
}

impl World {
    /// Destroy an asteroid and spawn its children (0 or 2).
    ///
    /// Ids that are absent or not asteroids are left alone and yield nothing.
    pub fn split_asteroid(&mut self, id: EntityId) -> Vec<EntityId> {
        let Some(parent) = self.get(id).and_then(Entity::as_asteroid).map(|a| a.body) else {
            return Vec::new();
        };
        self.despawn(id);

        let min_radius = self.settings().asteroid.min_radius;
        if parent.radius <= min_radius {
            log::debug!("Asteroid {id} (r={}) shattered", parent.radius);
            return Vec::new();
        }

        let split = self.settings().split.clone();
        let angle = random_deflection(self.rng(), &split);
        let Some(children) = split_bodies(&parent, min_radius, angle, split.speed_boost) else {
            return Vec::new();
        };

        let ids: Vec<EntityId> = children
            .into_iter()
            .map(|child| self.spawn_asteroid(child.pos, child.vel, child.radius))
            .collect();
        log::debug!(
            "Asteroid {id} (r={}) split into {:?} at ±{angle:.1}°",
            parent.radius,
            ids
        );
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::registry::Category;
    use crate::sim::Simulated;

    fn world() -> World {
        World::new(Settings::default(), 7)
    }

    #[test]
    fn test_split_radius_40_gives_two_radius_20() {
        let mut world = world();
        let parent = world.spawn_asteroid(Vec2::new(300.0, 200.0), Vec2::new(50.0, 0.0), 40.0);

        let children = world.split_asteroid(parent);
        assert_eq!(children.len(), 2);
        assert!(!world.contains(parent));
        assert!(!world.registry().is_registered(parent));

        for child in &children {
            let body = world.body(*child).unwrap();
            assert_eq!(body.radius, 20.0);
            assert_eq!(body.pos, Vec2::new(300.0, 200.0));
            assert!((body.vel.length() - 60.0).abs() < 1e-3);
            assert!(world.registry().contains(*child, Category::Asteroids));
            assert!(world.registry().contains(*child, Category::Updatable));
            assert!(world.registry().contains(*child, Category::Drawable));
        }

        // Radius 20 == min radius: terminal
        for child in children {
            assert!(world.split_asteroid(child).is_empty());
            assert!(!world.contains(child));
        }
        assert_eq!(world.count(Category::Asteroids), 0);
    }

    #[test]
    fn test_children_deflect_symmetrically_within_range() {
        let mut world = world();
        let vel = Vec2::new(0.0, 80.0);
        for _ in 0..50 {
            let parent = world.spawn_asteroid(Vec2::ZERO, vel, 60.0);
            let children = world.split_asteroid(parent);
            let a = world.body(children[0]).unwrap().vel;
            let b = world.body(children[1]).unwrap().vel;

            let angle_a = vel.angle_to(a).to_degrees();
            let angle_b = vel.angle_to(b).to_degrees();
            assert!((angle_a + angle_b).abs() < 1e-2, "{angle_a} vs {angle_b}");
            assert!(angle_a >= 20.0 - 1e-2 && angle_a <= 50.0 + 1e-2, "{angle_a}");

            for id in children {
                world.despawn(id);
            }
        }
    }

    #[test]
    fn test_split_bodies_exact() {
        let parent = Body::new(Vec2::new(1.0, 2.0), Vec2::new(10.0, 0.0), 45.0);
        let [a, b] = split_bodies(&parent, 20.0, 90.0, 1.2).unwrap();
        assert_eq!(a.radius, 25.0);
        assert_eq!(b.radius, 25.0);
        assert!((a.vel - Vec2::new(0.0, 12.0)).length() < 1e-4);
        assert!((b.vel - Vec2::new(0.0, -12.0)).length() < 1e-4);

        let small = Body::new(Vec2::ZERO, Vec2::X, 20.0);
        assert!(split_bodies(&small, 20.0, 30.0, 1.2).is_none());
    }

    #[test]
    fn test_split_non_asteroid_is_noop() {
        let mut world = world();
        let player = world.spawn_player(Vec2::ZERO);
        assert!(world.split_asteroid(player).is_empty());
        assert!(world.contains(player));
        assert!(world.split_asteroid(EntityId(999)).is_empty());
    }

    #[test]
    fn test_max_split_generations() {
        assert_eq!(max_split_generations(40.0, 20.0), 2);
        assert_eq!(max_split_generations(45.0, 20.0), 3);
        assert_eq!(max_split_generations(5.0, 20.0), 1);
    }

    #[test]
    fn test_child_keeps_moving_after_split() {
        let mut world = world();
        let parent = world.spawn_asteroid(Vec2::ZERO, Vec2::new(0.0, 10.0), 50.0);
        let child = world.split_asteroid(parent)[0];
        let before = world.body(child).unwrap().pos;
        world.update_all(1.0);
        let entity = world.get(child).unwrap();
        assert_ne!(entity.body().pos, before);
    }
}
