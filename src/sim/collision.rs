//! Circle overlap tests and the per-frame collision pass

use glam::Vec2;

use super::entity::{EntityId, Simulated};
use super::registry::Category;
use super::state::World;

/// Two circles overlap iff the distance between centers is strictly less than
/// the sum of their radii
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// A shot destroying an asteroid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotHit {
    pub shot: EntityId,
    pub asteroid: EntityId,
    /// Asteroids created by the split (0 or 2)
    pub children: Vec<EntityId>,
}

impl World {
    /// First asteroid overlapping the player, if any
    pub fn player_collision(&self) -> Option<EntityId> {
        let player = self.player()?.body;
        self.members(Category::Asteroids)
            .find(|(_, asteroid)| asteroid.body().overlaps(&player))
            .map(|(id, _)| id)
    }

    /// Resolve shot/asteroid overlaps: each hit removes the shot and splits the
    /// asteroid. Every shot and asteroid takes part in at most one hit, and
    /// children born here are not tested until the next pass.
    pub fn resolve_shot_hits(&mut self) -> Vec<ShotHit> {
        let mut hits = Vec::new();
        for asteroid in self.member_ids(Category::Asteroids) {
            let Some(rock) = self.body(asteroid).copied() else {
                continue;
            };
            let shot = self
                .members(Category::Shots)
                .find(|(_, shot)| shot.body().overlaps(&rock))
                .map(|(id, _)| id);
            let Some(shot) = shot else {
                continue;
            };

            self.despawn(shot);
            let children = self.split_asteroid(asteroid);
            log::debug!("Shot {shot} hit asteroid {asteroid}");
            hits.push(ShotHit {
                shot,
                asteroid,
                children,
            });
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Shot;

    fn world() -> World {
        World::new(Settings::default(), 1)
    }

    #[test]
    fn test_circles_overlap_examples() {
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(9.0, 0.0), 3.0));
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(7.0, 0.0), 3.0));
        // Tangent
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(8.0, 0.0), 3.0));
    }

    #[test]
    fn test_player_collision() {
        let mut world = world();
        world.spawn_player(Vec2::new(100.0, 100.0));
        assert!(world.player_collision().is_none());

        world.spawn_asteroid(Vec2::new(300.0, 100.0), Vec2::ZERO, 40.0);
        assert!(world.player_collision().is_none());

        let rock = world.spawn_asteroid(Vec2::new(150.0, 100.0), Vec2::ZERO, 40.0);
        assert_eq!(world.player_collision(), Some(rock));
    }

    #[test]
    fn test_no_player_no_collision() {
        let mut world = world();
        world.spawn_asteroid(Vec2::ZERO, Vec2::ZERO, 40.0);
        assert!(world.player_collision().is_none());
    }

    #[test]
    fn test_shot_splits_asteroid() {
        let mut world = world();
        let rock = world.spawn_asteroid(Vec2::new(200.0, 200.0), Vec2::new(10.0, 0.0), 40.0);
        let shot = world.spawn_shot(Shot::new(Vec2::new(230.0, 200.0), Vec2::ZERO, 5.0));
        let miss = world.spawn_shot(Shot::new(Vec2::new(600.0, 600.0), Vec2::ZERO, 5.0));

        let hits = world.resolve_shot_hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].shot, shot);
        assert_eq!(hits[0].asteroid, rock);
        assert_eq!(hits[0].children.len(), 2);

        assert!(!world.contains(shot));
        assert!(!world.contains(rock));
        assert!(world.contains(miss));
        assert_eq!(world.count(Category::Asteroids), 2);
    }

    #[test]
    fn test_one_shot_destroys_one_asteroid() {
        let mut world = world();
        world.spawn_asteroid(Vec2::new(200.0, 200.0), Vec2::ZERO, 20.0);
        world.spawn_asteroid(Vec2::new(210.0, 200.0), Vec2::ZERO, 20.0);
        world.spawn_shot(Shot::new(Vec2::new(205.0, 200.0), Vec2::ZERO, 5.0));

        let hits = world.resolve_shot_hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(world.count(Category::Asteroids), 1);
        assert_eq!(world.count(Category::Shots), 0);
    }

    #[test]
    fn test_children_not_retested_same_pass() {
        let mut world = world();
        world.spawn_asteroid(Vec2::new(200.0, 200.0), Vec2::ZERO, 60.0);
        world.spawn_shot(Shot::new(Vec2::new(200.0, 200.0), Vec2::ZERO, 5.0));
        world.spawn_shot(Shot::new(Vec2::new(201.0, 200.0), Vec2::ZERO, 5.0));

        let hits = world.resolve_shot_hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(world.count(Category::Shots), 1);
        assert_eq!(world.count(Category::Asteroids), 2);

        // Next pass the remaining shot hits one of the children
        let hits = world.resolve_shot_hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(world.count(Category::Shots), 0);
    }
}
