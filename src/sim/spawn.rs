//! Asteroid spawning
//!
//! One controller lives for the whole run and is ticked every frame. Each
//! spawn places an asteroid just beyond a random screen edge, heading inward
//! with some random spread.

use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::EntityId;
use super::state::World;
use crate::rotate_degrees;
use crate::settings::{Settings, SpawnSettings};

/// Offset mixed into the world seed so spawns and splits draw from separate streams
const SPAWN_STREAM: u64 = 0x5eed_a57e_401d;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Unit direction pointing into the screen
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::new(1.0, 0.0),
            Edge::Right => Vec2::new(-1.0, 0.0),
            Edge::Top => Vec2::new(0.0, 1.0),
            Edge::Bottom => Vec2::new(0.0, -1.0),
        }
    }

    /// Point `t` (0..=1) along the edge, pushed `offset` outside the screen
    pub fn position(self, t: f32, width: f32, height: f32, offset: f32) -> Vec2 {
        match self {
            Edge::Left => Vec2::new(-offset, t * height),
            Edge::Right => Vec2::new(width + offset, t * height),
            Edge::Top => Vec2::new(t * width, -offset),
            Edge::Bottom => Vec2::new(t * width, height + offset),
        }
    }
}

/// Everything needed to create one asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPlan {
    pub edge: Edge,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Long-lived asteroid spawner
#[derive(Debug, Clone)]
pub struct SpawnController {
    rng: Pcg32,
    timer: f32,
    interval: f32,
    spawned: u64,
}

impl SpawnController {
    pub fn new(world: &World) -> Self {
        Self::with_seed(&world.settings().spawn, world.seed() ^ SPAWN_STREAM)
    }

    pub fn with_seed(spawn: &SpawnSettings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let interval = Self::draw_interval(&mut rng, spawn);
        Self {
            rng,
            timer: 0.0,
            interval,
            spawned: 0,
        }
    }

    fn draw_interval(rng: &mut Pcg32, spawn: &SpawnSettings) -> f32 {
        rng.random_range(spawn.interval_min..=spawn.interval_max)
    }

    /// Seconds accumulated toward the next spawn
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Current wait between spawns
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Asteroids created so far
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Advance the timer; spawns one asteroid once the interval is exceeded
    pub fn tick(&mut self, dt: f32, world: &mut World) -> Option<EntityId> {
        self.timer += dt;
        if self.timer <= self.interval {
            return None;
        }
        self.timer = 0.0;
        self.interval = Self::draw_interval(&mut self.rng, &world.settings().spawn);

        let plan = self.plan(world.settings());
        let id = world.spawn_asteroid(plan.pos, plan.vel, plan.radius);
        self.spawned += 1;
        log::debug!(
            "Spawned asteroid {id} r={} from {:?} at {} heading {}",
            plan.radius,
            plan.edge,
            plan.pos,
            plan.vel
        );
        Some(id)
    }

    /// Draw a random edge, position, velocity and radius
    pub fn plan(&mut self, settings: &Settings) -> SpawnPlan {
        let spawn = &settings.spawn;
        let edge = *Edge::ALL.choose(&mut self.rng).unwrap_or(&Edge::Left);

        let speed = self.rng.random_range(spawn.speed_min..=spawn.speed_max);
        let spread = self.rng.random_range(-spawn.spread_deg..=spawn.spread_deg);
        let vel = rotate_degrees(edge.inward() * speed, spread);

        let t = self.rng.random_range(0.0..=1.0);
        let offset = settings.asteroid.max_starting_radius();
        let pos = edge.position(t, settings.screen_width, settings.screen_height, offset);

        let radius = settings
            .asteroid
            .starting_radii
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(settings.asteroid.min_radius);

        SpawnPlan {
            edge,
            pos,
            vel,
            radius,
        }
    }
}
