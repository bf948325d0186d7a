//! Circular mobile bodies and the per-variant behavior trait

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::collision::circles_overlap;
use super::player::Player;
use super::shot::Shot;
use crate::renderer::Renderer;

/// Stable entity identity, allocated monotonically by the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position, velocity and radius shared by every entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Strictly positive while the entity is live
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self { pos, vel, radius }
    }

    /// Advance position by `vel * dt`
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "negative dt {dt}");
        self.pos += self.vel * dt;
    }

    /// Strict overlap: tangent circles do not count
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        circles_overlap(self.pos, self.radius, other.pos, other.radius)
    }
}

/// Per-frame behavior shared by all entity variants
pub trait Simulated {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Advance one frame of `dt` seconds
    fn update(&mut self, dt: f32) {
        self.body_mut().integrate(dt);
    }

    /// Issue this entity's draw calls
    fn draw(&self, renderer: &mut dyn Renderer);
}

/// Entity variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Asteroid,
    Shot,
}

/// Stored entity
#[derive(Debug, Clone)]
pub enum Entity {
    Player(Player),
    Asteroid(Asteroid),
    Shot(Shot),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Asteroid(_) => EntityKind::Asteroid,
            Entity::Shot(_) => EntityKind::Shot,
        }
    }

    pub fn as_asteroid(&self) -> Option<&Asteroid> {
        match self {
            Entity::Asteroid(asteroid) => Some(asteroid),
            _ => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Entity::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Entity::Player(player) => Some(player),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Simulated {
        match self {
            Entity::Player(player) => player,
            Entity::Asteroid(asteroid) => asteroid,
            Entity::Shot(shot) => shot,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Simulated {
        match self {
            Entity::Player(player) => player,
            Entity::Asteroid(asteroid) => asteroid,
            Entity::Shot(shot) => shot,
        }
    }
}

impl Simulated for Entity {
    fn body(&self) -> &Body {
        self.inner().body()
    }

    fn body_mut(&mut self) -> &mut Body {
        self.inner_mut().body_mut()
    }

    fn update(&mut self, dt: f32) {
        self.inner_mut().update(dt);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        self.inner().draw(renderer);
    }
}
