//! The player's ship
//!
//! Steered by [`Controls`] handed in once per frame. Firing does not create the
//! shot directly; the ship raises a request that the world drains after the
//! update pass, so entity creation stays with the world.

use glam::Vec2;

use super::entity::{Body, Simulated};
use super::registry::{Category, CategorySet};
use super::shot::Shot;
use crate::consts::OUTLINE_WIDTH;
use crate::heading;
use crate::renderer::{Color, Renderer};
use crate::settings::PlayerSettings;

/// Per-frame steering input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Controls {
    /// -1 = counter-clockwise, +1 = clockwise
    pub turn: f32,
    /// -1 = backward, +1 = forward
    pub thrust: f32,
    pub fire: bool,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Heading in degrees (0 faces +Y)
    pub rotation: f32,
    /// Seconds until the next shot is allowed
    pub shoot_timer: f32,
    controls: Controls,
    fire_requested: bool,
    tuning: PlayerSettings,
}

impl Player {
    /// The player is never collidable as a member of a kind set; collisions
    /// against it are tested directly
    pub const CATEGORIES: CategorySet =
        CategorySet::of(&[Category::Updatable, Category::Drawable]);

    pub fn new(pos: Vec2, tuning: PlayerSettings) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO, tuning.radius),
            rotation: 0.0,
            shoot_timer: 0.0,
            controls: Controls::default(),
            fire_requested: false,
            tuning,
        }
    }

    pub fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    /// Unit vector the nose points along
    pub fn forward(&self) -> Vec2 {
        heading(self.rotation)
    }

    /// Ship outline: nose, then the two base corners
    pub fn triangle(&self) -> [Vec2; 3] {
        let forward = self.forward();
        let right = heading(self.rotation + 90.0) * self.body.radius / 1.5;
        let pos = self.body.pos;
        let r = self.body.radius;
        [
            pos + forward * r,
            pos - forward * r - right,
            pos - forward * r + right,
        ]
    }

    /// Take the pending shot request, if any
    pub fn take_shot(&mut self) -> Option<Shot> {
        if !std::mem::take(&mut self.fire_requested) {
            return None;
        }
        Some(Shot::new(
            self.body.pos,
            self.forward() * self.tuning.shoot_speed,
            self.tuning.shot_radius,
        ))
    }
}

impl Simulated for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.shoot_timer = (self.shoot_timer - dt).max(0.0);

        self.rotation += self.tuning.turn_speed * self.controls.turn * dt;
        self.body.vel = self.forward() * self.tuning.speed * self.controls.thrust;
        self.body.integrate(dt);

        if self.controls.fire && self.shoot_timer <= 0.0 {
            self.shoot_timer = self.tuning.shoot_cooldown;
            self.fire_requested = true;
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_polygon(Color::WHITE, &self.triangle(), OUTLINE_WIDTH);
    }
}
