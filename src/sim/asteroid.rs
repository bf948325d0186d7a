//! Asteroid entity

use glam::Vec2;

use super::entity::{Body, Simulated};
use super::registry::{Category, CategorySet};
use crate::consts::OUTLINE_WIDTH;
use crate::renderer::{Color, Renderer};

/// A drifting rock. Everything interesting (splitting) lives in [`super::split`].
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub body: Body,
}

impl Asteroid {
    /// Sets every asteroid joins on creation
    pub const CATEGORIES: CategorySet =
        CategorySet::of(&[Category::Updatable, Category::Drawable, Category::Asteroids]);

    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(pos, vel, radius),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.body.radius
    }
}

impl Simulated for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_circle(Color::WHITE, self.body.pos, self.body.radius, OUTLINE_WIDTH);
    }
}
