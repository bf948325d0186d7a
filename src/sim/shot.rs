//! Player projectile

use glam::Vec2;

use super::entity::{Body, Simulated};
use super::registry::{Category, CategorySet};
use crate::consts::OUTLINE_WIDTH;
use crate::renderer::{Color, Renderer};

#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    pub body: Body,
}

impl Shot {
    pub const CATEGORIES: CategorySet =
        CategorySet::of(&[Category::Updatable, Category::Drawable, Category::Shots]);

    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(pos, vel, radius),
        }
    }
}

impl Simulated for Shot {
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
