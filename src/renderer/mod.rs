//! Rendering collaborator
//!
//! The simulation only ever asks for outlined circles and polygons. Any
//! backend that can draw those (GPU, terminal, or the recorder used headless)
//! implements [`Renderer`].

pub mod recording;

pub use recording::{DrawCall, RecordingRenderer};

use glam::Vec2;

/// RGBA color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Draw-call sink for one frame buffer
pub trait Renderer {
    /// Fill the whole frame with a color
    fn clear(&mut self, color: Color);

    /// Circle outline
    fn draw_circle(&mut self, color: Color, center: Vec2, radius: f32, stroke_width: f32);

    /// Closed polygon outline
    fn draw_polygon(&mut self, color: Color, points: &[Vec2], stroke_width: f32);

    /// Show the finished frame
    fn present(&mut self);
}
