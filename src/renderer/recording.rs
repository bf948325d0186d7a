//! Renderer that records draw calls instead of rasterizing them
//!
//! Used by the headless binary and by tests to observe exactly what a frame
//! would have drawn.

use glam::Vec2;

use super::{Color, Renderer};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Circle {
        color: Color,
        center: Vec2,
        radius: f32,
        stroke_width: f32,
    },
    Polygon {
        color: Color,
        points: Vec<Vec2>,
        stroke_width: f32,
    },
}

/// Keeps the calls of the frame in progress and of the last presented frame
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pending: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    frames_presented: u64,
    total_calls: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls issued since the last `present`
    pub fn pending(&self) -> &[DrawCall] {
        &self.pending
    }

    /// Calls of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Draw calls across all frames, clears excluded
    pub fn total_calls(&self) -> u64 {
        self.total_calls
    }

    /// Circles drawn in the last presented frame
    pub fn last_frame_circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.last_frame.iter().filter_map(|call| match call {
            DrawCall::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.pending.push(DrawCall::Clear(color));
    }

    fn draw_circle(&mut self, color: Color, center: Vec2, radius: f32, stroke_width: f32) {
        self.total_calls += 1;
        self.pending.push(DrawCall::Circle {
            color,
            center,
            radius,
            stroke_width,
        });
    }

    fn draw_polygon(&mut self, color: Color, points: &[Vec2], stroke_width: f32) {
        self.total_calls += 1;
        self.pending.push(DrawCall::Polygon {
            color,
            points: points.to_vec(),
            stroke_width,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
        log::trace!(
            "Presented frame {} ({} calls)",
            self.frames_presented,
            self.last_frame.len()
        );
    }
}
