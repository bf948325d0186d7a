//! Asteroid Field - a minimal arcade survival simulation
//!
//! Core modules:
//! - `sim`: Entity lifecycle (registry membership, splitting, spawning, collisions)
//! - `frame`: Per-frame driver loop
//! - `platform`: Clock and input collaborators (headless backends included)
//! - `renderer`: Draw-call collaborator and a recording backend
//! - `settings`: Data-driven configuration loaded once at startup

pub mod frame;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use frame::{FrameLoop, LoopState, TerminationReason};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;
    pub const TARGET_FPS: u32 = 60;

    /// Asteroids at or below this radius shatter into nothing
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    /// Starting sizes are `ASTEROID_MIN_RADIUS * kind` for kind in 1..=ASTEROID_KINDS
    pub const ASTEROID_KINDS: u32 = 3;
    /// Seconds between spawns
    pub const ASTEROID_SPAWN_RATE: f32 = 0.8;
    pub const ASTEROID_SPAWN_SPEED_MIN: f32 = 40.0;
    pub const ASTEROID_SPAWN_SPEED_MAX: f32 = 100.0;
    /// Max deviation (degrees) from the edge's inward direction
    pub const ASTEROID_SPAWN_SPREAD_DEG: f32 = 30.0;

    /// Split deflection range (degrees)
    pub const SPLIT_ANGLE_MIN_DEG: f32 = 20.0;
    pub const SPLIT_ANGLE_MAX_DEG: f32 = 50.0;
    /// Speed multiplier applied to split children
    pub const SPLIT_SPEED_BOOST: f32 = 1.2;

    /// Outline width for every shape
    pub const OUTLINE_WIDTH: f32 = 2.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_TURN_SPEED: f32 = 300.0; // degrees/s
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_SHOOT_SPEED: f32 = 500.0;
    pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;
    pub const SHOT_RADIUS: f32 = 5.0;
}

/// Rotate a vector counter-clockwise by an angle in degrees
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Unit facing vector for a heading in degrees (0° faces +Y)
#[inline]
pub fn heading(degrees: f32) -> Vec2 {
    rotate_degrees(Vec2::Y, degrees)
}
