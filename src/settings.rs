//! Simulation settings
//!
//! Loaded once at startup from JSON. Every field falls back to the defaults in
//! [`crate::consts`] when missing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values that parse but make no sense
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Asteroid sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidSettings {
    /// Asteroids at or below this radius produce no children when split
    pub min_radius: f32,
    /// Radii a freshly spawned asteroid may start with
    pub starting_radii: Vec<f32>,
}

impl Default for AsteroidSettings {
    fn default() -> Self {
        Self {
            min_radius: ASTEROID_MIN_RADIUS,
            starting_radii: (1..=ASTEROID_KINDS)
                .map(|kind| ASTEROID_MIN_RADIUS * kind as f32)
                .collect(),
        }
    }
}

impl AsteroidSettings {
    /// Largest starting radius (spawn positions sit this far off-screen)
    pub fn max_starting_radius(&self) -> f32 {
        self.starting_radii.iter().copied().fold(0.0, f32::max)
    }
}

/// Spawn timing and randomization ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    /// Seconds between spawns (drawn uniformly per spawn)
    pub interval_min: f32,
    pub interval_max: f32,
    /// Initial speed range (pixels/s)
    pub speed_min: f32,
    pub speed_max: f32,
    /// Max deviation from the inward edge direction (degrees)
    pub spread_deg: f32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            interval_min: ASTEROID_SPAWN_RATE,
            interval_max: ASTEROID_SPAWN_RATE,
            speed_min: ASTEROID_SPAWN_SPEED_MIN,
            speed_max: ASTEROID_SPAWN_SPEED_MAX,
            spread_deg: ASTEROID_SPAWN_SPREAD_DEG,
        }
    }
}

/// Split deflection and boost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitSettings {
    pub angle_min_deg: f32,
    pub angle_max_deg: f32,
    pub speed_boost: f32,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            angle_min_deg: SPLIT_ANGLE_MIN_DEG,
            angle_max_deg: SPLIT_ANGLE_MAX_DEG,
            speed_boost: SPLIT_SPEED_BOOST,
        }
    }
}

/// Player ship handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub radius: f32,
    /// Degrees per second
    pub turn_speed: f32,
    pub speed: f32,
    pub shoot_speed: f32,
    /// Seconds between shots
    pub shoot_cooldown: f32,
    pub shot_radius: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
            turn_speed: PLAYER_TURN_SPEED,
            speed: PLAYER_SPEED,
            shoot_speed: PLAYER_SHOOT_SPEED,
            shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            shot_radius: SHOT_RADIUS,
        }
    }
}

/// All simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,
    pub target_fps: u32,
    pub asteroid: AsteroidSettings,
    pub spawn: SpawnSettings,
    pub split: SplitSettings,
    pub player: PlayerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,
            asteroid: AsteroidSettings::default(),
            spawn: SpawnSettings::default(),
            split: SplitSettings::default(),
            player: PlayerSettings::default(),
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&contents)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings as pretty-printed JSON
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings that would break entity invariants
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(msg: impl Into<String>) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid(msg.into()))
        }

        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return invalid("screen dimensions must be positive");
        }
        if self.target_fps == 0 {
            return invalid("target_fps must be positive");
        }
        if !(self.asteroid.min_radius > 0.0) {
            return invalid("asteroid.min_radius must be positive");
        }
        if self.asteroid.starting_radii.is_empty() {
            return invalid("asteroid.starting_radii must not be empty");
        }
        if self.asteroid.starting_radii.iter().any(|r| !(*r > 0.0)) {
            return invalid("asteroid.starting_radii must all be positive");
        }
        let spawn = &self.spawn;
        if !(spawn.interval_min > 0.0 && spawn.interval_min <= spawn.interval_max) {
            return invalid("spawn interval must satisfy 0 < interval_min <= interval_max");
        }
        if !(spawn.speed_min >= 0.0 && spawn.speed_min <= spawn.speed_max) {
            return invalid("spawn speed must satisfy 0 <= speed_min <= speed_max");
        }
        if !(spawn.spread_deg >= 0.0) {
            return invalid("spawn.spread_deg must not be negative");
        }
        let split = &self.split;
        if !(split.angle_min_deg >= 0.0 && split.angle_min_deg <= split.angle_max_deg) {
            return invalid("split angles must satisfy 0 <= angle_min_deg <= angle_max_deg");
        }
        if !(split.speed_boost > 1.0) {
            return invalid("split.speed_boost must be greater than 1");
        }
        let player = &self.player;
        if !(player.radius > 0.0 && player.shot_radius > 0.0) {
            return invalid("player and shot radii must be positive");
        }
        if !(player.shoot_cooldown >= 0.0) {
            return invalid("player.shoot_cooldown must not be negative");
        }
        Ok(())
    }

    /// Screen centre (player start)
    pub fn screen_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}
