//! Data-driven game balance
//!
//! Speeds are in pixels per frame, times in milliseconds of wall-clock time.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::WINDOW_HEIGHT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Upward laser speed (px/frame)
    pub laser_speed: i32,
    /// Downward asteroid speed (px/frame)
    pub asteroid_speed: i32,
    /// Points per destroyed asteroid
    pub hit_points: u32,
    /// Points per survived interval
    pub time_points: u32,
    /// Survival bonus interval
    pub time_interval_ms: u64,
    /// Cooldown between asteroid spawns
    pub spawn_interval_ms: u64,
    /// Height of the band above the screen where asteroids respawn
    pub respawn_spread: i32,
    /// Frame-rate cap
    pub target_fps: u32,
    /// Alpha applied to the background image
    pub background_alpha: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            laser_speed: 12,
            asteroid_speed: 4,
            hit_points: 10,
            time_points: 1,
            time_interval_ms: 3000,
            spawn_interval_ms: 900,
            respawn_spread: 200,
            target_fps: 60,
            background_alpha: 200,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with. Speeds and the respawn
    /// band are capped at the window height so positions stay far from
    /// `i32` limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=WINDOW_HEIGHT).contains(&self.laser_speed) {
            return Err(ConfigError::Invalid(format!(
                "laser_speed must be in 1..={}",
                WINDOW_HEIGHT
            )));
        }
        if !(1..=WINDOW_HEIGHT).contains(&self.asteroid_speed) {
            return Err(ConfigError::Invalid(format!(
                "asteroid_speed must be in 1..={}",
                WINDOW_HEIGHT
            )));
        }
        if self.time_interval_ms == 0 || self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid("intervals must be non-zero".into()));
        }
        if !(0..=WINDOW_HEIGHT).contains(&self.respawn_spread) {
            return Err(ConfigError::Invalid(format!(
                "respawn_spread must be in 0..={}",
                WINDOW_HEIGHT
            )));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be non-zero".into()));
        }
        Ok(())
    }

    /// Fixed delay between frames at the target rate
    pub fn frame_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / u64::from(self.target_fps.max(1)))
    }
}
