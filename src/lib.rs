//! Casteroids - a cursor-driven asteroids shooter
//!
//! Core modules:
//! - `sim`: Per-frame game logic (rectangle pools, collisions, score)
//! - `renderer`: wgpu sprite pipeline and score label
//! - `audio`: Sound effects and music over rodio
//! - `app`: winit frame driver
//! - `config`: Settings and data-driven game balance

pub mod app;
pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use config::GameConfig;
pub use error::{AssetError, InitError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: i32 = 1280;
    pub const WINDOW_HEIGHT: i32 = 720;
    pub const WINDOW_TITLE: &str = "Casteroids";

    /// Ship sprite size
    pub const SHIP_SIZE: i32 = 64;

    /// Laser sprite size
    pub const LASER_WIDTH: i32 = 8;
    pub const LASER_HEIGHT: i32 = 64;
    /// Number of laser slots in the ring buffer
    pub const LASER_CAPACITY: usize = 5;
    /// Off-screen y where inactive lasers are parked
    pub const LASER_PARKED_Y: i32 = -80;

    /// Asteroid sprite size
    pub const ASTEROID_SIZE: i32 = 64;
    /// Number of asteroid slots
    pub const ASTEROID_CAPACITY: usize = 15;
    /// Off-screen y where dormant asteroids wait (well above any respawn band)
    pub const ASTEROID_PARKED_Y: i32 = -4096;

    /// Score label layout
    pub const SCORE_FONT_PX: f32 = 50.0;
    pub const SCORE_BOTTOM_OFFSET: i32 = 80;
    /// Border outlines are drawn at offsets [start, end) around the label
    pub const SCORE_BORDER_START: i32 = 10;
    pub const SCORE_BORDER_END: i32 = 20;

    /// Clear color behind the background image (12, 2, 26)
    pub const CLEAR_RGB: [u8; 3] = [12, 2, 26];
}
