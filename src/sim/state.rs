//! Game state and core simulation types
//!
//! Everything the update pass touches lives in `GameState`; there is no
//! process-wide mutable state.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::pool::{AsteroidField, LaserPool};
use super::rect::Rect;
use super::score::ScoreKeeper;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// The ship was hit; the frame driver stops on its next check
    GameOver,
}

/// Something that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LaserFired { slot: usize },
    AsteroidSpawned { slot: usize },
    AsteroidDestroyed { laser: usize, asteroid: usize },
    TimeBonus { intervals: u32 },
    ShipDestroyed { asteroid: usize },
}

/// The player's ship. Position comes straight from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    pub rect: Rect,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            rect: Rect::new(WINDOW_WIDTH / 2, WINDOW_HEIGHT / 2, SHIP_SIZE, SHIP_SIZE),
        }
    }
}

impl Ship {
    /// Center the ship on the pointer
    pub fn follow(&mut self, pointer: IVec2) {
        self.rect = Rect::centered_on(pointer, self.rect.w, self.rect.h);
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub ship: Ship,
    pub lasers: LaserPool,
    pub asteroids: AsteroidField,
    pub score: ScoreKeeper,
    /// Wall-clock time since the run started, as of the last tick
    pub elapsed_ms: u64,
    /// Elapsed time of the last asteroid spawn
    pub last_spawn_ms: u64,
    /// Tick counter
    pub frame: u64,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: ScoreKeeper::from_tuning(&tuning),
            tuning,
            phase: GamePhase::Playing,
            ship: Ship::default(),
            lasers: LaserPool::new(),
            asteroids: AsteroidField::new(),
            elapsed_ms: 0,
            last_spawn_ms: 0,
            frame: 0,
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(1, Tuning::default());
        assert!(state.is_running());
        assert_eq!(state.score.value(), 0);
        assert_eq!(state.asteroids.active_count(), 0);
        assert_eq!(state.lasers.active().count(), 0);
        assert_eq!(
            state.ship.rect,
            Rect::new(WINDOW_WIDTH / 2, WINDOW_HEIGHT / 2, SHIP_SIZE, SHIP_SIZE)
        );
    }

    #[test]
    fn test_ship_follows_pointer() {
        let mut ship = Ship::default();
        ship.follow(IVec2::new(100, 200));
        assert_eq!(ship.rect, Rect::new(68, 168, SHIP_SIZE, SHIP_SIZE));
    }
}
