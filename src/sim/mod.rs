//! Game simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the
//! window, the GPU or the audio device:
//! - Integer screen-space rectangles only
//! - Seeded RNG only
//! - Time is passed in, never read

pub mod pool;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use pool::{Asteroid, AsteroidField, LaserPool};
pub use rect::Rect;
pub use score::ScoreKeeper;
pub use state::{GameEvent, GamePhase, GameState, Ship};
pub use tick::{TickInput, tick};
