//! Input polling
//!
//! Platform events arrive whenever the event loop delivers them; the game
//! only looks at input once per frame. `InputState` buffers events in
//! between and hands out one `TickInput` per frame.

use glam::IVec2;

use crate::sim::TickInput;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last known cursor position in window pixels
    pointer: Option<IVec2>,
    /// Clicks since the last drain
    pending_shots: u32,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some(IVec2::new(x.round() as i32, y.round() as i32));
    }

    pub fn mouse_pressed(&mut self) {
        self.pending_shots = self.pending_shots.saturating_add(1);
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Take this frame's input. One-shot actions are cleared.
    pub fn drain(&mut self) -> TickInput {
        TickInput {
            pointer: self.pointer,
            shots: std::mem::take(&mut self.pending_shots),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicks_are_counted_then_cleared() {
        let mut input = InputState::new();
        input.mouse_pressed();
        assert_eq!(input.drain().shots, 1);

        input.mouse_pressed();
        input.mouse_pressed();
        assert_eq!(input.drain().shots, 2);
        assert_eq!(input.drain().shots, 0);
    }

    #[test]
    fn test_pointer_persists_between_frames() {
        let mut input = InputState::new();
        assert_eq!(input.drain().pointer, None);
        input.cursor_moved(100.4, 200.6);
        assert_eq!(input.drain().pointer, Some(IVec2::new(100, 201)));
        // No motion this frame: ship stays where it was
        assert_eq!(input.drain().pointer, Some(IVec2::new(100, 201)));
    }

    #[test]
    fn test_quit_is_sticky() {
        let mut input = InputState::new();
        assert!(!input.quit_requested());
        input.request_quit();
        input.drain();
        assert!(input.quit_requested());
    }
}
