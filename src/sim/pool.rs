//! Fixed-capacity rectangle pools for lasers and asteroids
//!
//! Slots are allocated once and mutated in place. Nothing is ever removed:
//! a destroyed entity is parked off-screen until its slot is reused.

use rand::Rng;

use super::rect::Rect;
use crate::consts::*;

/// Ring buffer of laser rectangles.
///
/// Firing always writes the slot under the cursor, so once every slot is in
/// flight the oldest laser is the one overwritten.
#[derive(Debug, Clone)]
pub struct LaserPool<const N: usize = LASER_CAPACITY> {
    slots: [Rect; N],
    cursor: usize,
}

impl<const N: usize> Default for LaserPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LaserPool<N> {
    pub fn new() -> Self {
        Self {
            slots: [Rect::new(0, LASER_PARKED_Y, LASER_WIDTH, LASER_HEIGHT); N],
            cursor: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Slot that the next shot will occupy
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slots(&self) -> &[Rect; N] {
        &self.slots
    }

    /// A slot is live unless it sits at the parking sentinel
    pub fn is_active(&self, index: usize) -> bool {
        self.slots[index].y != LASER_PARKED_Y
    }

    /// Iterate over live lasers with their slot index
    pub fn active(&self) -> impl Iterator<Item = (usize, &Rect)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, r)| r.y != LASER_PARKED_Y)
    }

    /// Launch a laser from the nose of the ship. Returns the slot used.
    pub fn fire(&mut self, ship: &Rect) -> usize {
        let slot = self.cursor;
        let laser = &mut self.slots[slot];
        laser.x = ship.center().x - laser.w / 2;
        laser.y = ship.y - ship.h;
        self.cursor = (self.cursor + 1) % N;
        slot
    }

    /// Move every laser up by `speed`; lasers that leave the top are parked
    pub fn step(&mut self, speed: i32) {
        for laser in &mut self.slots {
            laser.y -= speed;
            if laser.y < 0 {
                laser.y = LASER_PARKED_Y;
            }
        }
    }

    pub fn park(&mut self, index: usize) {
        self.slots[index].y = LASER_PARKED_Y;
    }

    /// Overwrite a slot directly
    pub fn set(&mut self, index: usize, rect: Rect) {
        self.slots[index] = rect;
    }
}

/// A single asteroid slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asteroid {
    pub rect: Rect,
    /// Dormant asteroids neither move nor collide
    pub active: bool,
}

impl Asteroid {
    const fn dormant() -> Self {
        Self {
            rect: Rect::new(0, ASTEROID_PARKED_Y, ASTEROID_SIZE, ASTEROID_SIZE),
            active: false,
        }
    }
}

/// Fixed array of falling asteroids
#[derive(Debug, Clone)]
pub struct AsteroidField<const N: usize = ASTEROID_CAPACITY> {
    slots: [Asteroid; N],
}

impl<const N: usize> Default for AsteroidField<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AsteroidField<N> {
    /// All slots start dormant
    pub fn new() -> Self {
        Self {
            slots: [Asteroid::dormant(); N],
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn slots(&self) -> &[Asteroid; N] {
        &self.slots
    }

    pub fn active(&self) -> impl Iterator<Item = (usize, &Rect)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, a)| a.active)
            .map(|(i, a)| (i, &a.rect))
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|a| a.active).count()
    }

    /// Put an asteroid at a random x somewhere in the band above the screen
    pub fn respawn<R: Rng>(&mut self, index: usize, spread: i32, rng: &mut R) {
        let rect = &mut self.slots[index].rect;
        rect.x = rng.random_range(0..=WINDOW_WIDTH - rect.w);
        rect.y = -rect.h - rng.random_range(0..=spread.max(0));
    }

    /// Wake the lowest dormant slot. Returns `None` when every slot is busy.
    pub fn activate_dormant<R: Rng>(&mut self, spread: i32, rng: &mut R) -> Option<usize> {
        let index = self.slots.iter().position(|a| !a.active)?;
        self.slots[index].active = true;
        self.respawn(index, spread, rng);
        Some(index)
    }

    /// Move active asteroids down by `speed`; those past the bottom respawn on top
    pub fn step<R: Rng>(&mut self, speed: i32, spread: i32, rng: &mut R) {
        for index in 0..N {
            if !self.slots[index].active {
                continue;
            }
            self.slots[index].rect.y += speed;
            if self.slots[index].rect.y > WINDOW_HEIGHT {
                self.respawn(index, spread, rng);
            }
        }
    }

    /// Return a slot to the dormant state
    pub fn deactivate(&mut self, index: usize) {
        self.slots[index] = Asteroid::dormant();
    }

    /// Overwrite a slot directly (activates it)
    pub fn set(&mut self, index: usize, rect: Rect) {
        self.slots[index] = Asteroid { rect, active: true };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const SPREAD: i32 = 200;

    #[test]
    fn test_new_pools_are_idle() {
        let lasers: LaserPool = LaserPool::new();
        assert_eq!(lasers.capacity(), LASER_CAPACITY);
        assert_eq!(lasers.active().count(), 0);

        let field: AsteroidField = AsteroidField::new();
        assert_eq!(field.capacity(), ASTEROID_CAPACITY);
        assert_eq!(field.active_count(), 0);
    }

    #[test]
    fn test_fire_places_laser_above_ship_nose() {
        let mut lasers: LaserPool = LaserPool::new();
        let ship = Rect::new(600, 400, SHIP_SIZE, SHIP_SIZE);
        let slot = lasers.fire(&ship);
        assert_eq!(slot, 0);
        let laser = lasers.slots()[0];
        assert_eq!(laser.x, 632 - LASER_WIDTH / 2);
        assert_eq!(laser.y, 400 - SHIP_SIZE);
        assert!(lasers.is_active(0));
    }

    #[test]
    fn test_sixth_shot_reuses_slot_zero() {
        let mut lasers: LaserPool = LaserPool::new();
        let ship = Rect::new(600, 400, SHIP_SIZE, SHIP_SIZE);
        let used: Vec<usize> = (0..6).map(|_| lasers.fire(&ship)).collect();
        assert_eq!(used, vec![0, 1, 2, 3, 4, 0]);
        assert_eq!(lasers.cursor(), 1);
    }

    #[test]
    fn test_laser_leaving_top_is_parked() {
        let mut lasers: LaserPool = LaserPool::new();
        lasers.set(2, Rect::new(10, 5, LASER_WIDTH, LASER_HEIGHT));
        lasers.step(12);
        assert_eq!(lasers.slots()[2].y, LASER_PARKED_Y);
        assert!(!lasers.is_active(2));

        // Parked lasers stay parked
        lasers.step(12);
        assert_eq!(lasers.slots()[2].y, LASER_PARKED_Y);
    }

    #[test]
    fn test_asteroid_activation_fills_lowest_slot_then_stops() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field: AsteroidField<3> = AsteroidField::new();
        assert_eq!(field.activate_dormant(SPREAD, &mut rng), Some(0));
        assert_eq!(field.activate_dormant(SPREAD, &mut rng), Some(1));
        field.deactivate(0);
        assert_eq!(field.activate_dormant(SPREAD, &mut rng), Some(0));
        assert_eq!(field.activate_dormant(SPREAD, &mut rng), Some(2));
        assert_eq!(field.activate_dormant(SPREAD, &mut rng), None);
        assert_eq!(field.active_count(), 3);
    }

    #[test]
    fn test_respawn_lands_above_screen_within_width() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field: AsteroidField<1> = AsteroidField::new();
        for _ in 0..500 {
            field.activate_dormant(SPREAD, &mut rng);
            let r = field.slots()[0].rect;
            assert!(r.x >= 0 && r.right() <= WINDOW_WIDTH);
            assert!(r.y <= -r.h && r.y >= -r.h - SPREAD);
            field.deactivate(0);
        }
    }

    #[test]
    fn test_dormant_asteroids_do_not_move() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field: AsteroidField<2> = AsteroidField::new();
        let before = field.slots()[1];
        field.step(4, SPREAD, &mut rng);
        assert_eq!(field.slots()[1], before);
    }

    proptest! {
        #[test]
        fn laser_step_moves_up_or_parks(y in -100i32..800, speed in 1i32..40) {
            let mut lasers: LaserPool<1> = LaserPool::new();
            lasers.set(0, Rect::new(100, y, LASER_WIDTH, LASER_HEIGHT));
            lasers.step(speed);
            let after = lasers.slots()[0].y;
            if y - speed < 0 {
                prop_assert_eq!(after, LASER_PARKED_Y);
            } else {
                prop_assert_eq!(after, y - speed);
            }
        }

        #[test]
        fn asteroid_step_falls_or_respawns(y in -400i32..800, speed in 1i32..40, seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut field: AsteroidField<1> = AsteroidField::new();
            field.set(0, Rect::new(300, y, ASTEROID_SIZE, ASTEROID_SIZE));
            field.step(speed, SPREAD, &mut rng);
            let after = field.slots()[0].rect;
            if y + speed > WINDOW_HEIGHT {
                prop_assert!(after.y <= -after.h);
            } else {
                prop_assert_eq!(after.y, y + speed);
                prop_assert_eq!(after.x, 300);
            }
        }
    }
}
