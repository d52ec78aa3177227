//! Score accumulation
//!
//! Points come from two sources: destroyed asteroids, and surviving. The
//! survival bonus is paid once per whole interval of elapsed time.

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreKeeper {
    value: u32,
    hit_points: u32,
    time_points: u32,
    interval_ms: u64,
    /// Elapsed time at which the last survival bonus was paid
    last_mark_ms: u64,
}

impl ScoreKeeper {
    pub fn new(hit_points: u32, time_points: u32, interval_ms: u64) -> Self {
        Self {
            value: 0,
            hit_points,
            time_points,
            interval_ms,
            last_mark_ms: 0,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(
            tuning.hit_points,
            tuning.time_points,
            tuning.time_interval_ms,
        )
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Credit one destroyed asteroid
    pub fn register_hit(&mut self) {
        self.value = self.value.saturating_add(self.hit_points);
    }

    /// Pay out the survival bonus for every full interval up to `now_ms`.
    /// Returns how many intervals were paid.
    pub fn advance(&mut self, now_ms: u64) -> u32 {
        if self.interval_ms == 0 {
            return 0;
        }
        let mut paid = 0;
        while now_ms.saturating_sub(self.last_mark_ms) >= self.interval_ms {
            self.last_mark_ms += self.interval_ms;
            self.value = self.value.saturating_add(self.time_points);
            paid += 1;
        }
        paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_adds_base_increment() {
        let mut score = ScoreKeeper::new(10, 1, 3000);
        score.register_hit();
        assert_eq!(score.value(), 10);
        score.register_hit();
        assert_eq!(score.value(), 20);
    }

    #[test]
    fn test_time_bonus_every_interval() {
        let mut score = ScoreKeeper::new(10, 1, 3000);
        assert_eq!(score.advance(2999), 0);
        assert_eq!(score.value(), 0);
        assert_eq!(score.advance(3000), 1);
        assert_eq!(score.value(), 1);
        // Same instant again pays nothing
        assert_eq!(score.advance(3000), 0);
        assert_eq!(score.advance(5999), 0);
        assert_eq!(score.advance(6001), 1);
        assert_eq!(score.value(), 2);
    }

    #[test]
    fn test_time_bonus_does_not_drift() {
        let mut score = ScoreKeeper::new(10, 1, 3000);
        // Frames landing slightly late each interval
        for now in [3016, 6010, 9033, 12001] {
            score.advance(now);
        }
        assert_eq!(score.value(), 4);
    }

    #[test]
    fn test_long_stall_pays_each_missed_interval() {
        let mut score = ScoreKeeper::new(10, 1, 3000);
        assert_eq!(score.advance(9500), 3);
        assert_eq!(score.value(), 3);
    }

    #[test]
    fn test_hits_and_time_combine() {
        let mut score = ScoreKeeper::new(10, 1, 3000);
        score.register_hit();
        score.advance(3000);
        score.register_hit();
        assert_eq!(score.value(), 21);
    }

    #[test]
    fn test_score_saturates() {
        let mut score = ScoreKeeper::new(u32::MAX, 1, 3000);
        score.register_hit();
        score.register_hit();
        assert_eq!(score.value(), u32::MAX);
    }
}
