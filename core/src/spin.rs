use crate::rng::{rand_index, rand_range, rand_unit};
use crate::wheel::{target_angle, FULL_TURN_DEG};

pub const SPIN_DURATION_MIN_MS: f64 = 4000.0;
pub const SPIN_DURATION_MAX_MS: f64 = 6000.0;
pub const FULL_TURNS_MIN: u32 = 5;
pub const FULL_TURNS_MAX: u32 = 9;
pub const SETTLE_MS: f64 = 500.0;
pub const SPIN_TICK_MS: u32 = 16;

const WINNER_SALT: u64 = 0xD1CE;
const TURNS_SALT: u64 = 0xCAFE;
const DURATION_SALT: u64 = 0xF00D;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinPhase {
    Spinning,
    Settling,
    WinnerShown,
}

/// One spin from tap to winner reveal. The session is pure data; sampling
/// functions take `now_ms` so a test clock works as well as `Date::now()`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinSession {
    pub winning_index: usize,
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub start_time_ms: f64,
    pub duration_ms: f64,
}

impl SpinSession {
    pub fn begin(count: usize, start_rotation: f64, now_ms: f64, seed: u64) -> Self {
        let winning_index = rand_index(seed, WINNER_SALT, count);
        Self::with_winner(winning_index, count, start_rotation, now_ms, seed)
    }

    /// The winner is fixed before any motion; the rotation target is
    /// derived from it and never the other way around.
    pub fn with_winner(
        winning_index: usize,
        count: usize,
        start_rotation: f64,
        now_ms: f64,
        seed: u64,
    ) -> Self {
        let turn_span = (FULL_TURNS_MAX - FULL_TURNS_MIN + 1) as f64;
        let turns = FULL_TURNS_MIN + (rand_unit(seed, TURNS_SALT) * turn_span) as u32;
        let duration_ms = rand_range(
            seed,
            DURATION_SALT,
            SPIN_DURATION_MIN_MS,
            SPIN_DURATION_MAX_MS,
        );
        let target_rotation =
            start_rotation + turns as f64 * FULL_TURN_DEG + target_angle(winning_index, count);
        Self {
            winning_index,
            start_rotation,
            target_rotation,
            start_time_ms: now_ms,
            duration_ms,
        }
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_time_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn rotation_at(&self, now_ms: f64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.target_rotation;
        }
        let eased = ease_out_quart(t);
        self.start_rotation + (self.target_rotation - self.start_rotation) * eased
    }

    pub fn phase_at(&self, now_ms: f64) -> SpinPhase {
        let elapsed = now_ms - self.start_time_ms;
        if elapsed < self.duration_ms {
            SpinPhase::Spinning
        } else if elapsed < self.duration_ms + SETTLE_MS {
            SpinPhase::Settling
        } else {
            SpinPhase::WinnerShown
        }
    }
}

pub fn ease_out_quart(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv * inv
}
