//! Per-body simulation clocks.
//!
//! Each animated body exclusively owns a [`BodyClock`] holding its
//! accumulated elapsed simulation time. The clock is advanced once per
//! frame with the frame delta and the global time scale; a child body's
//! rate multiplier (moons) scales on top of the global value.

use serde::{Deserialize, Serialize};

use crate::engine::SimTime;

/// Accumulated simulation time for one animated body.
///
/// Monotonically non-decreasing while the time scale is positive, frozen
/// exactly while it is zero. Owned by the body it animates; never shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyClock {
    /// Accumulated elapsed simulation time.
    elapsed: SimTime,
    /// Rate multiplier relative to the global time scale.
    rate: f64,
}

impl BodyClock {
    /// Clock for a top-level body (rate 1).
    #[must_use]
    pub fn new() -> Self {
        Self::with_rate(1.0)
    }

    /// Clock with a rate multiplier relative to the global time scale.
    ///
    /// Moons use this to animate faster than the global scale.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not finite or not positive.
    #[must_use]
    pub fn with_rate(rate: f64) -> Self {
        assert!(rate.is_finite(), "clock rate must be finite");
        assert!(rate > 0.0, "clock rate must be positive");
        Self {
            elapsed: SimTime::ZERO,
            rate,
        }
    }

    /// Advance by one frame and return the new elapsed time.
    ///
    /// `new_elapsed = elapsed + dt × global_scale × rate`. A zero scale
    /// adds exactly nothing, so pausing freezes the phase and resuming
    /// continues seamlessly from the frozen value.
    ///
    /// # Panics
    ///
    /// Panics if `dt_secs` or `global_scale` is negative or not finite.
    pub fn advance(&mut self, dt_secs: f64, global_scale: f64) -> SimTime {
        assert!(
            dt_secs >= 0.0 && dt_secs.is_finite(),
            "frame delta must be finite and non-negative"
        );
        assert!(
            global_scale >= 0.0 && global_scale.is_finite(),
            "time scale must be finite and non-negative"
        );

        let step_secs = dt_secs * global_scale * self.rate;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let step_nanos = (step_secs * 1_000_000_000.0) as u64;
        self.elapsed = self.elapsed.add_nanos(step_nanos);
        self.elapsed
    }

    /// Get accumulated elapsed time.
    #[must_use]
    pub const fn elapsed(&self) -> SimTime {
        self.elapsed
    }

    /// Get the rate multiplier.
    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    /// Reset the clock to simulation start. The rate is preserved.
    pub fn reset(&mut self) {
        self.elapsed = SimTime::ZERO;
    }
}

impl Default for BodyClock {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: elapsed time never decreases under any
        /// non-negative delta and scale.
        #[test]
        fn prop_elapsed_monotonic(
            deltas in proptest::collection::vec(0.0f64..0.1, 1..100),
            scale in 0.0f64..5.0,
        ) {
            let mut clock = BodyClock::new();
            let mut prev = clock.elapsed();
            for dt in deltas {
                let next = clock.advance(dt, scale);
                prop_assert!(next >= prev);
                prev = next;
            }
        }

        /// Falsification: a zero scale accumulates nothing, regardless
        /// of how many frames elapse.
        #[test]
        fn prop_zero_scale_freezes(
            warmup in 0.0f64..10.0,
            frames in 1usize..500,
        ) {
            let mut clock = BodyClock::new();
            clock.advance(warmup, 1.0);
            let frozen = clock.elapsed();
            for _ in 0..frames {
                clock.advance(1.0 / 60.0, 0.0);
            }
            prop_assert_eq!(clock.elapsed(), frozen);
        }

        /// Falsification: for a fixed delta, a larger scale accumulates
        /// strictly more time.
        #[test]
        fn prop_scale_monotonicity(dt in 0.001f64..0.1) {
            let mut slow = BodyClock::new();
            let mut normal = BodyClock::new();
            let mut fast = BodyClock::new();

            slow.advance(dt, 0.1);
            normal.advance(dt, 1.0);
            fast.advance(dt, 5.0);

            prop_assert!(slow.elapsed() < normal.elapsed());
            prop_assert!(normal.elapsed() < fast.elapsed());
        }
    }
}
