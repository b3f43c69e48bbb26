//! Simulation timekeeping.
//!
//! - [`SimTime`]: fixed-point elapsed simulation time
//! - [`TimeScale`]: the global four-state time control
//! - [`BodyClock`]: per-body accumulated time
//! - [`SceneRng`]: deterministic RNG for scene generation

pub mod clock;
pub mod rng;

use serde::{Deserialize, Serialize};

pub use clock::BodyClock;
pub use rng::SceneRng;

/// Elapsed simulation time.
///
/// Fixed-point nanosecond representation for reproducibility across
/// platforms: two runs fed the same frame deltas accumulate bit-identical
/// elapsed times.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct SimTime {
    /// Time in nanoseconds from simulation start.
    nanos: u64,
}

impl SimTime {
    /// Zero time (simulation start).
    pub const ZERO: Self = Self { nanos: 0 };

    /// Create time from seconds.
    ///
    /// # Panics
    ///
    /// Panics if seconds is negative or not finite.
    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        assert!(secs >= 0.0, "SimTime cannot be negative");
        assert!(secs.is_finite(), "SimTime must be finite");
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nanos = (secs * 1_000_000_000.0) as u64;
        Self { nanos }
    }

    /// Create time from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Get time as seconds (f64).
    #[must_use]
    pub fn as_secs_f64(&self) -> f64 {
        self.nanos as f64 / 1_000_000_000.0
    }

    /// Get time as nanoseconds.
    #[must_use]
    pub const fn as_nanos(&self) -> u64 {
        self.nanos
    }

    /// Add duration to time.
    #[must_use]
    pub const fn add_nanos(self, nanos: u64) -> Self {
        Self {
            nanos: self.nanos + nanos,
        }
    }
}

impl std::ops::Add for SimTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            nanos: self.nanos + rhs.nanos,
        }
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.9}s", self.as_secs_f64())
    }
}

/// Global simulation speed selected from the time controls.
///
/// Four discrete states; a selection overwrites the scene's scale
/// immediately and takes effect on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    /// Frozen: clocks accumulate nothing, every orbit phase holds.
    Pause,
    /// One tenth of real rate.
    Slow,
    /// Real rate.
    #[default]
    Normal,
    /// Five times real rate.
    Fast,
}

impl TimeScale {
    /// All states in control-surface order.
    pub const ALL: [Self; 4] = [Self::Pause, Self::Slow, Self::Normal, Self::Fast];

    /// Multiplier converting real elapsed seconds into simulated seconds.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Pause => 0.0,
            Self::Slow => 0.1,
            Self::Normal => 1.0,
            Self::Fast => 5.0,
        }
    }

    /// Display label for the control surface.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
        }
    }

    /// Parse a CLI/config name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pause" => Some(Self::Pause),
            "slow" => Some(Self::Slow),
            "normal" => Some(Self::Normal),
            "fast" => Some(Self::Fast),
            _ => None,
        }
    }
}

impl std::fmt::Display for TimeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
