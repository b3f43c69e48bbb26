//! Orbital kinematics.
//!
//! The motion model is parametrized circular animation, not gravity:
//! a body's pose is a pure function of its accumulated simulation time,
//! so pausing freezes every orbit phase exactly and resuming continues
//! without a jump.

use serde::{Deserialize, Serialize};

use crate::engine::BodyClock;

/// 3D vector for positions and directions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Magnitude squared.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (length).
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Normalize to unit length. The zero vector stays zero.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag < f64::EPSILON {
            Self::zero()
        } else {
            Self {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            }
        }
    }

    /// Check if all components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Orbital and spin parameters for one animated body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalMotion {
    /// Orbit radius from the parent origin.
    pub distance: f64,
    /// Angular velocity around the parent origin, radians per simulated
    /// second. Sign determines direction.
    pub orbit_speed: f64,
    /// Self-spin angular velocity about the local vertical axis.
    /// `None` for bodies that do not spin (moons).
    pub spin_speed: Option<f64>,
}

/// Pose produced for one body for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrame {
    /// Position in the parent's frame.
    pub position: Vec3,
    /// Self-spin angle, when the body spins.
    pub spin: Option<f64>,
}

/// Position on the circular orbit after `elapsed_secs` simulated seconds.
///
/// The orbit lies in the XZ plane at the parent's height; zero phase
/// places the body at `(0, 0, distance)`. A zero distance degenerates
/// to the parent origin, a zero speed holds the fixed zero-phase
/// position.
#[must_use]
pub fn orbit_position(elapsed_secs: f64, orbit_speed: f64, distance: f64) -> Vec3 {
    let phase = elapsed_secs * orbit_speed;
    Vec3::new(phase.sin() * distance, 0.0, phase.cos() * distance)
}

/// Self-spin angle about the local vertical axis after `elapsed_secs`
/// simulated seconds.
#[must_use]
pub fn spin_angle(elapsed_secs: f64, spin_speed: f64) -> f64 {
    elapsed_secs * spin_speed
}

/// Advance one body by one frame: accumulate time on its clock, then
/// derive the pose from the new elapsed value.
///
/// The caller applies the returned pose to its rendered representation;
/// there is no other side effect.
///
/// # Panics
///
/// Panics if `dt_secs` or `global_scale` is negative or not finite.
pub fn advance(
    clock: &mut BodyClock,
    motion: &OrbitalMotion,
    dt_secs: f64,
    global_scale: f64,
) -> BodyFrame {
    let elapsed = clock.advance(dt_secs, global_scale).as_secs_f64();
    BodyFrame {
        position: orbit_position(elapsed, motion.orbit_speed, motion.distance),
        spin: motion.spin_speed.map(|speed| spin_angle(elapsed, speed)),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: for any parameters, the body stays on the
        /// circle of its orbital radius.
        #[test]
        fn prop_circular_orbit_invariant(
            distance in 0.0f64..100.0,
            orbit_speed in -10.0f64..10.0,
            elapsed in 0.0f64..1000.0,
        ) {
            let pos = orbit_position(elapsed, orbit_speed, distance);
            let r_sq = pos.x * pos.x + pos.z * pos.z;
            let tolerance = 1e-6 * (distance * distance).max(1.0);
            prop_assert!((r_sq - distance * distance).abs() < tolerance);
        }

        /// Falsification: orbit positions never leave the XZ plane.
        #[test]
        fn prop_orbit_plane(
            distance in 0.0f64..100.0,
            orbit_speed in -10.0f64..10.0,
            elapsed in 0.0f64..1000.0,
        ) {
            let pos = orbit_position(elapsed, orbit_speed, distance);
            prop_assert!((pos.y).abs() < f64::EPSILON);
        }
    }
}
