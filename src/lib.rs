//! # orrery
//!
//! Deterministic solar-system orrery: a sun, planets with moons and
//! rings, an asteroid belt, global time scaling, and surface-click
//! geolocation on the home body.
//!
//! The motion model is parametrized circular animation driven by
//! per-body clocks, not gravitation: a body's pose is a pure function
//! of its accumulated simulation time, so pausing freezes every orbit
//! phase exactly and resuming continues seamlessly.
//!
//! ## Example
//!
//! ```rust
//! use orrery::prelude::*;
//!
//! let mut system = SolarSystem::solar_system();
//! system.set_time_scale(TimeScale::Fast);
//! system.advance_frame(1.0 / 60.0);
//!
//! let earth = &system.planets[2];
//! assert!((earth.position.magnitude() - earth.spec.distance).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod geo;
pub mod render;
pub mod scene;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::SceneConfig;
    pub use crate::engine::{BodyClock, SceneRng, SimTime, TimeScale};
    pub use crate::error::{OrreryError, OrreryResult};
    pub use crate::geo::{map_click_to_location, LocationResult};
    pub use crate::render::{render_scene, RenderCommand, RenderConfig};
    pub use crate::scene::kinematics::{
        advance, orbit_position, spin_angle, BodyFrame, OrbitalMotion, Vec3,
    };
    pub use crate::scene::{PanelData, SolarSystem};
}

/// Re-export for public API
pub use error::{OrreryError, OrreryResult};
