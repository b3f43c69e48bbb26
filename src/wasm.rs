//! WASM bindings for browser hosts.
//!
//! Exposes the scene stepping loop and the surface-click geo mapping to
//! JavaScript so a host page can drive its own canvas from the same
//! engine the native front ends use.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { OrrerySimulation } from 'orrery';
//!
//! async function main() {
//!     await init();
//!
//!     const sim = new OrrerySimulation();
//!     function frame(dt) {
//!         sim.step(dt);
//!         const positions = sim.positions();
//!         // ... draw ...
//!     }
//! }
//! ```

// WASM-bindgen exports don't need #[must_use] - values returned to JS
#![allow(clippy::must_use_candidate)]

use chrono::{TimeZone, Utc};
use wasm_bindgen::prelude::*;

use crate::config::SceneConfig;
use crate::engine::TimeScale;
use crate::scene::kinematics::Vec3;
use crate::scene::{PanelData, SolarSystem};

/// WASM-exported scene simulation.
#[wasm_bindgen]
pub struct OrrerySimulation {
    system: SolarSystem,
}

#[wasm_bindgen]
impl OrrerySimulation {
    /// Create a simulation of the built-in solar-system scene.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            system: SolarSystem::solar_system(),
        }
    }

    /// Create a simulation from a YAML scene string.
    ///
    /// # Errors
    ///
    /// Returns a JS error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> Result<OrrerySimulation, JsError> {
        let config = SceneConfig::from_yaml(yaml).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self {
            system: SolarSystem::from_config(config),
        })
    }

    /// Advance the scene by one frame of `dt_seconds`.
    pub fn step(&mut self, dt_seconds: f64) {
        self.system.advance_frame(dt_seconds);
    }

    /// Select the global time scale by control index
    /// (0 pause, 1 slow, 2 normal, 3 fast). Out-of-range indices are
    /// ignored.
    pub fn set_time_scale(&mut self, index: usize) {
        if let Some(scale) = TimeScale::ALL.get(index) {
            self.system.set_time_scale(*scale);
        }
    }

    /// Current time-scale factor.
    #[wasm_bindgen(getter)]
    pub fn time_scale_factor(&self) -> f64 {
        self.system.time_scale().factor()
    }

    /// Number of planets in the scene.
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.system.planets.len()
    }

    /// Name of a planet by index.
    pub fn body_name(&self, index: usize) -> Option<String> {
        self.system
            .planets
            .get(index)
            .map(|p| p.spec.name.clone())
    }

    /// Flat `[x, y, z]` triples for every planet, in orbit order.
    pub fn positions(&self) -> Vec<f64> {
        self.system
            .planets
            .iter()
            .flat_map(|p| [p.position.x, p.position.y, p.position.z])
            .collect()
    }

    /// Spin angle per planet, in orbit order.
    pub fn spin_angles(&self) -> Vec<f64> {
        self.system.planets.iter().map(|p| p.spin_angle).collect()
    }

    /// Flat `[x, y, z]` triples for a planet's moons, in heliocentric
    /// coordinates. Empty for a planet without moons or a bad index.
    pub fn moon_positions(&self, index: usize) -> Vec<f64> {
        self.system
            .planets
            .get(index)
            .map(|planet| {
                planet
                    .moons
                    .iter()
                    .map(|m| planet.moon_world_position(m))
                    .flat_map(|w| [w.x, w.y, w.z])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Map a surface click on the home body to a geographic fix.
    ///
    /// `unix_millis` is the wall-clock instant of the click. Returns
    /// `undefined` when the scene has no home body or the timestamp is
    /// out of range.
    pub fn locate(&self, x: f64, y: f64, z: f64, unix_millis: f64) -> Option<Location> {
        let home = self.system.home_index()?;
        #[allow(clippy::cast_possible_truncation)]
        let now = Utc.timestamp_millis_opt(unix_millis as i64).single()?;

        match self.system.select(home, Some(Vec3::new(x, y, z)), now)? {
            PanelData::Location(fix) => Some(Location {
                latitude: fix.latitude,
                longitude: fix.longitude,
                local_time: fix.local_time,
            }),
            PanelData::Body { .. } => None,
        }
    }
}

impl Default for OrrerySimulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Geographic fix returned to the host.
#[wasm_bindgen]
pub struct Location {
    latitude: f64,
    longitude: f64,
    local_time: String,
}

#[wasm_bindgen]
impl Location {
    /// Latitude in degrees.
    #[wasm_bindgen(getter)]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[wasm_bindgen(getter)]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Estimated local time, 24-hour `HH:MM`.
    #[wasm_bindgen(getter)]
    pub fn local_time(&self) -> String {
        self.local_time.clone()
    }
}
