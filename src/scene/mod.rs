//! Scene state and the frame driver.
//!
//! [`SolarSystem`] owns the runtime body tree: each planet and moon
//! carries its own [`BodyClock`] and current pose. One `advance_frame`
//! call per rendered frame updates every body with the same frame delta
//! and the same global time scale; bodies are mutually independent, so
//! update order is unobservable.

pub mod belt;
pub mod kinematics;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{BodyConfig, MoonConfig, SceneConfig, SunConfig};
use crate::engine::{BodyClock, SceneRng, SimTime, TimeScale};
use crate::geo::{self, LocationResult};
use belt::AsteroidBelt;
use kinematics::{advance, OrbitalMotion, Vec3};

/// Info-panel payload produced by a body selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PanelData {
    /// Geographic fix on the home body.
    Location(LocationResult),
    /// Static descriptor for any other body, or for the home body when
    /// the selection carried no surface point.
    Body {
        /// Body name.
        name: String,
        /// Render radius, in Earth multiples for display.
        size: f64,
    },
}

/// A moon in orbit around a planet.
#[derive(Debug, Clone)]
pub struct Moon {
    /// Static parameters.
    pub spec: MoonConfig,
    /// Owned simulation clock (runs at `clock_rate ×` the global scale).
    clock: BodyClock,
    /// Current position in the parent planet's frame.
    pub position: Vec3,
}

impl Moon {
    fn from_config(spec: &MoonConfig) -> Self {
        let position = kinematics::orbit_position(0.0, spec.orbit_speed, spec.distance);
        Self {
            spec: spec.clone(),
            clock: BodyClock::with_rate(spec.clock_rate),
            position,
        }
    }

    const fn motion(&self) -> OrbitalMotion {
        OrbitalMotion {
            distance: self.spec.distance,
            orbit_speed: self.spec.orbit_speed,
            spin_speed: None,
        }
    }

    /// Accumulated simulation time for this moon.
    #[must_use]
    pub const fn elapsed(&self) -> SimTime {
        self.clock.elapsed()
    }

    fn reset(&mut self) {
        self.clock.reset();
        self.position = kinematics::orbit_position(0.0, self.spec.orbit_speed, self.spec.distance);
    }
}

/// A planet in orbit around the sun, with optional moons.
#[derive(Debug, Clone)]
pub struct Planet {
    /// Static parameters.
    pub spec: BodyConfig,
    /// Owned simulation clock.
    clock: BodyClock,
    /// Current heliocentric position.
    pub position: Vec3,
    /// Self-spin angle about the local vertical axis.
    pub spin_angle: f64,
    /// Moons in the planet's frame.
    pub moons: Vec<Moon>,
}

impl Planet {
    fn from_config(spec: &BodyConfig) -> Self {
        let position = kinematics::orbit_position(0.0, spec.orbit_speed, spec.distance);
        let moons = spec.moons.iter().map(Moon::from_config).collect();
        Self {
            spec: spec.clone(),
            clock: BodyClock::new(),
            position,
            spin_angle: 0.0,
            moons,
        }
    }

    const fn motion(&self) -> OrbitalMotion {
        OrbitalMotion {
            distance: self.spec.distance,
            orbit_speed: self.spec.orbit_speed,
            spin_speed: Some(self.spec.rotation_speed),
        }
    }

    /// Accumulated simulation time for this planet.
    #[must_use]
    pub const fn elapsed(&self) -> SimTime {
        self.clock.elapsed()
    }

    /// A moon's position in heliocentric coordinates.
    #[must_use]
    pub fn moon_world_position(&self, moon: &Moon) -> Vec3 {
        self.position + moon.position
    }

    fn reset(&mut self) {
        self.clock.reset();
        self.position = kinematics::orbit_position(0.0, self.spec.orbit_speed, self.spec.distance);
        self.spin_angle = 0.0;
        for moon in &mut self.moons {
            moon.reset();
        }
    }
}

/// The animated scene: every body with its clock, the asteroid belt,
/// and the global time scale.
#[derive(Debug, Clone)]
pub struct SolarSystem {
    config: SceneConfig,
    /// Planets in orbit order.
    pub planets: Vec<Planet>,
    /// The static asteroid belt.
    pub belt: AsteroidBelt,
    time_scale: TimeScale,
    frame_count: u64,
}

impl SolarSystem {
    /// Build the runtime scene from a configuration.
    ///
    /// The belt is generated here from the scene seed, so identical
    /// configurations produce bitwise-identical scenes.
    #[must_use]
    pub fn from_config(config: SceneConfig) -> Self {
        let planets = config.bodies.iter().map(Planet::from_config).collect();
        let mut rng = SceneRng::new(config.reproducibility.seed);
        let belt = AsteroidBelt::generate(&config.belt, &mut rng);
        let time_scale = config.time_scale;
        Self {
            config,
            planets,
            belt,
            time_scale,
            frame_count: 0,
        }
    }

    /// The built-in solar-system scene.
    #[must_use]
    pub fn solar_system() -> Self {
        Self::from_config(SceneConfig::solar_system())
    }

    /// The scene configuration this system was built from.
    #[must_use]
    pub const fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The central body's parameters.
    #[must_use]
    pub const fn sun(&self) -> &SunConfig {
        &self.config.sun
    }

    /// Current global time scale.
    #[must_use]
    pub const fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    /// Select a new global time scale; effective on the next frame.
    pub fn set_time_scale(&mut self, scale: TimeScale) {
        self.time_scale = scale;
    }

    /// Number of frames advanced since build or reset.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance every animated body by one frame.
    ///
    /// The scale factor is read once, so all bodies observe the same
    /// `dt` and scale within a frame.
    ///
    /// # Panics
    ///
    /// Panics if `dt_secs` is negative or not finite.
    pub fn advance_frame(&mut self, dt_secs: f64) {
        let scale = self.time_scale.factor();

        for planet in &mut self.planets {
            let motion = planet.motion();
            let frame = advance(&mut planet.clock, &motion, dt_secs, scale);
            planet.position = frame.position;
            if let Some(spin) = frame.spin {
                planet.spin_angle = spin;
            }

            for moon in &mut planet.moons {
                let moon_motion = moon.motion();
                let moon_frame = advance(&mut moon.clock, &moon_motion, dt_secs, scale);
                moon.position = moon_frame.position;
            }
        }

        self.frame_count += 1;
    }

    /// Resolve a body selection into info-panel data.
    ///
    /// A home-body selection carrying a surface point is routed through
    /// the geo mapper; every other selection surfaces the body's static
    /// descriptor. Returns `None` for an out-of-range index.
    #[must_use]
    pub fn select(
        &self,
        index: usize,
        surface_point: Option<Vec3>,
        now: DateTime<Utc>,
    ) -> Option<PanelData> {
        let planet = self.planets.get(index)?;
        let data = match surface_point {
            Some(point) if planet.spec.home => {
                PanelData::Location(geo::map_click_to_location(point, now))
            }
            _ => PanelData::Body {
                name: planet.spec.name.clone(),
                size: planet.spec.size,
            },
        };
        Some(data)
    }

    /// Index of the home body, if the scene has one.
    #[must_use]
    pub fn home_index(&self) -> Option<usize> {
        self.planets.iter().position(|p| p.spec.home)
    }

    /// Reset every clock and pose and regenerate the belt from the
    /// scene seed.
    pub fn reset(&mut self) {
        for planet in &mut self.planets {
            planet.reset();
        }
        let mut rng = SceneRng::new(self.config.reproducibility.seed);
        self.belt = AsteroidBelt::generate(&self.config.belt, &mut rng);
        self.frame_count = 0;
    }
}
