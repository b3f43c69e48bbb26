//! Scene configuration with YAML schema and validation.
//!
//! Mistake-proofing happens in layers:
//! - type-safe configuration structs deserialized with serde
//!   (`deny_unknown_fields` rejects typos),
//! - schema validation via the validator derive,
//! - semantic validation for constraints the schema cannot express
//!   (positive sizes, a single home body, ring ordering).

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::TimeScale;
use crate::error::{OrreryError, OrreryResult};
use crate::scene::belt::BeltConfig;

/// Top-level scene configuration.
///
/// Loaded from YAML files with full schema validation. The built-in
/// default scene is the eight-planet solar system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Scene metadata.
    #[serde(default)]
    pub scene: SceneMeta,

    /// Reproducibility settings.
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Initial global time scale.
    #[serde(default)]
    pub time_scale: TimeScale,

    /// The central body.
    #[serde(default)]
    pub sun: SunConfig,

    /// Planets in orbit order.
    #[validate(nested)]
    pub bodies: Vec<BodyConfig>,

    /// Asteroid-belt placement.
    #[serde(default)]
    pub belt: BeltConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

/// Scene metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields, default)]
pub struct SceneMeta {
    /// Scene name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

/// Reproducibility settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ReproducibilityConfig {
    /// Seed for generated geometry (the asteroid belt).
    pub seed: u64,
}

impl Default for ReproducibilityConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The central, non-orbiting body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SunConfig {
    /// Render radius.
    pub size: f64,
    /// Palette color name.
    pub color: String,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            size: 3.5,
            color: "yellow".to_string(),
        }
    }
}

/// One planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    /// Body name.
    #[validate(length(min = 1))]
    pub name: String,

    /// Palette color name.
    #[serde(default = "default_color")]
    pub color: String,

    /// Render radius. Must be positive.
    pub size: f64,

    /// Orbit radius from the sun. Must be non-negative.
    pub distance: f64,

    /// Self-spin angular velocity, radians per simulated second.
    #[serde(default)]
    pub rotation_speed: f64,

    /// Orbit angular velocity, radians per simulated second.
    pub orbit_speed: f64,

    /// Capability flag: surface clicks on this body resolve to
    /// geographic coordinates instead of the static descriptor.
    /// At most one body per scene may carry it.
    #[serde(default)]
    pub home: bool,

    /// Optional ring.
    #[serde(default)]
    pub ring: Option<RingConfig>,

    /// Moons orbiting this planet.
    #[serde(default)]
    #[validate(nested)]
    pub moons: Vec<MoonConfig>,
}

/// One moon. Moons do not self-rotate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MoonConfig {
    /// Moon name.
    #[validate(length(min = 1))]
    pub name: String,

    /// Palette color name.
    #[serde(default = "default_color")]
    pub color: String,

    /// Render radius. Must be positive.
    pub size: f64,

    /// Orbit radius from the parent planet. Must be non-negative.
    pub distance: f64,

    /// Orbit angular velocity, radians per simulated second.
    pub orbit_speed: f64,

    /// Rate multiplier applied on top of the global time scale, so
    /// moons animate faster than their parent. Must be positive.
    #[serde(default = "default_clock_rate")]
    pub clock_rate: f64,
}

/// Planet ring parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RingConfig {
    /// Inner ring radius, in the planet's frame.
    pub inner_radius: f64,
    /// Outer ring radius, in the planet's frame.
    pub outer_radius: f64,
    /// Palette color name.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "white".to_string()
}

fn default_clock_rate() -> f64 {
    5.0
}

impl SceneConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> OrreryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> OrreryResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Validate semantic constraints beyond the schema.
    fn validate_semantic(&self) -> OrreryResult<()> {
        if self.sun.size <= 0.0 {
            return Err(OrreryError::config("sun: size must be positive"));
        }

        let mut home_count = 0usize;
        for body in &self.bodies {
            let name = &body.name;

            if body.size <= 0.0 {
                return Err(OrreryError::config(format!(
                    "body '{name}': size must be positive"
                )));
            }
            if body.distance < 0.0 {
                return Err(OrreryError::config(format!(
                    "body '{name}': distance must be non-negative"
                )));
            }
            if body.home {
                home_count += 1;
            }

            if let Some(ring) = &body.ring {
                if ring.inner_radius <= 0.0 || ring.inner_radius >= ring.outer_radius {
                    return Err(OrreryError::config(format!(
                        "body '{name}': ring radii must satisfy 0 < inner < outer"
                    )));
                }
            }

            for moon in &body.moons {
                let moon_name = &moon.name;
                if moon.size <= 0.0 {
                    return Err(OrreryError::config(format!(
                        "moon '{moon_name}': size must be positive"
                    )));
                }
                if moon.distance < 0.0 {
                    return Err(OrreryError::config(format!(
                        "moon '{moon_name}': distance must be non-negative"
                    )));
                }
                if !moon.clock_rate.is_finite() || moon.clock_rate <= 0.0 {
                    return Err(OrreryError::config(format!(
                        "moon '{moon_name}': clock_rate must be positive"
                    )));
                }
            }
        }

        if home_count > 1 {
            return Err(OrreryError::config(format!(
                "at most one home body allowed, found {home_count}"
            )));
        }

        if self.belt.inner_radius < 0.0 || self.belt.inner_radius >= self.belt.outer_radius {
            return Err(OrreryError::config(
                "belt radii must satisfy 0 <= inner < outer",
            ));
        }

        Ok(())
    }

    /// The built-in solar-system scene.
    #[must_use]
    pub fn solar_system() -> Self {
        Self {
            schema_version: default_schema_version(),
            scene: SceneMeta {
                name: "Solar System".to_string(),
                description: "Sun, eight planets, moons, rings, and the asteroid belt"
                    .to_string(),
            },
            reproducibility: ReproducibilityConfig::default(),
            time_scale: TimeScale::Normal,
            sun: SunConfig::default(),
            bodies: vec![
                planet("Mercury", "gray", 0.4, 8.0, 0.2, 0.4),
                planet("Venus", "orange", 0.6, 12.0, 0.1, 0.25),
                BodyConfig {
                    home: true,
                    moons: vec![moon("Moon", "lightgray", 0.15, 1.2, 2.0)],
                    ..planet("Earth", "royalblue", 0.65, 17.0, 0.5, 0.2)
                },
                planet("Mars", "orangered", 0.5, 24.0, 0.4, 0.15),
                BodyConfig {
                    moons: vec![
                        moon("Io", "yellow", 0.2, 2.8, 1.8),
                        moon("Europa", "lightyellow", 0.18, 3.5, 1.4),
                        moon("Ganymede", "tan", 0.25, 4.2, 1.0),
                        moon("Callisto", "gray", 0.22, 5.0, 0.8),
                    ],
                    ..planet("Jupiter", "sandybrown", 2.0, 40.0, 0.2, 0.08)
                },
                BodyConfig {
                    ring: Some(RingConfig {
                        inner_radius: 2.2,
                        outer_radius: 3.5,
                        color: "tan".to_string(),
                    }),
                    ..planet("Saturn", "khaki", 1.8, 60.0, 0.15, 0.06)
                },
                planet("Uranus", "lightblue", 1.2, 75.0, 0.1, 0.04),
                planet("Neptune", "blue", 1.1, 90.0, 0.1, 0.03),
            ],
            belt: BeltConfig::default(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::solar_system()
    }
}

fn planet(
    name: &str,
    color: &str,
    size: f64,
    distance: f64,
    rotation_speed: f64,
    orbit_speed: f64,
) -> BodyConfig {
    BodyConfig {
        name: name.to_string(),
        color: color.to_string(),
        size,
        distance,
        rotation_speed,
        orbit_speed,
        home: false,
        ring: None,
        moons: Vec::new(),
    }
}

fn moon(name: &str, color: &str, size: f64, distance: f64, orbit_speed: f64) -> MoonConfig {
    MoonConfig {
        name: name.to_string(),
        color: color.to_string(),
        size,
        distance,
        orbit_speed,
        clock_rate: default_clock_rate(),
    }
}
