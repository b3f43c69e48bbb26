//! Asteroid-belt generation.
//!
//! Particles are placed once at scene build from the deterministic scene
//! RNG and are static afterwards (the belt does not orbit). Same config
//! and seed → bitwise-identical belt.

use serde::{Deserialize, Serialize};

use crate::engine::SceneRng;
use crate::scene::kinematics::Vec3;

/// Belt placement parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BeltConfig {
    /// Number of particles.
    pub count: usize,
    /// Inner annulus radius.
    pub inner_radius: f64,
    /// Outer annulus radius.
    pub outer_radius: f64,
    /// Vertical half-thickness of the belt.
    pub thickness: f64,
}

impl Default for BeltConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            inner_radius: 26.0,
            outer_radius: 38.0,
            thickness: 1.0,
        }
    }
}

/// One belt particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    /// Heliocentric position.
    pub position: Vec3,
    /// Render scale of the particle.
    pub scale: f64,
}

/// The generated belt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AsteroidBelt {
    /// Placed particles.
    pub asteroids: Vec<Asteroid>,
}

impl AsteroidBelt {
    /// Generate a belt from the scene RNG.
    #[must_use]
    pub fn generate(config: &BeltConfig, rng: &mut SceneRng) -> Self {
        let mut asteroids = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let angle = rng.gen_angle();
            let radius = rng.gen_range_f64(config.inner_radius, config.outer_radius);
            let x = angle.cos() * radius;
            let z = angle.sin() * radius;
            let y = (rng.gen_f64() - 0.5) * 2.0 * config.thickness;
            let scale = rng.gen_f64() * 0.1 + 0.05;
            asteroids.push(Asteroid {
                position: Vec3::new(x, y, z),
                scale,
            });
        }
        Self { asteroids }
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    /// Whether the belt has no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belt_count() {
        let mut rng = SceneRng::new(42);
        let belt = AsteroidBelt::generate(&BeltConfig::default(), &mut rng);
        assert_eq!(belt.len(), 2000);
        assert!(!belt.is_empty());
    }

    #[test]
    fn test_belt_within_annulus() {
        let config = BeltConfig::default();
        let mut rng = SceneRng::new(42);
        let belt = AsteroidBelt::generate(&config, &mut rng);

        for asteroid in &belt.asteroids {
            let p = asteroid.position;
            let radius = (p.x * p.x + p.z * p.z).sqrt();
            assert!(radius >= config.inner_radius - 1e-9);
            assert!(radius < config.outer_radius + 1e-9);
        }
    }

    #[test]
    fn test_belt_thickness_bound() {
        let config = BeltConfig::default();
        let mut rng = SceneRng::new(42);
        let belt = AsteroidBelt::generate(&config, &mut rng);

        for asteroid in &belt.asteroids {
            assert!(asteroid.position.y.abs() <= config.thickness);
        }
    }

    #[test]
    fn test_belt_particle_scale_range() {
        let mut rng = SceneRng::new(42);
        let belt = AsteroidBelt::generate(&BeltConfig::default(), &mut rng);

        for asteroid in &belt.asteroids {
            assert!((0.05..0.15).contains(&asteroid.scale));
        }
    }

    #[test]
    fn test_belt_deterministic_for_seed() {
        let config = BeltConfig::default();

        let mut rng1 = SceneRng::new(7);
        let mut rng2 = SceneRng::new(7);
        let a = AsteroidBelt::generate(&config, &mut rng1);
        let b = AsteroidBelt::generate(&config, &mut rng2);

        assert_eq!(a, b);
    }

    #[test]
    fn test_belt_seeds_differ() {
        let config = BeltConfig::default();

        let mut rng1 = SceneRng::new(7);
        let mut rng2 = SceneRng::new(8);
        let a = AsteroidBelt::generate(&config, &mut rng1);
        let b = AsteroidBelt::generate(&config, &mut rng2);

        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_belt() {
        let config = BeltConfig {
            count: 0,
            ..BeltConfig::default()
        };
        let mut rng = SceneRng::new(42);
        let belt = AsteroidBelt::generate(&config, &mut rng);
        assert!(belt.is_empty());
    }
}
