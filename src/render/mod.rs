//! Platform-agnostic rendering of the scene.
//!
//! Command pattern: [`render_scene`] flattens the current scene state
//! into draw commands a front end (TUI canvas, WASM host) replays. The
//! projection is top-down: world X maps to screen x, world Z to screen y.

use serde::{Deserialize, Serialize};

use crate::scene::SolarSystem;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const ORANGE: Self = Self::rgb(255, 165, 0);
    pub const ROYAL_BLUE: Self = Self::rgb(65, 105, 225);
    pub const ORANGE_RED: Self = Self::rgb(255, 69, 0);
    pub const SANDY_BROWN: Self = Self::rgb(244, 164, 96);
    pub const KHAKI: Self = Self::rgb(240, 230, 140);
    pub const LIGHT_BLUE: Self = Self::rgb(173, 216, 230);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const LIGHT_GRAY: Self = Self::rgb(211, 211, 211);
    pub const LIGHT_YELLOW: Self = Self::rgb(255, 255, 224);
    pub const TAN: Self = Self::rgb(210, 180, 140);

    /// Orbit guide lines.
    pub const ORBIT_LINE: Self = Self::rgb(0x33, 0x33, 0x33);
    /// Asteroid-belt particles.
    pub const BELT: Self = Self::rgb(0x5c, 0x5c, 0x5c);

    /// Resolve a palette color name (the scene configs use CSS names).
    /// Unknown names fall back to white.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gray" | "grey" => Self::GRAY,
            "orange" => Self::ORANGE,
            "royalblue" => Self::ROYAL_BLUE,
            "orangered" => Self::ORANGE_RED,
            "sandybrown" => Self::SANDY_BROWN,
            "khaki" => Self::KHAKI,
            "lightblue" => Self::LIGHT_BLUE,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "lightgray" | "lightgrey" => Self::LIGHT_GRAY,
            "lightyellow" => Self::LIGHT_YELLOW,
            "tan" => Self::TAN,
            "black" => Self::BLACK,
            _ => Self::WHITE,
        }
    }
}

/// Platform-agnostic render command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Clear the screen.
    Clear { color: Color },

    /// Set the camera view.
    SetCamera {
        center_x: f64,
        center_y: f64,
        extent: f64,
    },

    /// Orbit guide line (closed circle, pre-sampled).
    OrbitPath { points: Vec<(f64, f64)>, color: Color },

    /// A filled body disc.
    Disc {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },

    /// A planet ring (annulus around a body).
    Ring {
        x: f64,
        y: f64,
        inner_radius: f64,
        outer_radius: f64,
        color: Color,
    },

    /// A point cloud (asteroid belt).
    Points { points: Vec<(f64, f64)>, color: Color },

    /// A text label.
    Label {
        x: f64,
        y: f64,
        text: String,
        color: Color,
    },
}

/// Camera: a centered square view of the XZ plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// View center, world X.
    pub center_x: f64,
    /// View center, world Z.
    pub center_y: f64,
    /// Half-width of the view in world units.
    pub extent: f64,
}

impl Default for Camera {
    fn default() -> Self {
        // Neptune orbits at 90; leave a margin for labels.
        Self {
            center_x: 0.0,
            center_y: 0.0,
            extent: 100.0,
        }
    }
}

impl Camera {
    /// View bounds as `((x_min, x_max), (y_min, y_max))`.
    #[must_use]
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        (
            (self.center_x - self.extent, self.center_x + self.extent),
            (self.center_y - self.extent, self.center_y + self.extent),
        )
    }

    /// Convert world coordinates to screen coordinates for a pixel host.
    #[must_use]
    pub fn world_to_screen(&self, width: f64, height: f64, x: f64, y: f64) -> (f64, f64) {
        let scale = width.min(height) / (2.0 * self.extent);
        let sx = (x - self.center_x) * scale + width / 2.0;
        let sy = (y - self.center_y) * scale + height / 2.0;
        (sx, sy)
    }

    /// Scale the view extent; factors below one zoom in.
    pub fn zoom(&mut self, factor: f64) {
        self.extent = (self.extent * factor).clamp(1.0, 1000.0);
    }
}

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Camera view.
    pub camera: Camera,
    /// Draw orbit guide lines.
    pub show_orbits: bool,
    /// Draw body name labels.
    pub show_labels: bool,
    /// Draw the asteroid belt.
    pub show_belt: bool,
    /// Samples per orbit guide circle.
    pub orbit_segments: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            show_orbits: true,
            show_labels: true,
            show_belt: true,
            orbit_segments: 128,
        }
    }
}

/// Sample a circular orbit guide of the given radius, closed.
#[must_use]
pub fn orbit_path(distance: f64, segments: usize) -> Vec<(f64, f64)> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let phase = std::f64::consts::TAU * (i as f64) / (segments as f64);
            (phase.sin() * distance, phase.cos() * distance)
        })
        .collect()
}

/// Generate render commands for the current scene state.
#[must_use]
pub fn render_scene(system: &SolarSystem, config: &RenderConfig) -> Vec<RenderCommand> {
    let mut commands = Vec::new();

    commands.push(RenderCommand::Clear {
        color: Color::BLACK,
    });
    commands.push(RenderCommand::SetCamera {
        center_x: config.camera.center_x,
        center_y: config.camera.center_y,
        extent: config.camera.extent,
    });

    if config.show_orbits {
        for planet in &system.planets {
            commands.push(RenderCommand::OrbitPath {
                points: orbit_path(planet.spec.distance, config.orbit_segments),
                color: Color::ORBIT_LINE,
            });
        }
    }

    if config.show_belt {
        let points = system
            .belt
            .asteroids
            .iter()
            .map(|a| (a.position.x, a.position.z))
            .collect();
        commands.push(RenderCommand::Points {
            points,
            color: Color::BELT,
        });
    }

    let sun = system.sun();
    commands.push(RenderCommand::Disc {
        x: 0.0,
        y: 0.0,
        radius: sun.size,
        color: Color::from_name(&sun.color),
    });

    for planet in &system.planets {
        let (x, y) = (planet.position.x, planet.position.z);

        commands.push(RenderCommand::Disc {
            x,
            y,
            radius: planet.spec.size,
            color: Color::from_name(&planet.spec.color),
        });

        if let Some(ring) = &planet.spec.ring {
            commands.push(RenderCommand::Ring {
                x,
                y,
                inner_radius: ring.inner_radius,
                outer_radius: ring.outer_radius,
                color: Color::from_name(&ring.color),
            });
        }

        for moon in &planet.moons {
            let world = planet.moon_world_position(moon);
            commands.push(RenderCommand::Disc {
                x: world.x,
                y: world.z,
                radius: moon.spec.size,
                color: Color::from_name(&moon.spec.color),
            });
        }

        if config.show_labels {
            commands.push(RenderCommand::Label {
                x,
                y: y + planet.spec.size + 1.0,
                text: planet.spec.name.clone(),
                color: Color::WHITE,
            });
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_name_palette() {
        assert_eq!(Color::from_name("royalblue"), Color::ROYAL_BLUE);
        assert_eq!(Color::from_name("TAN"), Color::TAN);
        assert_eq!(Color::from_name("plaid"), Color::WHITE);
    }

    #[test]
    fn test_orbit_path_closed_circle() {
        let path = orbit_path(17.0, 128);
        assert_eq!(path.len(), 129);

        let (first, last) = (path[0], path[path.len() - 1]);
        assert!((first.0 - last.0).abs() < 1e-9);
        assert!((first.1 - last.1).abs() < 1e-9);

        for (x, y) in &path {
            let r = (x * x + y * y).sqrt();
            assert!((r - 17.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_orbit_path_minimum_segments() {
        let path = orbit_path(1.0, 0);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_camera_bounds() {
        let camera = Camera::default();
        let ((x_min, x_max), (y_min, y_max)) = camera.bounds();
        assert!((x_min + 100.0).abs() < f64::EPSILON);
        assert!((x_max - 100.0).abs() < f64::EPSILON);
        assert!((y_min + 100.0).abs() < f64::EPSILON);
        assert!((y_max - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_camera_world_to_screen_center() {
        let camera = Camera::default();
        let (sx, sy) = camera.world_to_screen(800.0, 600.0, 0.0, 0.0);
        assert!((sx - 400.0).abs() < 1e-9);
        assert!((sy - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_camera_zoom_clamped() {
        let mut camera = Camera::default();
        camera.zoom(1e-9);
        assert!((camera.extent - 1.0).abs() < f64::EPSILON);
        camera.zoom(1e9);
        assert!((camera.extent - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_render_scene_command_counts() {
        let system = SolarSystem::solar_system();
        let config = RenderConfig::default();
        let commands = render_scene(&system, &config);

        let orbits = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::OrbitPath { .. }))
            .count();
        assert_eq!(orbits, 8);

        // Sun + 8 planets + 5 moons.
        let discs = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Disc { .. }))
            .count();
        assert_eq!(discs, 14);

        let rings = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Ring { .. }))
            .count();
        assert_eq!(rings, 1);

        let labels = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Label { .. }))
            .count();
        assert_eq!(labels, 8);
    }

    #[test]
    fn test_render_scene_belt_points() {
        let system = SolarSystem::solar_system();
        let commands = render_scene(&system, &RenderConfig::default());

        let belt = commands.iter().find_map(|c| match c {
            RenderCommand::Points { points, .. } => Some(points.len()),
            _ => None,
        });
        assert_eq!(belt, Some(2000));
    }

    #[test]
    fn test_render_scene_toggles() {
        let system = SolarSystem::solar_system();
        let config = RenderConfig {
            show_orbits: false,
            show_labels: false,
            show_belt: false,
            ..RenderConfig::default()
        };
        let commands = render_scene(&system, &config);

        assert!(!commands
            .iter()
            .any(|c| matches!(c, RenderCommand::OrbitPath { .. })));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, RenderCommand::Points { .. })));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, RenderCommand::Label { .. })));
    }

    #[test]
    fn test_render_scene_starts_with_clear_and_camera() {
        let system = SolarSystem::solar_system();
        let commands = render_scene(&system, &RenderConfig::default());

        assert!(matches!(commands[0], RenderCommand::Clear { .. }));
        assert!(matches!(commands[1], RenderCommand::SetCamera { .. }));
    }
}
