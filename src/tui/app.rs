//! Orrery TUI application state and logic.
//!
//! The app owns the scene, the body selection, the info panel, and a
//! surface probe: a steerable point on the home body's sphere standing
//! in for the browser's raycast click. Inspecting the home body routes
//! the probe point through the geo mapper; every other body surfaces
//! its static descriptor.

use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;

use crate::config::SceneConfig;
use crate::engine::TimeScale;
use crate::error::OrreryResult;
use crate::render::RenderConfig;
use crate::scene::kinematics::Vec3;
use crate::scene::{PanelData, SolarSystem};

/// Embedded default scene.
const DEFAULT_SCENE_YAML: &str = include_str!("../../scenes/solar_system.yaml");

/// Probe step per key press, radians.
const PROBE_STEP: f64 = 0.1;

/// Application state for the orrery TUI.
pub struct OrreryApp {
    /// The animated scene.
    pub system: SolarSystem,
    /// Renderer configuration (camera, toggles).
    pub render: RenderConfig,
    /// Index of the selected planet.
    pub selected: usize,
    /// Open info panel, if any.
    pub panel: Option<PanelData>,
    /// Surface probe polar angle from +Y, radians, [0, π].
    probe_polar: f64,
    /// Surface probe azimuth around +Y, radians.
    probe_azimuth: f64,
    /// Scale to restore when unpausing with the space key.
    resume_scale: TimeScale,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl OrreryApp {
    /// Create the app with the embedded default scene.
    #[must_use]
    pub fn new() -> Self {
        // Embedded YAML first; the built-in scene is the fallback.
        Self::from_yaml(DEFAULT_SCENE_YAML)
            .unwrap_or_else(|_| Self::from_config(SceneConfig::solar_system()))
    }

    /// Create the app from a YAML scene string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> OrreryResult<Self> {
        Ok(Self::from_config(SceneConfig::from_yaml(yaml)?))
    }

    /// Create the app from a scene configuration.
    #[must_use]
    pub fn from_config(config: SceneConfig) -> Self {
        Self {
            system: SolarSystem::from_config(config),
            render: RenderConfig::default(),
            selected: 0,
            panel: None,
            probe_polar: std::f64::consts::FRAC_PI_2,
            probe_azimuth: 0.0,
            resume_scale: TimeScale::Normal,
            should_quit: false,
        }
    }

    /// Advance the scene for one frame.
    pub fn update(&mut self, dt_secs: f64) {
        self.system.advance_frame(dt_secs);
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('1') => self.system.set_time_scale(TimeScale::Pause),
            KeyCode::Char('2') => self.system.set_time_scale(TimeScale::Slow),
            KeyCode::Char('3') => self.system.set_time_scale(TimeScale::Normal),
            KeyCode::Char('4') => self.system.set_time_scale(TimeScale::Fast),
            KeyCode::Tab => self.select_next(),
            KeyCode::BackTab => self.select_prev(),
            KeyCode::Enter => self.open_panel(Utc::now()),
            KeyCode::Char('c') => self.panel = None,
            KeyCode::Char('r') => self.system.reset(),
            KeyCode::Char('+' | '=') => self.render.camera.zoom(0.8),
            KeyCode::Char('-') => self.render.camera.zoom(1.25),
            KeyCode::Left => self.probe_azimuth -= PROBE_STEP,
            KeyCode::Right => self.probe_azimuth += PROBE_STEP,
            KeyCode::Up => {
                self.probe_polar = (self.probe_polar - PROBE_STEP).max(0.0);
            }
            KeyCode::Down => {
                self.probe_polar = (self.probe_polar + PROBE_STEP).min(std::f64::consts::PI);
            }
            _ => {}
        }
    }

    /// Toggle between pause and the last running scale.
    fn toggle_pause(&mut self) {
        if self.system.time_scale() == TimeScale::Pause {
            self.system.set_time_scale(self.resume_scale);
        } else {
            self.resume_scale = self.system.time_scale();
            self.system.set_time_scale(TimeScale::Pause);
        }
    }

    fn select_next(&mut self) {
        let count = self.system.planets.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    fn select_prev(&mut self) {
        let count = self.system.planets.len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Open the info panel for the selected body.
    ///
    /// The probe point is routed only when the selection is the home
    /// body; other bodies surface their static descriptor.
    pub fn open_panel(&mut self, now: DateTime<Utc>) {
        let point = if self.home_selected() {
            Some(self.probe_point())
        } else {
            None
        };
        self.panel = self.system.select(self.selected, point, now);
    }

    /// Whether the current selection is the home body.
    #[must_use]
    pub fn home_selected(&self) -> bool {
        self.system.home_index() == Some(self.selected)
    }

    /// The surface probe as a unit point on the selected sphere.
    #[must_use]
    pub fn probe_point(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.probe_polar.sin_cos();
        let (sin_az, cos_az) = self.probe_azimuth.sin_cos();
        Vec3::new(sin_polar * sin_az, cos_polar, sin_polar * cos_az)
    }

    /// Name of the selected body.
    #[must_use]
    pub fn selected_name(&self) -> &str {
        self.system
            .planets
            .get(self.selected)
            .map_or("", |p| p.spec.name.as_str())
    }
}

impl Default for OrreryApp {
    fn default() -> Self {
        Self::new()
    }
}
