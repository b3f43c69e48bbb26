//! CLI argument parsing and headless commands.
//!
//! The parser accepts any iterator of strings so it is testable without
//! touching `std::env`.

use std::path::PathBuf;

use crate::config::SceneConfig;
use crate::engine::TimeScale;
use crate::error::OrreryResult;
use crate::scene::SolarSystem;

/// Default number of headless frames (ten seconds at 60 fps).
const DEFAULT_FRAMES: u64 = 600;

/// Default frame delta in seconds.
const DEFAULT_DT: f64 = 1.0 / 60.0;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a headless simulation and print a summary.
    Run {
        /// Scene file; the built-in scene when absent.
        scene_path: Option<PathBuf>,
        /// Number of frames to advance.
        frames: u64,
        /// Frame delta in seconds.
        dt_secs: f64,
        /// Global time scale.
        scale: TimeScale,
    },
    /// Validate a scene file.
    Validate {
        /// Path to the scene YAML file.
        scene_path: PathBuf,
    },
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "validate" => Self::parse_validate_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    fn parse_run_command(args: &[String]) -> Command {
        let mut scene_path = None;
        let mut frames = DEFAULT_FRAMES;
        let mut dt_secs = DEFAULT_DT;
        let mut scale = TimeScale::Normal;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--frames" => {
                    if i + 1 < args.len() {
                        if let Ok(n) = args[i + 1].parse() {
                            frames = n;
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--dt" => {
                    if i + 1 < args.len() {
                        if let Ok(dt) = args[i + 1].parse::<f64>() {
                            if dt > 0.0 && dt.is_finite() {
                                dt_secs = dt;
                            }
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--scale" => {
                    if i + 1 < args.len() {
                        if let Some(s) = TimeScale::from_name(&args[i + 1]) {
                            scale = s;
                        } else {
                            eprintln!("Unknown time scale: {}", args[i + 1]);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                path if scene_path.is_none() && !path.starts_with("--") => {
                    scene_path = Some(PathBuf::from(path));
                    i += 1;
                }
                unknown => {
                    eprintln!("Ignoring unknown argument: {unknown}");
                    i += 1;
                }
            }
        }

        Command::Run {
            scene_path,
            frames,
            dt_secs,
            scale,
        }
    }

    fn parse_validate_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'validate' command requires a scene path");
            return Command::Help;
        }
        Command::Validate {
            scene_path: PathBuf::from(&args[2]),
        }
    }
}

/// Execute a parsed command.
///
/// # Errors
///
/// Returns error if a scene file cannot be loaded or validated.
pub fn execute(args: &Args) -> OrreryResult<()> {
    match &args.command {
        Command::Run {
            scene_path,
            frames,
            dt_secs,
            scale,
        } => {
            let config = match scene_path {
                Some(path) => SceneConfig::load(path)?,
                None => SceneConfig::solar_system(),
            };
            let system = run_headless(config, *frames, *dt_secs, *scale);
            print_summary(&system);
            Ok(())
        }
        Command::Validate { scene_path } => {
            let config = SceneConfig::load(scene_path)?;
            println!(
                "OK: '{}' with {} bodies",
                config.scene.name,
                config.bodies.len()
            );
            Ok(())
        }
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            println!("orrery v{}", env!("ORRERY_VERSION"));
            Ok(())
        }
    }
}

/// Advance a scene for a fixed number of frames without a front end.
#[must_use]
pub fn run_headless(config: SceneConfig, frames: u64, dt_secs: f64, scale: TimeScale) -> SolarSystem {
    let mut system = SolarSystem::from_config(config);
    system.set_time_scale(scale);
    for _ in 0..frames {
        system.advance_frame(dt_secs);
    }
    system
}

fn print_summary(system: &SolarSystem) {
    println!(
        "{} frames at scale {}:",
        system.frame_count(),
        system.time_scale()
    );
    for planet in &system.planets {
        println!(
            "  {:<10} elapsed {:>9.3}s  position ({:>+8.3}, {:>+8.3})  spin {:>+8.3} rad",
            planet.spec.name,
            planet.elapsed().as_secs_f64(),
            planet.position.x,
            planet.position.z,
            planet.spin_angle,
        );
        for moon in &planet.moons {
            println!(
                "    {:<8} elapsed {:>9.3}s  offset   ({:>+8.3}, {:>+8.3})",
                moon.spec.name,
                moon.elapsed().as_secs_f64(),
                moon.position.x,
                moon.position.z,
            );
        }
    }
}

fn print_help() {
    println!("orrery - deterministic solar-system orrery");
    println!();
    println!("Usage:");
    println!("  orrery run [scene.yaml] [--frames N] [--dt SECS] [--scale pause|slow|normal|fast]");
    println!("  orrery validate <scene.yaml>");
    println!("  orrery help");
    println!("  orrery version");
}
