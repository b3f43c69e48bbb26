//! Terminal front end.
//!
//! App state and input logic live here so they are testable; terminal
//! I/O is handled by the `orrery-tui` binary.

pub mod app;

pub use app::OrreryApp;
