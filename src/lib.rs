//! Grid Snake - a single-player snake game for the terminal
//!
//! This library provides:
//! - Core game rules with no I/O (game module)
//! - A single replaceable periodic timer (schedule module)
//! - Key mapping (input module) and TUI rendering (render module)
//! - The interactive terminal session (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod schedule;
