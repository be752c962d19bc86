//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O, timing or
//! rendering dependencies. The terminal session drives it one tick at a time.

pub mod action;
pub mod config;
pub mod engine;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction, InputEvent, resolve};
pub use config::GameConfig;
pub use engine::{GameEngine, StepOutcome, TickOutcome};
pub use speed::TickInterval;
pub use state::{CollisionType, GameState, Position, Snake, format_score};
