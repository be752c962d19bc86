//! Timing for the game loop

pub mod ticker;

pub use ticker::Ticker;
