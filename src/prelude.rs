//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    Cell, Difficulty, EventLog, GameError, GameEvent, GameObserver, GameSession, GameStats,
    Orientation, Phase, ShotOutcome, ShotResult, Side, SHIP_LENGTHS,
};

#[cfg(feature = "std")]
pub use crate::cli::{print_player_view, ConsoleObserver};
