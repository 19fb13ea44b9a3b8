//! Core game engine (no_std compatible)
//!
//! Board model, placement validation, fleet generation, opponent targeting
//! and the turn/combat state machine. Only needs `alloc`, so it can be
//! embedded in any host: a terminal, a GUI or a web front end.

pub mod bitboard;
pub mod board;
pub mod cell;
pub mod common;
pub mod config;
pub mod events;
pub mod fleet;
pub mod game;
pub mod placement;
pub mod ship;
pub mod targeting;

// Re-export commonly used types
pub use bitboard::{BitBoard, CellSet};
pub use board::Board;
pub use cell::Cell;
pub use common::{GameError, Phase, ShotOutcome, ShotRejection, ShotResult, Side};
pub use config::*;
pub use events::{accuracy_percent, EventLog, GameEvent, GameObserver, GameStats, LogObserver, NullObserver};
pub use fleet::{generate_fleet, Fleet};
pub use game::GameSession;
pub use placement::{can_place, check_placement, Placement, PlacementError};
pub use ship::{Orientation, Ship};
pub use targeting::{Difficulty, HuntMemory, Targeting};
