//! Common types: shot results, sides, phases and the game error type.

use core::fmt;

use crate::core::cell::Cell;
use crate::core::placement::PlacementError;

/// Hit or miss, as reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    Hit,
    Miss,
}

/// Result of a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot missed all ships.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit { ship_id: usize },
    /// Shot sank the ship.
    Sink { ship_id: usize, length: usize },
}

impl ShotResult {
    pub fn outcome(&self) -> ShotOutcome {
        match self {
            ShotResult::Miss => ShotOutcome::Miss,
            ShotResult::Hit { .. } | ShotResult::Sink { .. } => ShotOutcome::Hit,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.outcome() == ShotOutcome::Hit
    }
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    /// The human at the host.
    Player,
    /// The scripted opponent.
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Phase {
    Setup,
    Placing,
    Ready,
    PlayerTurn,
    EnemyTurn,
    GameOver,
}

/// Why a shot request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotRejection {
    /// The cell was fired at before.
    AlreadyShot(Cell),
    /// Shots are only accepted on the player's turn.
    WrongPhase(Phase),
}

/// Errors returned by session operations. None of them leave the session
/// changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Placement leaves the board, overlaps, or has the wrong length.
    InvalidPlacement(PlacementError),
    /// Shot at an already-shot cell or outside the player's turn.
    IllegalShot(ShotRejection),
    /// Session operation called in a phase that does not allow it.
    IllegalAction { action: &'static str, phase: Phase },
    /// Session could not be started.
    InvalidSession(&'static str),
    /// Index outside the board.
    InvalidCell(usize),
    /// Random fleet generation ran out of attempts.
    ExhaustedRandomPlacement { length: usize },
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl From<ShotRejection> for GameError {
    fn from(err: ShotRejection) -> Self {
        GameError::IllegalShot(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidPlacement(e) => write!(f, "invalid placement: {}", e),
            GameError::IllegalShot(ShotRejection::AlreadyShot(cell)) => {
                write!(f, "{} was already fired upon", cell)
            }
            GameError::IllegalShot(ShotRejection::WrongPhase(phase)) => {
                write!(f, "cannot fire during {:?}", phase)
            }
            GameError::IllegalAction { action, phase } => {
                write!(f, "cannot {} during {:?}", action, phase)
            }
            GameError::InvalidSession(reason) => write!(f, "cannot start session: {}", reason),
            GameError::InvalidCell(idx) => write!(f, "cell {} is off the board", idx),
            GameError::ExhaustedRandomPlacement { length } => {
                write!(f, "unable to place ship of length {} at random", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
