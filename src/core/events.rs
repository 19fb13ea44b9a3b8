//! Events the session reports to its host, and the observer trait that
//! receives them.

use alloc::vec::Vec;
use log::{info, warn};

use crate::core::cell::Cell;
use crate::core::common::{GameError, ShotOutcome, Side};
use crate::core::targeting::Difficulty;

/// Final numbers for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameStats {
    pub difficulty: Difficulty,
    /// Completed enemy turns.
    pub turns: u32,
    /// Shots fired by the player.
    pub shots_fired: u32,
    /// Player shots that hit.
    pub hits: u32,
    pub accuracy_percent: u32,
}

/// Round `hits / shots` to a whole percentage; zero shots gives 0.
pub fn accuracy_percent(hits: u32, shots: u32) -> u32 {
    if shots == 0 {
        return 0;
    }
    libm::round(f64::from(hits) / f64::from(shots) * 100.0) as u32
}

/// Something the host may want to show, play or log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    SessionStarted { difficulty: Difficulty },
    ShipPlaced { ship_id: usize, cells: Vec<Cell> },
    /// All configured ships are placed; the battle can start.
    FleetReady,
    BattleStarted,
    /// `attacker` fired at `cell` on the other side's board.
    ShotResolved { attacker: Side, cell: Cell, outcome: ShotOutcome },
    /// A ship owned by `owner` went down.
    ShipSunk { owner: Side, ship_id: usize, length: usize },
    TurnChanged(Side),
    GameOver { winner: Side, stats: GameStats },
    /// A host request was ignored; the session is unchanged.
    ActionRejected(GameError),
}

/// Receives session events. Called synchronously, in order.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Records every event in arrival order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ActionRejected(err) => warn!("rejected: {}", err),
            GameEvent::GameOver { winner, stats } => info!("game over, {:?} wins: {:?}", winner, stats),
            other => info!("{:?}", other),
        }
    }
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}
