//! Opponent targeting: difficulty tiers and hunt memory.
//!
//! Easy fires at random. Medium and hard remember hits and work through the
//! neighbours of each hit before going back to random fire; hard also locks
//! onto the ship's axis once two adjacent hits line up. Impossible reads the
//! target fleet directly.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::{fmt, str::FromStr};
use log::{debug, trace};
use rand::Rng;

use crate::core::bitboard::CellSet;
use crate::core::cell::Cell;
use crate::core::common::{GameError, ShotResult};
use crate::core::config::CELL_COUNT;
use crate::core::fleet::Fleet;

/// Opponent difficulty tier, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    /// Whether this tier keeps hunt memory between turns.
    pub fn hunts(self) -> bool {
        matches!(self, Difficulty::Medium | Difficulty::Hard)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Impossible => "impossible",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or(GameError::InvalidSession("unknown difficulty"))
    }
}

/// Short-term memory of promising cells after a hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntMemory {
    queue: VecDeque<Cell>,
    hits: Vec<Cell>,
}

impl HuntMemory {
    /// Candidates still to try, front first.
    pub fn queue(&self) -> &VecDeque<Cell> {
        &self.queue
    }

    /// Hits on ships that have not been confirmed sunk.
    pub fn hits(&self) -> &[Cell] {
        &self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty() && self.hits.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.hits.clear();
    }
}

/// The opponent's shot selector.
#[derive(Debug, Clone, Default)]
pub struct Targeting {
    difficulty: Difficulty,
    memory: HuntMemory,
}

impl Targeting {
    pub fn new(difficulty: Difficulty) -> Self {
        Targeting { difficulty, memory: HuntMemory::default() }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn memory(&self) -> &HuntMemory {
        &self.memory
    }

    /// Choose the next cell to fire at. Never returns a cell in `shots`;
    /// returns `None` only when every cell has been fired upon.
    pub fn pick_shot<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        shots: &CellSet,
        target: &Fleet,
    ) -> Option<Cell> {
        if self.difficulty == Difficulty::Impossible {
            if let Some(cell) = target.first_live_cell().filter(|c| !shots.contains(*c)) {
                trace!("impossible tier targets {}", cell);
                return Some(cell);
            }
        }

        if self.difficulty.hunts() {
            while let Some(cell) = self.memory.queue.pop_front() {
                if !shots.contains(cell) {
                    trace!("hunting at {}", cell);
                    return Some(cell);
                }
            }
        }

        if shots.count() >= CELL_COUNT {
            return None;
        }
        loop {
            let cell = Cell::new(rng.random_range(0..CELL_COUNT)).ok()?;
            if !shots.contains(cell) {
                return Some(cell);
            }
        }
    }

    /// Feed back the result of a shot. Only hits at hunting tiers change the
    /// memory.
    pub fn observe(&mut self, cell: Cell, result: ShotResult, shots: &CellSet) {
        if self.difficulty.hunts() && result.is_hit() {
            self.record_hit(cell, shots);
        }
    }

    /// Queue the untried neighbours of `cell` and remember the hit. At hard
    /// tier, a hit right of or below the previous one restricts the queue to
    /// that axis around the new hit.
    pub fn record_hit(&mut self, cell: Cell, shots: &CellSet) {
        let queue = &mut self.memory.queue;
        for n in cell.neighbors() {
            if !shots.contains(n) && !queue.contains(&n) {
                queue.push_back(n);
            }
        }
        self.memory.hits.push(cell);

        if self.difficulty != Difficulty::Hard {
            return;
        }
        if let [.., prev, last] = self.memory.hits[..] {
            if last.is_right_of(prev) {
                queue.retain(|c| c.is_horizontal_neighbor(last));
                debug!("direction lock: horizontal around {}", last);
            } else if last.is_below(prev) {
                queue.retain(|c| c.is_vertical_neighbor(last));
                debug!("direction lock: vertical around {}", last);
            }
        }
    }

    /// Forget the hunt once every ship it was chasing has sunk.
    pub fn settle(&mut self, target: &Fleet) {
        if self.memory.hits.is_empty() {
            return;
        }
        if !self.memory.hits.iter().any(|&h| target.live_ship_occupies(h)) {
            debug!("hunt complete, clearing {} queued cells", self.memory.queue.len());
            self.memory.clear();
        }
    }
}
