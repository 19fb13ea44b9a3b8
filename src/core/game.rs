//! Turn and combat resolution.
//!
//! [`GameSession`] owns both boards, the opponent's targeting state and the
//! counters used for end-of-game stats. The host drives it with explicit
//! calls and hears back through a [`GameObserver`]:
//!
//! ```text
//! Setup --start_session--> Placing --(all ships placed)--> Ready
//! Ready --start_battle--> PlayerTurn --request_player_shot--> EnemyTurn
//! EnemyTurn --resolve_enemy_turn--> PlayerTurn
//! PlayerTurn/EnemyTurn --(a fleet sinks)--> GameOver
//! ```
//!
//! Every rejected call returns an error and leaves the session untouched.

use alloc::string::{String, ToString};
use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::core::board::Board;
use crate::core::cell::Cell;
use crate::core::common::{GameError, Phase, ShotRejection, ShotResult, Side};
use crate::core::config::SHIP_LENGTHS;
use crate::core::events::{accuracy_percent, GameEvent, GameObserver, GameStats, NullObserver};
use crate::core::fleet::{generate_fleet, Fleet};
use crate::core::placement::PlacementError;
use crate::core::ship::{Orientation, Ship};
use crate::core::targeting::{Difficulty, HuntMemory, Targeting};

/// A single game against the scripted opponent.
pub struct GameSession<O: GameObserver = NullObserver> {
    phase: Phase,
    username: String,
    player: Board,
    enemy: Board,
    targeting: Targeting,
    turns: u32,
    shots_fired: u32,
    hits: u32,
    rng: SmallRng,
    observer: O,
}

impl GameSession<NullObserver> {
    /// Session with no observer attached.
    pub fn new(rng: SmallRng) -> Self {
        Self::with_observer(rng, NullObserver)
    }
}

impl<O: GameObserver> GameSession<O> {
    /// Session reporting to `observer`. Starts in [`Phase::Setup`].
    pub fn with_observer(rng: SmallRng, observer: O) -> Self {
        GameSession {
            phase: Phase::Setup,
            username: String::new(),
            player: Board::new(),
            enemy: Board::new(),
            targeting: Targeting::default(),
            turns: 0,
            shots_fired: 0,
            hits: 0,
            rng,
            observer,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn difficulty(&self) -> Difficulty {
        self.targeting.difficulty()
    }

    /// The human's fleet and the opponent's shots against it.
    pub fn player_board(&self) -> &Board {
        &self.player
    }

    /// The opponent's fleet and the human's shots against it.
    pub fn enemy_board(&self) -> &Board {
        &self.enemy
    }

    pub fn hunt_memory(&self) -> &HuntMemory {
        self.targeting.memory()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Length of the next ship to place, while placing.
    pub fn next_ship_length(&self) -> Option<usize> {
        if self.phase != Phase::Placing {
            return None;
        }
        SHIP_LENGTHS.get(self.player.fleet().ships().len()).copied()
    }

    /// Current numbers; final once the phase is [`Phase::GameOver`].
    pub fn stats(&self) -> GameStats {
        GameStats {
            difficulty: self.difficulty(),
            turns: self.turns,
            shots_fired: self.shots_fired,
            hits: self.hits,
            accuracy_percent: accuracy_percent(self.hits, self.shots_fired),
        }
    }

    /// The side whose fleet survived, once the game is over.
    pub fn winner(&self) -> Option<Side> {
        if self.phase != Phase::GameOver {
            None
        } else if self.enemy.all_sunk() {
            Some(Side::Player)
        } else {
            Some(Side::Enemy)
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.observer.notify(&event);
    }

    fn reject(&mut self, err: GameError) -> GameError {
        warn!("{}", err);
        self.emit(GameEvent::ActionRejected(err.clone()));
        err
    }

    fn expect_phase(&mut self, phase: Phase, action: &'static str) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.reject(GameError::IllegalAction { action, phase: self.phase }))
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Begin a new session, discarding any previous one.
    pub fn start_session(&mut self, username: &str, difficulty: Difficulty) -> Result<(), GameError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(self.reject(GameError::InvalidSession("username is required")));
        }
        self.username = username.to_string();
        self.player = Board::new();
        self.enemy = Board::new();
        self.targeting = Targeting::new(difficulty);
        self.turns = 0;
        self.shots_fired = 0;
        self.hits = 0;
        info!("session started for {} at {} difficulty", self.username, difficulty);
        self.set_phase(Phase::Placing);
        self.emit(GameEvent::SessionStarted { difficulty });
        Ok(())
    }

    /// Place the player's next ship. `length` must be the next configured
    /// length. Returns the ship id.
    pub fn request_placement(
        &mut self,
        start: Cell,
        length: usize,
        orientation: Orientation,
    ) -> Result<usize, GameError> {
        self.expect_phase(Phase::Placing, "place a ship")?;
        if self.next_ship_length() != Some(length) {
            return Err(self.reject(PlacementError::InvalidLength(length).into()));
        }
        match self.player.fleet_mut().place(start, length, orientation) {
            Ok(ship_id) => {
                self.after_placement(ship_id);
                Ok(ship_id)
            }
            Err(e) => Err(self.reject(e.into())),
        }
    }

    /// Place the next configured ship at `start`.
    pub fn place_next(&mut self, start: Cell, orientation: Orientation) -> Result<usize, GameError> {
        self.expect_phase(Phase::Placing, "place a ship")?;
        let length = self.next_ship_length().unwrap_or(0);
        self.request_placement(start, length, orientation)
    }

    /// Randomly place every ship the player has not placed yet.
    pub fn auto_place(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Placing, "place a ship")?;
        while let Some(length) = self.next_ship_length() {
            let ship_id = match self.player.fleet_mut().place_random(&mut self.rng, length) {
                Ok(id) => id,
                Err(e) => return Err(self.reject(e)),
            };
            self.after_placement(ship_id);
        }
        Ok(())
    }

    fn after_placement(&mut self, ship_id: usize) {
        let cells = self.player.fleet().ships()[ship_id].cells().to_vec();
        self.emit(GameEvent::ShipPlaced { ship_id, cells });
        if self.player.fleet().ships().len() == SHIP_LENGTHS.len() {
            self.set_phase(Phase::Ready);
            self.emit(GameEvent::FleetReady);
        }
    }

    /// Generate the opponent fleet and hand the first turn to the player.
    pub fn start_battle(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Ready, "start the battle")?;
        let fleet = match generate_fleet(&mut self.rng, &SHIP_LENGTHS) {
            Ok(fleet) => fleet,
            Err(e) => return Err(self.reject(e)),
        };
        self.begin(fleet);
        Ok(())
    }

    /// Start the battle against a known opponent fleet. The fleet must match
    /// the configured ship lengths.
    pub fn start_battle_with_fleet(&mut self, fleet: Fleet) -> Result<(), GameError> {
        self.expect_phase(Phase::Ready, "start the battle")?;
        if !fleet.ships().iter().map(Ship::len).eq(SHIP_LENGTHS.iter().copied()) {
            return Err(self.reject(GameError::InvalidSession("opponent fleet does not match the ship set")));
        }
        self.begin(fleet);
        Ok(())
    }

    fn begin(&mut self, fleet: Fleet) {
        self.enemy = Board::with_fleet(fleet);
        self.set_phase(Phase::PlayerTurn);
        self.emit(GameEvent::BattleStarted);
        self.emit(GameEvent::TurnChanged(Side::Player));
    }

    /// Fire at `cell` on the opponent's board.
    ///
    /// Rejected without effect outside the player's turn or when the cell
    /// was already fired upon.
    pub fn request_player_shot(&mut self, cell: Cell) -> Result<ShotResult, GameError> {
        if self.phase != Phase::PlayerTurn {
            return Err(self.reject(ShotRejection::WrongPhase(self.phase).into()));
        }
        let result = match self.enemy.receive_shot(cell) {
            Ok(result) => result,
            Err(e) => return Err(self.reject(e.into())),
        };

        self.shots_fired += 1;
        if result.is_hit() {
            self.hits += 1;
        }
        self.report_shot(Side::Player, cell, result);

        if self.enemy.all_sunk() {
            self.finish(Side::Player);
        } else {
            self.set_phase(Phase::EnemyTurn);
            self.emit(GameEvent::TurnChanged(Side::Enemy));
        }
        Ok(result)
    }

    /// Let the opponent take its shot. Only valid on the enemy's turn; the
    /// host may delay this call for pacing.
    pub fn resolve_enemy_turn(&mut self) -> Result<(Cell, ShotResult), GameError> {
        self.expect_phase(Phase::EnemyTurn, "resolve the enemy turn")?;

        let shots = self.player.shots();
        let cell = match self.targeting.pick_shot(&mut self.rng, &shots, self.player.fleet()) {
            Some(cell) => cell,
            None => return Err(self.reject(GameError::IllegalAction { action: "fire", phase: self.phase })),
        };
        let result = match self.player.receive_shot(cell) {
            Ok(result) => result,
            Err(e) => return Err(self.reject(e.into())),
        };
        self.turns += 1;
        self.targeting.observe(cell, result, &self.player.shots());
        self.report_shot(Side::Enemy, cell, result);

        if self.player.all_sunk() {
            self.finish(Side::Enemy);
        } else {
            self.targeting.settle(self.player.fleet());
            self.set_phase(Phase::PlayerTurn);
            self.emit(GameEvent::TurnChanged(Side::Player));
        }
        Ok((cell, result))
    }

    fn report_shot(&mut self, attacker: Side, cell: Cell, result: ShotResult) {
        self.emit(GameEvent::ShotResolved { attacker, cell, outcome: result.outcome() });
        if let ShotResult::Sink { ship_id, length } = result {
            self.emit(GameEvent::ShipSunk { owner: attacker.opponent(), ship_id, length });
        }
    }

    fn finish(&mut self, winner: Side) {
        self.set_phase(Phase::GameOver);
        let stats = self.stats();
        info!("{:?} wins after {} turns ({}% accuracy)", winner, stats.turns, stats.accuracy_percent);
        self.emit(GameEvent::GameOver { winner, stats });
    }
}
