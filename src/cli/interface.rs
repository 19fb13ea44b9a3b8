//! Terminal rendering of boards and session events.

use crate::core::{
    ship_name, Board, Cell, GameEvent, GameObserver, GameSession, ShotOutcome, Side, BOARD_SIZE,
};

/// Render a board as text. `reveal` shows unhit ship cells.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("     ");
    for c in 0..BOARD_SIZE as usize {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    let occupied = board.fleet().occupied();
    for r in 0..BOARD_SIZE as usize {
        out.push_str(&format!("   {:2}", r + 1));
        for c in 0..BOARD_SIZE as usize {
            let ch = match Cell::at(r, c) {
                Ok(cell) if board.hits().contains(cell) => 'X',
                Ok(cell) if board.is_shot(cell) => 'o',
                Ok(cell) if reveal && occupied.contains(cell) => 'S',
                _ => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    if reveal {
        out.push_str("   Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    } else {
        out.push_str("   Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}

/// Display the opponent board (top) and the player's board (bottom).
pub fn print_player_view<O: GameObserver>(session: &GameSession<O>) {
    println!("Enemy waters:");
    print!("{}", render_board(session.enemy_board(), false));
    println!("\nYour fleet:");
    print!("{}", render_board(session.player_board(), true));
}

/// Prints status lines for session events, the way a captain's console
/// would announce them.
#[derive(Debug, Clone, Default)]
pub struct ConsoleObserver {
    username: String,
}

impl ConsoleObserver {
    pub fn new(username: &str) -> Self {
        Self { username: username.to_string() }
    }

    /// The status line for `event`, if it has one.
    pub fn describe(&self, event: &GameEvent) -> Option<String> {
        let captain = &self.username;
        let line = match event {
            GameEvent::SessionStarted { difficulty } => {
                format!("Captain {}, place your ships in formation! (difficulty: {})", captain, difficulty)
            }
            GameEvent::ShipPlaced { ship_id, cells } => match cells.first() {
                Some(start) => format!("{} placed at {} ({} cells).", name(*ship_id), start, cells.len()),
                None => return None,
            },
            GameEvent::FleetReady => format!("Fleet ready, Captain {}. Type `start` to begin the battle.", captain),
            GameEvent::BattleStarted => "Engage the enemy!".to_string(),
            GameEvent::ShotResolved { attacker: Side::Player, outcome, .. } => match outcome {
                ShotOutcome::Hit => "HIT!".to_string(),
                ShotOutcome::Miss => "MISS...".to_string(),
            },
            GameEvent::ShotResolved { attacker: Side::Enemy, cell, outcome } => match outcome {
                ShotOutcome::Hit => format!("Enemy fire at {}: we've been hit!", cell),
                ShotOutcome::Miss => format!("Enemy fire at {}: a miss.", cell),
            },
            GameEvent::ShipSunk { owner: Side::Enemy, ship_id, length } => {
                format!("Enemy {} sunk! ({} cells)", name(*ship_id), length)
            }
            GameEvent::ShipSunk { owner: Side::Player, ship_id, length } => {
                format!("We lost our {}! ({} cells)", name(*ship_id), length)
            }
            GameEvent::TurnChanged(Side::Player) => "YOUR TURN. Your move, Captain.".to_string(),
            GameEvent::TurnChanged(Side::Enemy) => "ENEMY TURN".to_string(),
            GameEvent::GameOver { winner, stats } => {
                let headline = match winner {
                    Side::Player => format!("Victory, Captain {}! Enemy fleet destroyed.", captain),
                    Side::Enemy => format!("Defeat, Captain {}... Our fleet has been sunk.", captain),
                };
                format!(
                    "{}\n  Difficulty: {}\n  Turns: {}\n  Shots Fired: {}\n  Accuracy: {}%",
                    headline, stats.difficulty, stats.turns, stats.shots_fired, stats.accuracy_percent
                )
            }
            GameEvent::ActionRejected(err) => format!("ERROR: {}", err),
        };
        Some(line)
    }
}

fn name(ship_id: usize) -> &'static str {
    ship_name(ship_id).unwrap_or("ship")
}

impl GameObserver for ConsoleObserver {
    fn notify(&mut self, event: &GameEvent) {
        if let Some(line) = self.describe(event) {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_ships_in_status_lines() {
        let console = ConsoleObserver::new("Ada");
        let placed = GameEvent::ShipPlaced { ship_id: 0, cells: vec![Cell::new(0).unwrap()] };
        assert_eq!(console.describe(&placed).unwrap(), "Carrier placed at A1 (1 cells).");

        let sunk = GameEvent::ShipSunk { owner: Side::Enemy, ship_id: 4, length: 2 };
        assert_eq!(console.describe(&sunk).unwrap(), "Enemy Patrol Boat sunk! (2 cells)");

        let lost = GameEvent::ShipSunk { owner: Side::Player, ship_id: 7, length: 3 };
        assert_eq!(console.describe(&lost).unwrap(), "We lost our ship! (3 cells)");
    }

    #[test]
    fn empty_placement_has_no_line() {
        let console = ConsoleObserver::new("Ada");
        let placed = GameEvent::ShipPlaced { ship_id: 0, cells: Vec::new() };
        assert_eq!(console.describe(&placed), None);
    }
}
