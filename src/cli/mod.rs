//! Terminal host: command parsing and display.
//!
//! Lines typed by the player are turned into [`Command`]s; the binary maps
//! each one onto a [`crate::GameSession`] call.

pub mod interface;

pub use interface::*;

use crate::core::{Cell, Orientation};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place the next ship at a cell; orientation defaults to the current one.
    Place { start: Cell, orientation: Option<Orientation> },
    /// Flip the default placement orientation.
    Rotate,
    /// Randomly place the remaining ships.
    Auto,
    /// Start the battle once the fleet is ready.
    Start,
    /// Fire at a cell.
    Fire(Cell),
    /// Show both boards.
    Show,
    /// Start over with the same captain and difficulty.
    Restart,
    Help,
    Quit,
}

fn parse_orientation(s: &str) -> Result<Orientation, String> {
    match s.to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        "v" | "vertical" => Ok(Orientation::Vertical),
        other => Err(format!("Invalid orientation '{}' - use H or V", other)),
    }
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    s.parse::<Cell>()
        .map_err(|_| format!("Invalid cell '{}' - use a column A-J and a row 1-10 (e.g. B7)", s))
}

/// Parse a command line. A bare coordinate means "fire".
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let head = parts.next().ok_or_else(|| "Empty input".to_string())?;
    let rest: Vec<&str> = parts.collect();

    let command = match head.to_ascii_lowercase().as_str() {
        "place" | "p" => {
            let start = parse_cell(rest.first().ok_or("Usage: place <cell> [h|v]")?)?;
            let orientation = rest.get(1).map(|o| parse_orientation(o)).transpose()?;
            Command::Place { start, orientation }
        }
        "rotate" | "r" => Command::Rotate,
        "auto" => Command::Auto,
        "start" => Command::Start,
        "fire" | "f" => Command::Fire(parse_cell(rest.first().ok_or("Usage: fire <cell>")?)?),
        "show" | "board" => Command::Show,
        "restart" | "new" => Command::Restart,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Fire(parse_cell(head)?),
    };
    if matches!(command, Command::Fire(_)) && head.parse::<Cell>().is_ok() && !rest.is_empty() {
        return Err(format!("Unexpected input after {}", head));
    }
    Ok(command)
}

/// Help text for the terminal host.
pub const HELP: &str = "\
Commands:
  place <cell> [h|v]   place the next ship (e.g. place A1 h)
  rotate               toggle the default orientation
  auto                 place the remaining ships at random
  start                start the battle once the fleet is ready
  fire <cell> | <cell> fire at the enemy (e.g. B7)
  show                 show both boards
  restart              start a new game
  quit                 leave the game";
