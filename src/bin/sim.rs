//! Headless simulator: a random-firing player against the scripted opponent.
//! Prints one JSON summary per difficulty.

use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::json;
use shipsinkers::{
    init_logging, Cell, Difficulty, EventLog, GameEvent, GameObserver, GameSession, GameStats,
    LogObserver, Phase, Side, CELL_COUNT,
};

#[derive(Parser)]
#[command(about = "Simulate games against the scripted opponent")]
struct Args {
    /// Base RNG seed; game `i` uses `seed + i`.
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Games per difficulty.
    #[arg(long, default_value_t = 10)]
    games: u64,
    /// Only simulate this difficulty.
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Log every game event to stderr.
    #[arg(long)]
    verbose: bool,
}

#[derive(Serialize)]
struct GameResult {
    winner: Side,
    stats: GameStats,
    events: usize,
}

fn play(difficulty: Difficulty, seed: u64, verbose: bool) -> anyhow::Result<GameResult> {
    let mut shooter = SmallRng::seed_from_u64(seed.wrapping_mul(31).wrapping_add(7));
    let mut session = GameSession::with_observer(SmallRng::seed_from_u64(seed), EventLog::new());
    session.start_session("sim", difficulty)?;
    session.auto_place()?;
    session.start_battle()?;

    while session.phase() != Phase::GameOver {
        match session.phase() {
            Phase::PlayerTurn => {
                let shots = session.enemy_board().shots();
                let cell = loop {
                    let cell = Cell::try_from(shooter.random_range(0..CELL_COUNT))?;
                    if !shots.contains(cell) {
                        break cell;
                    }
                };
                session.request_player_shot(cell)?;
            }
            Phase::EnemyTurn => {
                session.resolve_enemy_turn()?;
            }
            other => anyhow::bail!("unexpected phase {:?}", other),
        }
    }

    let log = session.observer();
    if verbose {
        let mut logger = LogObserver;
        for event in log.events() {
            logger.notify(event);
        }
    }
    let (winner, stats) = log
        .events()
        .iter()
        .find_map(|e| match e {
            GameEvent::GameOver { winner, stats } => Some((*winner, *stats)),
            _ => None,
        })
        .ok_or_else(|| anyhow::anyhow!("game ended without a GameOver event"))?;
    Ok(GameResult { winner, stats, events: log.events().len() })
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let difficulties = match args.difficulty {
        Some(d) => vec![d],
        None => Difficulty::ALL.to_vec(),
    };

    for difficulty in difficulties {
        let mut results = Vec::new();
        for i in 0..args.games {
            results.push(play(difficulty, args.seed.wrapping_add(i), args.verbose)?);
        }
        let player_wins = results.iter().filter(|r| r.winner == Side::Player).count();
        let average_turns = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| f64::from(r.stats.turns)).sum::<f64>() / results.len() as f64
        };
        let summary = json!({
            "difficulty": difficulty,
            "games": results.len(),
            "player_wins": player_wins,
            "enemy_wins": results.len() - player_wins,
            "average_turns": average_turns,
            "results": results,
        });
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}
