#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use shipsinkers::{
    cli::{parse_command, Command, HELP},
    init_logging,
    prelude::*,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::time::Duration;

/// Delay before the enemy fires, so the player can follow the exchange.
#[cfg(feature = "std")]
const ENEMY_DELAY: Duration = Duration::from_millis(650);

#[derive(Parser)]
#[command(author, version, about = "Sink the enemy fleet before it sinks yours", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Captain name shown in status messages.
    #[arg(long, short)]
    username: String,
    /// Opponent difficulty: easy, medium, hard or impossible.
    #[arg(long, short, default_value = "medium")]
    difficulty: Difficulty,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Place the whole fleet at random instead of by hand.
    #[arg(long)]
    auto_place: bool,
    /// Resolve enemy turns immediately.
    #[arg(long)]
    no_delay: bool,
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut session = GameSession::with_observer(rng, ConsoleObserver::new(&cli.username));
    session.start_session(&cli.username, cli.difficulty)?;
    if cli.auto_place {
        session.auto_place()?;
    }
    println!("{}", HELP);
    print_player_view(&session);

    let mut orientation = Orientation::Horizontal;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(&session, orientation);
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        // Rejected requests are already announced by the observer.
        match command {
            Command::Place { start, orientation: o } => {
                let _ = session.place_next(start, o.unwrap_or(orientation));
                print_player_view(&session);
            }
            Command::Rotate => {
                orientation = orientation.rotated();
                println!("Orientation: {:?}", orientation);
            }
            Command::Auto => {
                let _ = session.auto_place();
                print_player_view(&session);
            }
            Command::Start => {
                let _ = session.start_battle();
            }
            Command::Fire(cell) => {
                if session.request_player_shot(cell).is_ok() && session.phase() == Phase::EnemyTurn {
                    if !cli.no_delay {
                        tokio::time::sleep(ENEMY_DELAY).await;
                    }
                    session.resolve_enemy_turn()?;
                }
                print_player_view(&session);
            }
            Command::Show => print_player_view(&session),
            Command::Restart => {
                let difficulty = session.difficulty();
                session.start_session(&cli.username, difficulty)?;
                if cli.auto_place {
                    session.auto_place()?;
                }
                print_player_view(&session);
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn prompt<O: GameObserver>(session: &GameSession<O>, orientation: Orientation) {
    use std::io::Write;

    match session.phase() {
        Phase::Placing => {
            let len = session.next_ship_length().unwrap_or(0);
            print!("Place ship of length {} ({:?}) > ", len, orientation);
        }
        Phase::Ready => print!("Fleet ready, type `start` > "),
        Phase::PlayerTurn => print!("Target > "),
        Phase::GameOver => print!("Game over, `restart` or `quit` > "),
        Phase::Setup | Phase::EnemyTurn => print!("> "),
    }
    let _ = std::io::stdout().flush();
}
