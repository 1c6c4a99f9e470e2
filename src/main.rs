use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use solo_battleship::{init_logging, ui, GameConfig, GameController, GameStatus};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::{interval, Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = solo_battleship::BOARD_SIZE)]
    size: usize,
    #[arg(long, help = "Show where the ships are")]
    reveal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fire automatically on a timer until every ship is sunk. Enter pauses
    /// and resumes.
    Auto {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
    },
    /// Fire one shot per Enter key press.
    Step {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[derive(Clone, Copy)]
enum Mode {
    Auto { interval_ms: u64 },
    Step,
}

/// How a round ended.
enum Flow {
    Finished,
    Quit,
}

/// Forward stdin lines to the async side. The channel closes on EOF.
fn spawn_stdin() -> UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("q")
}

/// Fresh game; with a fixed seed, round `n` uses `seed + n` so that a restart
/// deals a new board while staying reproducible.
fn new_game(args: &GameArgs, round: u64) -> anyhow::Result<GameController> {
    let mut rng = match args.seed {
        Some(s) => {
            let seed = s.wrapping_add(round);
            println!("Using fixed seed: {} (game will be reproducible)", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let game = GameController::with_config(GameConfig::with_size(args.size), &mut rng)?;
    let grid = game.grid();
    if grid.placed_ships() < grid.ships().len() {
        println!(
            "Only {} of {} ships fit on the board; this game cannot be won.",
            grid.placed_ships(),
            grid.ships().len()
        );
    }
    Ok(game)
}

async fn run_auto(
    game: &mut GameController,
    reveal: bool,
    interval_ms: u64,
    input: &mut UnboundedReceiver<String>,
) -> Flow {
    let mut ticker = interval(Duration::from_millis(interval_ms.max(1)));
    let mut paused = false;
    let mut input_open = true;
    ui::print_game(game, reveal);
    println!("Enter pauses or resumes, q quits.");
    while !game.is_over() {
        tokio::select! {
            _ = ticker.tick(), if !paused => {
                if game.alive_ships() > 0 {
                    game.fire();
                }
                ui::print_game(game, reveal);
            }
            line = input.recv(), if input_open => match line {
                Some(line) if is_quit(&line) => return Flow::Quit,
                Some(_) => {
                    paused = !paused;
                    if paused {
                        println!("Paused. Press Enter to resume.");
                    } else {
                        // skip the ticks missed while paused
                        ticker.reset();
                        println!("Resumed.");
                    }
                }
                None => input_open = false,
            },
            else => return Flow::Quit,
        }
    }
    Flow::Finished
}

async fn run_step(
    game: &mut GameController,
    reveal: bool,
    input: &mut UnboundedReceiver<String>,
) -> anyhow::Result<Flow> {
    ui::print_game(game, reveal);
    while !game.is_over() {
        print!("Press Enter to fire (q to quit) > ");
        io::stdout().flush()?;
        match input.recv().await {
            Some(line) if !is_quit(&line) => {}
            _ => return Ok(Flow::Quit),
        }
        if let Some(target) = game.next_target() {
            if let Some(result) = game.fire() {
                println!("Fired at {}: {:?}", target, result);
            }
        }
        ui::print_game(game, reveal);
    }
    Ok(Flow::Finished)
}

async fn ask_restart(input: &mut UnboundedReceiver<String>) -> anyhow::Result<bool> {
    print!("Restart? [y/N] > ");
    io::stdout().flush()?;
    Ok(matches!(input.recv().await, Some(line) if line.trim().eq_ignore_ascii_case("y")))
}

fn report(game: &GameController) {
    match game.status() {
        GameStatus::Won => println!("All ships sunk in {} moves.", game.moves_fired()),
        GameStatus::Exhausted => {
            println!("Out of moves with {} ship(s) afloat.", game.alive_ships())
        }
        GameStatus::InProgress => println!("Stopped after {} moves.", game.moves_fired()),
    }
    info!("{:?}", game.summary());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (args, mode) = match cli.command {
        Commands::Auto { game, interval_ms } => (game, Mode::Auto { interval_ms }),
        Commands::Step { game } => (game, Mode::Step),
    };
    let mut input = spawn_stdin();

    for round in 0u64.. {
        let mut game = new_game(&args, round)?;
        let flow = match mode {
            Mode::Auto { interval_ms } => {
                run_auto(&mut game, args.reveal, interval_ms, &mut input).await
            }
            Mode::Step => run_step(&mut game, args.reveal, &mut input).await?,
        };
        report(&game);
        if matches!(flow, Flow::Quit) || !ask_restart(&mut input).await? {
            break;
        }
    }
    Ok(())
}
