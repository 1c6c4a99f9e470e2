use solo_battleship::{init_logging, GameConfig, GameController};
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => solo_battleship::BOARD_SIZE,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = GameController::with_config(GameConfig::with_size(size), &mut rng)?;
    game.play_out();

    println!("{}", serde_json::to_string(&game.summary())?);
    Ok(())
}
