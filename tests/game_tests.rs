use rand::{rngs::SmallRng, SeedableRng};
use solo_battleship::{
    generate_moves, ui, Cell, FireResult, GameConfig, GameController, GameStatus, Grid, GridError,
    Rotation, ShipKind, BOARD_SIZE,
};

fn single_dot_game(anchor: Cell, moves: Vec<Cell>) -> GameController {
    let mut grid = Grid::empty(BOARD_SIZE);
    let id = grid.add_ship(ShipKind::Dot, Rotation::Up);
    grid.try_place_ship(anchor, id).unwrap();
    GameController::from_parts(grid, moves)
}

#[test]
fn test_generate_moves_is_a_permutation() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut moves = generate_moves(BOARD_SIZE, &mut rng);
    assert_eq!(moves.len(), BOARD_SIZE * BOARD_SIZE);
    moves.sort();
    moves.dedup();
    assert_eq!(moves.len(), BOARD_SIZE * BOARD_SIZE);
    assert!(moves.iter().all(|c| (0..10).contains(&c.x) && (0..10).contains(&c.y)));
}

#[test]
fn test_fire_pops_from_the_end() {
    let mut game = single_dot_game(Cell::new(3, 3), vec![Cell::new(3, 3), Cell::new(0, 0)]);
    assert_eq!(game.alive_ships(), 1);
    assert_eq!(game.next_target(), Some(Cell::new(0, 0)));

    assert_eq!(game.fire(), Some(FireResult::Miss));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(matches!(game.fire(), Some(FireResult::Sink(_))));
    assert_eq!(game.alive_ships(), 0);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.moves_fired(), 2);

    assert_eq!(game.fire(), None);
    assert_eq!(game.moves_fired(), 2);
}

#[test]
fn test_standard_game_setup() {
    let game = GameController::from_seed(42);
    let grid = game.grid();
    assert_eq!(grid.size(), BOARD_SIZE);
    assert_eq!(grid.ships().len(), 4);
    assert_eq!(game.alive_ships(), 4);
    assert_eq!(game.remaining_moves(), 100);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameController::from_seed(1234);
    let mut b = GameController::from_seed(1234);
    assert_eq!(a.summary(), b.summary());
    for _ in 0..30 {
        assert_eq!(a.fire(), b.fire());
    }
    assert_eq!(a.summary(), b.summary());
}

#[test]
fn test_play_out_until_won() {
    let mut game = GameController::from_seed(9);
    let status = game.play_out();
    assert!(game.is_over());
    if game.grid().placed_ships() == 4 {
        assert_eq!(status, GameStatus::Won);
        assert_eq!(game.alive_ships(), 0);
    } else {
        assert_eq!(status, GameStatus::Exhausted);
    }
}

#[test]
fn test_tiny_board_is_exhausted() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game = GameController::with_config(GameConfig::with_size(1), &mut rng).unwrap();
    assert_eq!(game.grid().placed_ships(), 1);
    assert_eq!(game.fire().map(|r| r.is_hit()), Some(true));
    assert_eq!(game.alive_ships(), 3);
    assert_eq!(game.status(), GameStatus::Exhausted);
    assert_eq!(game.fire(), None);
}

#[test]
fn test_config_validation() {
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(GameConfig::default().validate().is_ok());
    assert!(matches!(
        GameConfig::with_size(0).validate(),
        Err(GridError::InvalidConfig(_))
    ));
    assert!(matches!(
        GameConfig::with_size(27).validate(),
        Err(GridError::InvalidConfig(_))
    ));
    let empty_fleet = GameConfig {
        dots: 0,
        i_ships: 0,
        l_ships: 0,
        ..GameConfig::default()
    };
    assert!(GameController::with_config(empty_fleet, &mut rng).is_err());
}

#[test]
fn test_config_rejects_oversized_fleet() {
    let mut rng = SmallRng::seed_from_u64(0);
    let overflowing = GameConfig {
        dots: usize::MAX,
        ..GameConfig::default()
    };
    assert!(matches!(
        overflowing.validate(),
        Err(GridError::InvalidConfig(_))
    ));
    assert!(matches!(
        GameController::with_config(overflowing, &mut rng),
        Err(GridError::InvalidConfig(_))
    ));

    let crowded = GameConfig {
        dots: 101,
        i_ships: 0,
        l_ships: 0,
        ..GameConfig::default()
    };
    assert!(crowded.validate().is_err());
    let full = GameConfig { dots: 100, ..crowded };
    assert!(full.validate().is_ok());
}

#[test]
fn test_config_fleet_order() {
    let config = GameConfig {
        size: 12,
        dots: 1,
        i_ships: 2,
        l_ships: 1,
    };
    assert_eq!(
        config.fleet(),
        vec![ShipKind::Dot, ShipKind::I, ShipKind::I, ShipKind::L]
    );
    let mut rng = SmallRng::seed_from_u64(77);
    let game = GameController::with_config(config, &mut rng).unwrap();
    assert_eq!(game.grid().size(), 12);
    assert_eq!(game.remaining_moves(), 144);
    assert_eq!(game.grid().ships().len(), 4);
}

#[test]
fn test_summary_counts() {
    let mut game = single_dot_game(
        Cell::new(3, 3),
        vec![Cell::new(3, 3), Cell::new(1, 1), Cell::new(0, 0)],
    );
    game.fire();
    game.fire();
    let summary = game.summary();
    assert_eq!(summary.moves_fired, 2);
    assert_eq!(summary.misses, 2);
    assert_eq!(summary.hits, 0);
    assert_eq!(summary.alive_ships, 1);
    assert_eq!(summary.placed_ships, 1);
    assert_eq!(summary.ships[0].position, Some(Cell::new(3, 3)));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["ships"][0]["kind"], "Dot");
}

#[test]
fn test_render_board() {
    let mut grid = Grid::empty(3);
    let id = grid.add_ship(ShipKind::Dot, Rotation::Up);
    grid.try_place_ship(Cell::new(1, 1), id).unwrap();
    grid.fire(Cell::new(0, 0));

    let hidden = ui::render_board(&grid, false);
    let lines: Vec<&str> = hidden.lines().collect();
    assert_eq!(lines[0], "     A B C");
    assert_eq!(lines[1], "  1  o · ·");
    assert_eq!(lines[2], "  2  · . ·");
    assert_eq!(lines[3], "  3  · · ·");

    let revealed = ui::render_board(&grid, true);
    assert_eq!(revealed.lines().nth(2), Some("  2  · # ·"));

    grid.fire(Cell::new(1, 1));
    let after = ui::render_board(&grid, true);
    assert_eq!(after.lines().nth(2), Some("  2  · * ·"));
}

#[test]
fn test_render_sunk_ship() {
    let mut grid = Grid::empty(6);
    let id = grid.add_ship(ShipKind::I, Rotation::Right);
    grid.try_place_ship(Cell::new(2, 1), id).unwrap();

    grid.fire(Cell::new(2, 1));
    let hit = ui::render_board(&grid, false);
    assert_eq!(hit.lines().nth(3), Some("  3  · X . . . ·"));

    for y in 2..5 {
        grid.fire(Cell::new(2, y));
    }
    for reveal in [false, true] {
        let sunk = ui::render_board(&grid, reveal);
        assert_eq!(sunk.lines().nth(3), Some("  3  · * * * * ·"));
    }
}

#[test]
fn test_render_wide_board() {
    let grid = Grid::empty(200);
    let out = ui::render_board(&grid, false);
    let header = out.lines().next().unwrap();
    assert!(header.contains(" Z 27 28"));
    assert!(header.ends_with(" 200"));
    assert_eq!(out.lines().count(), 201);
}

#[test]
fn test_render_status() {
    let mut game = single_dot_game(Cell::new(3, 3), vec![Cell::new(3, 3)]);
    assert_eq!(ui::render_status(&game), "ALIVE SHIPS: 1  MOVES LEFT: 1");
    game.fire();
    assert_eq!(ui::render_status(&game), "ALIVE SHIPS: 0  MOVES LEFT: 0  GAME OVER");
}
