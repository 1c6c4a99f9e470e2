#![cfg(feature = "std")]

//! Plain-text rendering of the board for terminal front ends.

use std::collections::HashSet;
use std::fmt::Write;

use crate::cell::Cell;
use crate::game::GameController;
use crate::grid::Grid;
use crate::grid_cell::CellStatus;

/// Squares of placed ships, found through their anchors the way the hidden
/// ship overlay is built. Returns (all ship squares, squares of sunk ships).
fn ship_overlay(grid: &Grid) -> (HashSet<Cell>, HashSet<Cell>) {
    let mut ships = HashSet::new();
    let mut sunk = HashSet::new();
    for gc in grid.matrix().iter().flatten() {
        if let Some(ship) = grid.get_ship_for_cell(gc.cell()) {
            let cells = ship.cells();
            if !ship.is_alive() {
                sunk.extend(cells.iter().copied());
            }
            ships.extend(cells);
        }
    }
    (ships, sunk)
}

/// Header label for column `c`: a letter while the alphabet lasts, then the
/// 1-based column number.
fn column_label(c: usize) -> String {
    match u8::try_from(c) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (c + 1).to_string(),
    }
}

/// Render the board. `X` hit, `*` square of a sunk ship, `o` miss, `·` next
/// to a placed ship, `.` open water. With `reveal`, unhit ship squares show
/// as `#`.
pub fn render_board(grid: &Grid, reveal: bool) -> String {
    let (ships, sunk) = ship_overlay(grid);
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..grid.size() {
        let _ = write!(out, " {}", column_label(c));
    }
    out.push('\n');
    for (r, row) in grid.matrix().iter().enumerate() {
        let _ = write!(out, " {:2} ", r + 1);
        for gc in row {
            let ch = match gc.status() {
                _ if sunk.contains(&gc.cell()) => '*',
                CellStatus::Hit => 'X',
                CellStatus::Miss => 'o',
                CellStatus::Empty if reveal && ships.contains(&gc.cell()) => '#',
                CellStatus::Empty if gc.is_near() => '·',
                CellStatus::Empty => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// One-line status panel.
pub fn render_status(game: &GameController) -> String {
    let mut line = format!(
        "ALIVE SHIPS: {}  MOVES LEFT: {}",
        game.alive_ships(),
        game.remaining_moves()
    );
    if game.alive_ships() == 0 {
        line.push_str("  GAME OVER");
    } else if game.is_over() {
        line.push_str("  OUT OF MOVES");
    }
    line
}

pub fn print_game(game: &GameController, reveal: bool) {
    println!("{}", render_board(game.grid(), reveal));
    println!("{}", render_status(game));
}
