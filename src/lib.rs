#![cfg_attr(not(feature = "std"), no_std)]

//! Single-player battleship: a fixed fleet is scattered over a square board
//! with a one-square gap between ships, then a shuffled firing order reveals
//! the board one square at a time until every ship is sunk.

extern crate alloc;

mod cell;
mod common;
mod config;
mod game;
mod grid;
mod grid_cell;
#[cfg(feature = "std")]
mod logging;
mod moves;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use cell::Cell;
pub use common::{FireResult, GridError};
pub use config::*;
pub use game::{GameController, GameStatus, GameSummary, ShipReport};
pub use grid::Grid;
pub use grid_cell::{CellStatus, GridCell};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use moves::generate_moves;
pub use ship::{footprint, Rotation, Ship, ShipId, ShipKind, ShipStatus};
