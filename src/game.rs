use alloc::vec::Vec;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cell::Cell;
use crate::common::{FireResult, GridError};
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::grid_cell::CellStatus;
use crate::moves::generate_moves;
use crate::ship::{Rotation, ShipId, ShipKind, ShipStatus};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Every ship has been sunk.
    Won,
    /// All moves were fired but some ship, necessarily an unplaced one,
    /// is still afloat.
    Exhausted,
}

/// Per-ship line of a [`GameSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipReport {
    pub id: ShipId,
    pub kind: ShipKind,
    pub rotation: Rotation,
    pub position: Option<Cell>,
    pub hit_count: usize,
    pub status: ShipStatus,
}

/// Read-only snapshot of a game for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub size: usize,
    pub moves_fired: usize,
    pub hits: usize,
    pub misses: usize,
    pub alive_ships: usize,
    pub placed_ships: usize,
    pub status: GameStatus,
    pub ships: Vec<ShipReport>,
}

/// One game: the board plus the precomputed firing order.
pub struct GameController {
    grid: Grid,
    moves: Vec<Cell>,
    fired: usize,
}

impl GameController {
    /// Standard 10×10 game with the standard fleet.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let config = GameConfig::default();
        let mut grid = Grid::new(config.size, rng);
        let moves = generate_moves(config.size, rng);
        grid.place_ships(rng);
        Self::from_parts(grid, moves)
    }

    /// Standard game driven by a `SmallRng` seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    pub fn with_config<R: Rng + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        config.validate()?;
        let mut grid = Grid::with_fleet(config.size, &config.fleet(), rng);
        let moves = generate_moves(config.size, rng);
        grid.place_ships(rng);
        Ok(Self::from_parts(grid, moves))
    }

    /// Game over an already prepared grid with an explicit firing order.
    /// Moves are consumed from the end of `moves`.
    pub fn from_parts(grid: Grid, moves: Vec<Cell>) -> Self {
        Self {
            grid,
            moves,
            fired: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of ships still afloat.
    pub fn alive_ships(&self) -> usize {
        self.grid.alive_ships()
    }

    pub fn remaining_moves(&self) -> usize {
        self.moves.len()
    }

    pub fn moves_fired(&self) -> usize {
        self.fired
    }

    /// Next square that [`fire`](Self::fire) will target.
    pub fn next_target(&self) -> Option<Cell> {
        self.moves.last().copied()
    }

    /// Fire the next precomputed move. Returns `None`, leaving the board
    /// untouched, once the sequence is exhausted.
    pub fn fire(&mut self) -> Option<FireResult> {
        let target = self.moves.pop()?;
        self.fired += 1;
        let result = self.grid.fire(target);
        if matches!(result, FireResult::Sink(_)) && self.alive_ships() == 0 {
            info!("all ships sunk after {} moves", self.fired);
        }
        Some(result)
    }

    /// Fire until every ship is sunk or the moves run out.
    pub fn play_out(&mut self) -> GameStatus {
        while self.status() == GameStatus::InProgress {
            self.fire();
        }
        self.status()
    }

    pub fn status(&self) -> GameStatus {
        if self.alive_ships() == 0 {
            GameStatus::Won
        } else if self.moves.is_empty() {
            GameStatus::Exhausted
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    pub fn summary(&self) -> GameSummary {
        let mut hits = 0;
        let mut misses = 0;
        for gc in self.grid.matrix().iter().flatten() {
            match gc.status() {
                CellStatus::Hit => hits += 1,
                CellStatus::Miss => misses += 1,
                CellStatus::Empty => {}
            }
        }
        let ships = self
            .grid
            .ships()
            .iter()
            .map(|s| ShipReport {
                id: s.id(),
                kind: s.kind(),
                rotation: s.rotation(),
                position: s.position(),
                hit_count: s.hit_count(),
                status: s.status(),
            })
            .collect();
        GameSummary {
            size: self.grid.size(),
            moves_fired: self.fired,
            hits,
            misses,
            alive_ships: self.alive_ships(),
            placed_ships: self.grid.placed_ships(),
            status: self.status(),
            ships,
        }
    }
}
