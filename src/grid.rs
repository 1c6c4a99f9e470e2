//! Game board: the square matrix, the fleet, placement and fire resolution.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, info, trace, warn};
use rand::Rng;

use crate::cell::Cell;
use crate::common::{FireResult, GridError};
use crate::config::GameConfig;
use crate::grid_cell::{CellStatus, GridCell};
use crate::moves::generate_moves;
use crate::ship::{Rotation, Ship, ShipId, ShipKind};

pub struct Grid {
    size: usize,
    matrix: Vec<Vec<GridCell>>,
    ships: Vec<Ship>,
    next_id: u32,
}

impl Grid {
    /// Empty `size`×`size` board with no ships.
    pub fn empty(size: usize) -> Self {
        let matrix = (0..size as i32)
            .map(|i| {
                (0..size as i32)
                    .map(|j| GridCell::new(Cell::new(i, j)))
                    .collect::<Vec<_>>()
            })
            .collect();
        Grid {
            size,
            matrix,
            ships: Vec::new(),
            next_id: 0,
        }
    }

    /// Board of `size` carrying the standard fleet (2×DOT, 1×I, 1×L) with
    /// random rotations. Ships are not placed yet.
    pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Self::with_fleet(size, &GameConfig::default().fleet(), rng)
    }

    /// Board of `size` carrying one unplaced ship per entry of `fleet`.
    pub fn with_fleet<R: Rng + ?Sized>(size: usize, fleet: &[ShipKind], rng: &mut R) -> Self {
        let mut grid = Self::empty(size);
        for &kind in fleet {
            grid.add_ship(kind, Rotation::random(rng));
        }
        grid
    }

    /// Add an unplaced ship to the fleet and return its id.
    pub fn add_ship(&mut self, kind: ShipKind, rotation: Rotation) -> ShipId {
        let id = ShipId(self.next_id);
        self.next_id += 1;
        self.ships.push(Ship::new(id, kind, rotation));
        id
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Rows of squares, indexed `matrix()[x][y]`.
    pub fn matrix(&self) -> &[Vec<GridCell>] {
        &self.matrix
    }

    /// The fleet in construction order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id() == id)
    }

    fn ship_index(&self, id: ShipId) -> Option<usize> {
        self.ships.iter().position(|s| s.id() == id)
    }

    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Square at (`x`, `y`), or `None` off the board.
    pub fn cell(&self, x: i32, y: i32) -> Option<&GridCell> {
        if self.is_inside(x, y) {
            Some(&self.matrix[x as usize][y as usize])
        } else {
            None
        }
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut GridCell> {
        if self.is_inside(x, y) {
            Some(&mut self.matrix[x as usize][y as usize])
        } else {
            None
        }
    }

    /// On-board squares of the 3×3 block centred on `cell`.
    fn neighbourhood(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        (-1..=1)
            .flat_map(move |dx| (-1..=1).map(move |dy| cell.offset(dx, dy)))
            .filter(move |c| self.is_inside(c.x, c.y))
    }

    /// Whether `ship` fits with its anchor at `cell`: every footprint square
    /// is on the board and no square within one step (diagonals included) of
    /// the footprint is occupied.
    pub fn can_place_ship(&self, cell: Cell, ship: &Ship) -> bool {
        self.check_placement(cell, ship).is_ok()
    }

    fn check_placement(&self, cell: Cell, ship: &Ship) -> Result<(), GridError> {
        let footprint = ship.footprint_at(cell);
        if footprint.iter().any(|c| !self.is_inside(c.x, c.y)) {
            return Err(GridError::ShipOutOfBounds);
        }
        for &square in &footprint {
            if self
                .neighbourhood(square)
                .any(|n| self.matrix[n.x as usize][n.y as usize].is_occupied())
            {
                return Err(GridError::ShipTooClose);
            }
        }
        Ok(())
    }

    /// Put ship `id` on the board anchored at `cell` without any checks.
    ///
    /// Call [`can_place_ship`](Self::can_place_ship) first. Footprint squares
    /// off the board are skipped. Placing the same ship twice is a logic
    /// error.
    pub fn place_ship(&mut self, cell: Cell, id: ShipId) {
        let Some(index) = self.ship_index(id) else {
            warn!("place_ship: unknown ship {}", id);
            return;
        };
        debug_assert!(!self.ships[index].is_placed(), "ship {} placed twice", id);
        let footprint = self.ships[index].footprint_at(cell);
        for square in footprint {
            debug_assert!(self.is_inside(square.x, square.y), "{} is off the board", square);
            if let Some(gc) = self.cell_mut(square.x, square.y) {
                gc.set_ship_id(id);
            }
        }
        let ship = &mut self.ships[index];
        ship.set_position(cell);
        debug!(
            "placed {} ship {} at {} facing {}",
            ship.kind(),
            id,
            cell,
            ship.rotation()
        );
    }

    /// Flag every free square bordering ship `id` as near.
    pub fn fill_near_area(&mut self, id: ShipId) {
        let Some(ship) = self.ship(id) else {
            return;
        };
        let mut near = Vec::new();
        for square in ship.cells() {
            near.extend(
                self.neighbourhood(square)
                    .filter(|n| !self.matrix[n.x as usize][n.y as usize].is_occupied()),
            );
        }
        for n in near {
            self.matrix[n.x as usize][n.y as usize].mark_near();
        }
    }

    /// Checked placement: verifies the ship exists and is unplaced, checks
    /// feasibility, then places it and marks its near area.
    pub fn try_place_ship(&mut self, cell: Cell, id: ShipId) -> Result<(), GridError> {
        let ship = self.ship(id).ok_or(GridError::UnknownShip(id))?;
        if ship.is_placed() {
            return Err(GridError::ShipAlreadyPlaced(id));
        }
        self.check_placement(cell, ship)?;
        self.place_ship(cell, id);
        self.fill_near_area(id);
        Ok(())
    }

    /// Place the fleet in construction order.
    ///
    /// One shuffled pass over every square: each candidate is offered to the
    /// current ship and, if it fits, the ship is placed and the next ship
    /// becomes current. There is no backtracking, so when the candidates run
    /// out some ships may stay unplaced; those can never be hit. Returns the
    /// number of ships placed.
    pub fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut candidates = generate_moves(self.size, rng);
        let mut current = 0;
        while current < self.ships.len() {
            let Some(cell) = candidates.pop() else {
                break;
            };
            if self.can_place_ship(cell, &self.ships[current]) {
                let id = self.ships[current].id();
                self.place_ship(cell, id);
                self.fill_near_area(id);
                current += 1;
            }
        }
        if current < self.ships.len() {
            warn!(
                "ran out of candidate cells: {} of {} ships left unplaced",
                self.ships.len() - current,
                self.ships.len()
            );
        }
        current
    }

    /// Resolve a shot at `target`.
    ///
    /// Shots are not deduplicated: firing the same square twice counts the
    /// hit twice.
    ///
    /// # Panics
    ///
    /// Panics if `target` is off the board.
    pub fn fire(&mut self, target: Cell) -> FireResult {
        let square = &mut self.matrix[target.x as usize][target.y as usize];
        let Some(id) = square.ship_id() else {
            square.set_status(CellStatus::Miss);
            trace!("fire {}: miss", target);
            return FireResult::Miss;
        };
        square.set_status(CellStatus::Hit);
        let Some(ship) = self.ships.iter_mut().find(|s| s.id() == id) else {
            trace!("fire {}: hit square of unknown ship {}", target, id);
            return FireResult::Hit;
        };
        if ship.hit() {
            info!("{} ship {} sunk at {}", ship.kind(), id, target);
            FireResult::Sink(id)
        } else {
            trace!("fire {}: hit {}", target, id);
            FireResult::Hit
        }
    }

    /// Checked shot: rejects off-board targets and squares already fired on,
    /// leaving the board untouched.
    pub fn try_fire(&mut self, target: Cell) -> Result<FireResult, GridError> {
        let square = self.cell(target.x, target.y).ok_or(GridError::OutOfBounds {
            x: target.x,
            y: target.y,
        })?;
        if square.status() != CellStatus::Empty {
            return Err(GridError::AlreadyFired(target));
        }
        Ok(self.fire(target))
    }

    /// Number of ships still afloat. Unplaced ships count as afloat.
    pub fn alive_ships(&self) -> usize {
        self.ships.iter().filter(|s| s.is_alive()).count()
    }

    pub fn placed_ships(&self) -> usize {
        self.ships.iter().filter(|s| s.is_placed()).count()
    }

    /// Ship whose anchor is exactly `cell`.
    pub fn get_ship_for_cell(&self, cell: Cell) -> Option<&Ship> {
        self.ships.iter().find(|s| s.position() == Some(cell))
    }

    /// Ship covering `cell`, if any.
    pub fn ship_at(&self, cell: Cell) -> Option<&Ship> {
        let id = self.cell(cell.x, cell.y)?.ship_id()?;
        self.ship(id)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {}, ships: {:?} }}", self.size, self.ships)?;
        for row in &self.matrix {
            for gc in row {
                let ch = match (gc.status(), gc.ship_id()) {
                    (CellStatus::Hit, _) => 'X',
                    (CellStatus::Miss, _) => 'o',
                    (CellStatus::Empty, Some(_)) => '#',
                    (CellStatus::Empty, None) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
