//! Common types: fire results and grid errors.

use crate::cell::Cell;
use crate::ship::ShipId;

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireResult {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank the ship with this id.
    Sink(ShipId),
}

impl FireResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, FireResult::Miss)
    }
}

/// Errors returned by the checked grid and configuration operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Game configuration rejected, with the reason.
    InvalidConfig(&'static str),
    /// No ship with this id belongs to the grid.
    UnknownShip(ShipId),
    /// Ship already has a position.
    ShipAlreadyPlaced(ShipId),
    /// Some footprint square falls outside the board.
    ShipOutOfBounds,
    /// Footprint touches or overlaps another ship, diagonals included.
    ShipTooClose,
    /// Coordinate outside the board.
    OutOfBounds { x: i32, y: i32 },
    /// Square was already fired on.
    AlreadyFired(Cell),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidConfig(reason) => write!(f, "Invalid game configuration: {}", reason),
            GridError::UnknownShip(id) => write!(f, "Ship {} does not belong to this grid", id),
            GridError::ShipAlreadyPlaced(id) => write!(f, "Ship {} is already placed", id),
            GridError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GridError::ShipTooClose => write!(f, "Ship placement touches another ship"),
            GridError::OutOfBounds { x, y } => write!(f, "Cell ({}, {}) is outside the grid", x, y),
            GridError::AlreadyFired(cell) => write!(f, "Cell {} was already fired on", cell),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
