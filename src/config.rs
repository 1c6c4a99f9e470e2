use alloc::vec::Vec;

use crate::common::GridError;
use crate::ship::ShipKind;

pub const BOARD_SIZE: usize = 10;
/// Largest board whose columns can still be labelled `A`..`Z`.
pub const MAX_BOARD_SIZE: usize = 26;

pub const DOT_COUNT: usize = 2;
pub const I_COUNT: usize = 1;
pub const L_COUNT: usize = 1;

/// Board size and fleet composition for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub size: usize,
    pub dots: usize,
    pub i_ships: usize,
    pub l_ships: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            dots: DOT_COUNT,
            i_ships: I_COUNT,
            l_ships: L_COUNT,
        }
    }
}

impl GameConfig {
    /// Standard fleet on a board of `size`.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.size == 0 {
            return Err(GridError::InvalidConfig("board size must be at least 1"));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(GridError::InvalidConfig("board size must be at most 26"));
        }
        let ships = self
            .checked_fleet_len()
            .ok_or(GridError::InvalidConfig("fleet is too large"))?;
        if ships == 0 {
            return Err(GridError::InvalidConfig("fleet must contain at least one ship"));
        }
        // every ship needs at least one square
        if ships > self.size * self.size {
            return Err(GridError::InvalidConfig(
                "fleet has more ships than the board has squares",
            ));
        }
        Ok(())
    }

    fn checked_fleet_len(&self) -> Option<usize> {
        self.dots.checked_add(self.i_ships)?.checked_add(self.l_ships)
    }

    /// Total number of ships, saturating at `usize::MAX`.
    pub fn fleet_len(&self) -> usize {
        self.dots.saturating_add(self.i_ships).saturating_add(self.l_ships)
    }

    /// Ship kinds in construction order: DOTs, then I ships, then L ships.
    ///
    /// Only meaningful for a configuration that passes [`validate`](Self::validate).
    pub fn fleet(&self) -> Vec<ShipKind> {
        let mut kinds = Vec::new();
        kinds.extend(core::iter::repeat(ShipKind::Dot).take(self.dots));
        kinds.extend(core::iter::repeat(ShipKind::I).take(self.i_ships));
        kinds.extend(core::iter::repeat(ShipKind::L).take(self.l_ships));
        kinds
    }
}
