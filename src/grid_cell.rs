use crate::cell::Cell;
use crate::ship::ShipId;

/// Result of firing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellStatus {
    #[default]
    Empty,
    Miss,
    Hit,
}

/// Mutable state of one board square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    cell: Cell,
    ship_id: Option<ShipId>,
    status: CellStatus,
    is_near: bool,
}

impl GridCell {
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            ship_id: None,
            status: CellStatus::Empty,
            is_near: false,
        }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn x(&self) -> i32 {
        self.cell.x
    }

    pub fn y(&self) -> i32 {
        self.cell.y
    }

    /// Ship occupying this square, if any.
    pub fn ship_id(&self) -> Option<ShipId> {
        self.ship_id
    }

    pub fn is_occupied(&self) -> bool {
        self.ship_id.is_some()
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    /// Whether the square borders a placed ship. Display hint only.
    pub fn is_near(&self) -> bool {
        self.is_near
    }

    pub(crate) fn set_ship_id(&mut self, id: ShipId) {
        self.ship_id = Some(id);
    }

    pub(crate) fn set_status(&mut self, status: CellStatus) {
        self.status = status;
    }

    pub(crate) fn mark_near(&mut self) {
        self.is_near = true;
    }
}
