//! Ship kinds, rotations, footprint geometry and damage state.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::cell::Cell;

/// Shape of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    /// Single square.
    Dot,
    /// Straight line of four squares.
    I,
    /// Run of three squares with one square bent off the far end.
    L,
}

impl ShipKind {
    /// Length of the straight run from the anchor.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Dot => 1,
            ShipKind::I => 4,
            ShipKind::L => 3,
        }
    }

    /// Number of squares the ship covers, i.e. hits needed to sink it.
    pub const fn cell_count(self) -> usize {
        match self {
            ShipKind::Dot => 1,
            ShipKind::I => 4,
            ShipKind::L => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Dot => "DOT",
            ShipKind::I => "I",
            ShipKind::L => "L",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction a ship extends from its anchor cell.
///
/// `Left`/`Right` run along the row (`y` axis), `Up`/`Down` along the
/// column (`x` axis). `Left` and `Up` walk towards smaller coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Rotation {
    Left,
    Right,
    Up,
    Down,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::Left, Rotation::Right, Rotation::Up, Rotation::Down];

    /// Draw a rotation uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// `-1` for `Left`/`Up`, `+1` for `Right`/`Down`.
    pub const fn sign(self) -> i32 {
        match self {
            Rotation::Left | Rotation::Up => -1,
            Rotation::Right | Rotation::Down => 1,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Rotation::Left | Rotation::Right)
    }

    /// Unit step (dx, dy) along the ship's run.
    const fn step(self) -> (i32, i32) {
        if self.is_horizontal() {
            (0, self.sign())
        } else {
            (self.sign(), 0)
        }
    }

    /// Offset of the L appendix from the last cell of the run.
    const fn appendix(self) -> (i32, i32) {
        if self.is_horizontal() {
            (-self.sign(), 0)
        } else {
            (0, self.sign())
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rotation::Left => "left",
            Rotation::Right => "right",
            Rotation::Up => "up",
            Rotation::Down => "down",
        };
        f.write_str(s)
    }
}

/// Cells covered by a ship of `kind` and `rotation` anchored at `anchor`.
///
/// The anchor is always the first element. Cells may lie off the board.
pub fn footprint(kind: ShipKind, rotation: Rotation, anchor: Cell) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(kind.cell_count());
    if kind == ShipKind::Dot {
        cells.push(anchor);
        return cells;
    }
    let (dx, dy) = rotation.step();
    for k in 0..kind.length() as i32 {
        cells.push(anchor.offset(dx * k, dy * k));
    }
    if kind == ShipKind::L {
        let end = (kind.length() - 1) as i32;
        let (ax, ay) = rotation.appendix();
        cells.push(anchor.offset(dx * end + ax, dy * end + ay));
    }
    cells
}

/// Identifier of a ship, unique within its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub u32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipStatus {
    Alive,
    Died,
}

/// A ship of the fleet with its placement and damage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    kind: ShipKind,
    rotation: Rotation,
    position: Option<Cell>,
    hit_count: usize,
    status: ShipStatus,
}

impl Ship {
    /// Unplaced, undamaged ship.
    pub fn new(id: ShipId, kind: ShipKind, rotation: Rotation) -> Self {
        Self {
            id,
            kind,
            rotation,
            position: None,
            hit_count: 0,
            status: ShipStatus::Alive,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Rotation the ship was built with. A DOT carries one too but it has no
    /// effect on its footprint.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn cell_count(&self) -> usize {
        self.kind.cell_count()
    }

    /// Anchor cell, once placed.
    pub fn position(&self) -> Option<Cell> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    pub fn status(&self) -> ShipStatus {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.status == ShipStatus::Alive
    }

    /// Footprint anchored at `anchor` with this ship's shape.
    pub fn footprint_at(&self, anchor: Cell) -> Vec<Cell> {
        footprint(self.kind, self.rotation, anchor)
    }

    /// Footprint at the ship's own position, empty while unplaced.
    pub fn cells(&self) -> Vec<Cell> {
        self.position
            .map(|anchor| self.footprint_at(anchor))
            .unwrap_or_default()
    }

    pub(crate) fn set_position(&mut self, cell: Cell) {
        self.position = Some(cell);
    }

    /// Register one hit. Returns `true` if this hit sank the ship.
    ///
    /// Hits are not deduplicated; the caller must not report the same
    /// square twice.
    pub fn hit(&mut self) -> bool {
        self.hit_count += 1;
        if self.status == ShipStatus::Alive && self.hit_count >= self.cell_count() {
            self.status = ShipStatus::Died;
            return true;
        }
        false
    }
}
