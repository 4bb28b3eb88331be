//! The [`Cell`] type — per-cell kind and search state.

use crate::geom::Point;

/// What a grid cell is.
///
/// Exactly one cell per grid is `Start` and one is `Finish`; both are fixed
/// for the grid's lifetime. A cell may flip between `Empty` and `Wall`
/// repeatedly, but never to or from `Start`/`Finish`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Start,
    Finish,
    Wall,
}

/// One grid cell: its kind plus the mutable search state a strategy
/// writes during a run.
///
/// The cell's coordinates are not stored here; the owning grid addresses
/// cells by position, so a cell's coordinate is its arena index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    /// Tentative cost from the start cell. `INFINITY` until relaxed.
    pub distance: f64,
    /// Straight-line distance to the finish cell. `INFINITY` until the
    /// heuristic-guided strategy initializes it; 0.0 on the finish cell.
    pub heuristic: f64,
    /// Set once a strategy has accepted (finalized) this cell.
    pub visited: bool,
    /// Coordinate of the cell this one was relaxed from.
    pub predecessor: Option<Point>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            kind: CellKind::Empty,
            distance: f64::INFINITY,
            heuristic: f64::INFINITY,
            visited: false,
            predecessor: None,
        }
    }
}

impl Cell {
    /// Create a cell of the given kind with fresh search state.
    pub fn new(kind: CellKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Whether this cell blocks traversal.
    #[inline]
    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    /// Reset the search state (distance, heuristic, visited, predecessor)
    /// without touching the kind.
    pub fn clear_search_state(&mut self) {
        self.distance = f64::INFINITY;
        self.heuristic = f64::INFINITY;
        self.visited = false;
        self.predecessor = None;
    }
}
