//! The [`Grid`] type — sole owner of all cells, plus the editing and
//! reset operations the presentation layer calls between searches.

use std::fmt;

use crate::cell::{Cell, CellKind};
use crate::geom::Point;

/// Errors from grid construction and editing.
///
/// Searches never fail: "no path" is a normal outcome, reported as data
/// (a partial trace and a reconstructed path that does not reach start).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside the grid bounds.
    OutOfBounds(Point),
    /// Start and finish were placed on the same cell.
    StartIsFinish(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is out of grid bounds"),
            Self::StartIsFinish(p) => write!(f, "start and finish both placed at {p}"),
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular grid of [`Cell`]s with fixed dimensions and fixed
/// start/finish placement.
///
/// Cells live in a flat row-major buffer; the cell at `Point { x, y }` is
/// at index `y * width + x`. Strategies borrow the grid mutably and update
/// per-cell search state in place, but never add or remove cells.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
    start: Point,
    finish: Point,
}

impl Grid {
    /// Create a grid with start and finish at the given coordinates and
    /// every other cell empty.
    ///
    /// Fails if either endpoint lies outside the bounds or if the two
    /// coincide.
    pub fn new(width: i32, height: i32, start: Point, finish: Point) -> Result<Self, GridError> {
        let in_bounds = |p: Point| p.x >= 0 && p.x < width && p.y >= 0 && p.y < height;
        if !in_bounds(start) {
            return Err(GridError::OutOfBounds(start));
        }
        if !in_bounds(finish) {
            return Err(GridError::OutOfBounds(finish));
        }
        if start == finish {
            return Err(GridError::StartIsFinish(start));
        }
        Ok(Self::build(width, height, start, finish))
    }

    /// The default board layout: 50×20 cells, start at column 15 row 5,
    /// finish at column 38 row 13.
    pub fn with_default_layout() -> Self {
        Self::build(50, 20, Point::new(15, 5), Point::new(38, 13))
    }

    // Endpoints must already be validated.
    fn build(width: i32, height: i32, start: Point, finish: Point) -> Self {
        let mut grid = Self {
            cells: vec![Cell::default(); (width * height) as usize],
            width,
            height,
            start,
            finish,
        };
        if let Some(c) = grid.at_mut(start) {
            c.kind = CellKind::Start;
        }
        if let Some(c) = grid.at_mut(finish) {
            c.kind = CellKind::Finish;
        }
        grid
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The start cell's coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The finish cell's coordinate.
    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.idx(p).map(|i| &mut self.cells[i])
    }

    /// The kind of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        self.at(p).map(|c| c.kind)
    }

    /// Edit the wall at `p`.
    ///
    /// Flips the cell between `Empty` and `Wall`, or sets `Wall`
    /// unconditionally when `force_wall` is true (the drag-to-draw edit).
    /// Targeting the start or finish cell is an accepted no-op; their
    /// kinds are never altered.
    pub fn toggle_wall(&mut self, p: Point, force_wall: bool) -> Result<(), GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds(p));
        }
        if p == self.start || p == self.finish {
            return Ok(());
        }
        if let Some(c) = self.at_mut(p) {
            c.kind = if force_wall || c.kind != CellKind::Wall {
                CellKind::Wall
            } else {
                CellKind::Empty
            };
        }
        Ok(())
    }

    /// Reset every cell's search state so another search can run.
    ///
    /// With `preserve_walls` this is "clear path": walls stay. Without it
    /// this is "clear board": walls revert to empty. Start and finish
    /// placement is kept in both cases.
    pub fn reset_search_state(&mut self, preserve_walls: bool) {
        for c in self.cells.iter_mut() {
            c.clear_search_state();
            if !preserve_walls && c.kind == CellKind::Wall {
                c.kind = CellKind::Empty;
            }
        }
    }

    /// Row-major iterator over every coordinate in the grid.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> {
        self.points().map(|p| (p, &self.cells[(p.y * self.width + p.x) as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> Grid {
        Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap()
    }

    #[test]
    fn new_places_endpoints() {
        let g = grid_3x3();
        assert_eq!(g.kind(Point::new(0, 0)), Some(CellKind::Start));
        assert_eq!(g.kind(Point::new(2, 2)), Some(CellKind::Finish));
        assert_eq!(g.kind(Point::new(1, 1)), Some(CellKind::Empty));
        assert_eq!(g.size(), Point::new(3, 3));
    }

    #[test]
    fn new_rejects_out_of_bounds() {
        let err = Grid::new(3, 3, Point::new(3, 0), Point::new(2, 2)).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds(Point::new(3, 0)));
        let err = Grid::new(3, 3, Point::new(0, 0), Point::new(0, -1)).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds(Point::new(0, -1)));
        // Empty grid: nothing is in bounds.
        assert!(Grid::new(0, 0, Point::ZERO, Point::new(1, 1)).is_err());
    }

    #[test]
    fn new_rejects_coincident_endpoints() {
        let err = Grid::new(3, 3, Point::new(1, 1), Point::new(1, 1)).unwrap_err();
        assert_eq!(err, GridError::StartIsFinish(Point::new(1, 1)));
    }

    #[test]
    fn toggle_wall_flips() {
        let mut g = grid_3x3();
        let p = Point::new(1, 1);
        g.toggle_wall(p, false).unwrap();
        assert_eq!(g.kind(p), Some(CellKind::Wall));
        g.toggle_wall(p, false).unwrap();
        assert_eq!(g.kind(p), Some(CellKind::Empty));
    }

    #[test]
    fn toggle_wall_forced_is_idempotent() {
        let mut g = grid_3x3();
        let p = Point::new(2, 0);
        g.toggle_wall(p, true).unwrap();
        g.toggle_wall(p, true).unwrap();
        assert_eq!(g.kind(p), Some(CellKind::Wall));
    }

    #[test]
    fn toggle_wall_never_touches_endpoints() {
        let mut g = grid_3x3();
        g.toggle_wall(g.start(), false).unwrap();
        g.toggle_wall(g.finish(), true).unwrap();
        assert_eq!(g.kind(g.start()), Some(CellKind::Start));
        assert_eq!(g.kind(g.finish()), Some(CellKind::Finish));
    }

    #[test]
    fn toggle_wall_out_of_bounds() {
        let mut g = grid_3x3();
        let err = g.toggle_wall(Point::new(5, 5), false).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds(Point::new(5, 5)));
    }

    #[test]
    fn reset_preserving_walls() {
        let mut g = grid_3x3();
        let wall = Point::new(1, 0);
        g.toggle_wall(wall, false).unwrap();
        if let Some(c) = g.at_mut(Point::new(0, 1)) {
            c.distance = 2.0;
            c.visited = true;
            c.predecessor = Some(Point::new(0, 0));
        }
        g.reset_search_state(true);
        assert_eq!(g.kind(wall), Some(CellKind::Wall));
        let c = g.at(Point::new(0, 1)).unwrap();
        assert_eq!(c.distance, f64::INFINITY);
        assert!(!c.visited);
        assert_eq!(c.predecessor, None);
    }

    #[test]
    fn reset_clearing_board() {
        let mut g = grid_3x3();
        g.toggle_wall(Point::new(1, 0), false).unwrap();
        g.reset_search_state(false);
        assert_eq!(g.kind(Point::new(1, 0)), Some(CellKind::Empty));
        // Endpoints survive a board clear.
        assert_eq!(g.kind(g.start()), Some(CellKind::Start));
        assert_eq!(g.kind(g.finish()), Some(CellKind::Finish));
    }

    #[test]
    fn at_out_of_bounds_is_none() {
        let g = grid_3x3();
        assert!(g.at(Point::new(-1, 0)).is_none());
        assert!(g.at(Point::new(0, 3)).is_none());
        assert!(!g.contains(Point::new(3, 3)));
    }

    #[test]
    fn points_are_row_major() {
        let g = grid_3x3();
        let pts: Vec<_> = g.points().collect();
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[1], Point::new(1, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(pts[8], Point::new(2, 2));
    }

    #[test]
    fn iter_pairs_points_with_cells() {
        let mut g = grid_3x3();
        g.toggle_wall(Point::new(1, 0), false).unwrap();
        let walls: Vec<Point> = g
            .iter()
            .filter(|(_, c)| c.kind == CellKind::Wall)
            .map(|(p, _)| p)
            .collect();
        assert_eq!(walls, vec![Point::new(1, 0)]);
        assert_eq!(g.iter().count(), 9);
    }

    #[test]
    fn default_layout() {
        let g = Grid::with_default_layout();
        assert_eq!(g.size(), Point::new(50, 20));
        assert_eq!(g.kind(Point::new(15, 5)), Some(CellKind::Start));
        assert_eq!(g.kind(Point::new(38, 13)), Some(CellKind::Finish));
    }

    #[test]
    fn error_display() {
        let e = GridError::OutOfBounds(Point::new(9, 9));
        assert_eq!(e.to_string(), "coordinate (9, 9) is out of grid bounds");
        let e = GridError::StartIsFinish(Point::new(1, 2));
        assert_eq!(e.to_string(), "start and finish both placed at (1, 2)");
    }
}
