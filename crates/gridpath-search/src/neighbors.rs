//! Neighbor enumeration shared by all three search strategies.

use gridpath_core::{Grid, Point};

/// Append into `buf` the orthogonal neighbors of `p` that are in bounds
/// and not yet visited, in the fixed order up, down, left, right.
///
/// `buf` is cleared first; callers keep one buffer alive across the whole
/// search to avoid reallocating per step. Walls are NOT filtered here:
/// they may receive relaxed distances, and each strategy discards them
/// when popped. Never yields `p` itself or a diagonal.
pub fn unvisited_neighbors(grid: &Grid, p: Point, buf: &mut Vec<Point>) {
    buf.clear();
    const DIRS: [Point; 4] = [
        Point::new(0, -1), // up
        Point::new(0, 1),  // down
        Point::new(-1, 0), // left
        Point::new(1, 0),  // right
    ];
    for d in DIRS {
        let n = p + d;
        if let Some(c) = grid.at(n) {
            if !c.visited {
                buf.push(n);
            }
        }
    }
}
