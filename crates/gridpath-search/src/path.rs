//! Path reconstruction from predecessor backlinks.

use gridpath_core::{Grid, Point};

/// Walk predecessor links backward from `finish` and return the chain in
/// start-to-finish order.
///
/// Never mutates the grid and is safe to call after any strategy,
/// including one that terminated early: the result reflects whatever
/// backlink chain existed at that moment. If `finish` has no predecessor
/// the result is just `[finish]`; callers distinguish "no path" from a
/// real path by checking whether the first element is the start cell.
pub fn reconstruct_path(grid: &Grid, finish: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(finish);
    while let Some(p) = cur {
        path.push(p);
        cur = grid.at(p).and_then(|c| c.predecessor);
    }
    path.reverse();
    path
}
