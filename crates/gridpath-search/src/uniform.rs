//! Uniform-cost (Dijkstra-style) search.

use gridpath_core::{Grid, Point};

use crate::neighbors::unvisited_neighbors;

/// Run a uniform-cost search from the grid's start toward its finish.
///
/// Returns the visitation trace: every cell in the order it was accepted,
/// including the finish cell when reached. Per-cell search state is
/// mutated in place; call [`Grid::reset_search_state`] before re-running.
///
/// The frontier starts as the full cell set and is re-sorted ascending by
/// tentative distance every iteration with a stable sort, so equal
/// distances keep their prior relative (initially row-major) order. A
/// binary heap is deliberately not used: relaxation below is
/// unconditional, so a heap with stale entries would visit in a
/// different order.
pub fn uniform_cost(grid: &mut Grid) -> Vec<Point> {
    let start = grid.start();
    let finish = grid.finish();
    let mut trace = Vec::new();

    if let Some(c) = grid.at_mut(start) {
        c.distance = 0.0;
    }
    let mut frontier: Vec<Point> = grid.points().collect();
    let mut nbuf = Vec::with_capacity(4);

    while !frontier.is_empty() {
        frontier.sort_by(|a, b| distance_at(grid, *a).total_cmp(&distance_at(grid, *b)));
        let cur = frontier.remove(0);

        let Some(cell) = grid.at(cur) else { continue };
        if cell.is_wall() {
            // Walls are discarded before they can propagate.
            continue;
        }
        let cur_dist = cell.distance;
        if cur_dist == f64::INFINITY {
            // Everything left is unreachable.
            return trace;
        }

        if let Some(c) = grid.at_mut(cur) {
            c.visited = true;
        }
        trace.push(cur);
        if cur == finish {
            return trace;
        }

        // Unconditional relaxation: no "only if smaller" guard. The
        // monotone visitation order of the sorted frontier is what keeps
        // final distances correct; a later-accepted cell overwrites the
        // predecessor of a shared unvisited neighbor.
        unvisited_neighbors(grid, cur, &mut nbuf);
        for &np in nbuf.iter() {
            if let Some(n) = grid.at_mut(np) {
                n.distance = cur_dist + 1.0;
                n.predecessor = Some(cur);
            }
        }
    }

    trace
}

#[inline]
fn distance_at(grid: &Grid, p: Point) -> f64 {
    grid.at(p).map_or(f64::INFINITY, |c| c.distance)
}
