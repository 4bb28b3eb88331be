//! Heuristic-guided (A*-style) search.

use gridpath_core::{Grid, Point};

use crate::distance::euclidean;
use crate::neighbors::unvisited_neighbors;

/// Run a heuristic-guided search from the grid's start toward its finish.
///
/// Control structure is identical to [`uniform_cost`](crate::uniform_cost)
/// with two differences: initialization precomputes every cell's
/// straight-line distance to the finish and seeds the start's tentative
/// distance with its own estimate (not zero), and relaxation adds the
/// neighbor's estimate on top of the unit step. The selection key is the
/// tentative distance directly, which after relaxation already embeds
/// cost-so-far plus estimate.
pub fn heuristic_guided(grid: &mut Grid) -> Vec<Point> {
    let start = grid.start();
    let finish = grid.finish();
    let mut trace = Vec::new();

    // Heuristic initialization, once per search invocation.
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let h = if p == finish { 0.0 } else { euclidean(p, finish) };
            if let Some(c) = grid.at_mut(p) {
                c.heuristic = h;
                if p == start {
                    c.distance = h;
                }
            }
        }
    }

    let mut frontier: Vec<Point> = grid.points().collect();
    let mut nbuf = Vec::with_capacity(4);

    while !frontier.is_empty() {
        frontier.sort_by(|a, b| distance_at(grid, *a).total_cmp(&distance_at(grid, *b)));
        let cur = frontier.remove(0);

        let Some(cell) = grid.at(cur) else { continue };
        if cell.is_wall() {
            continue;
        }
        let cur_dist = cell.distance;
        if cur_dist == f64::INFINITY {
            return trace;
        }

        if let Some(c) = grid.at_mut(cur) {
            c.visited = true;
        }
        trace.push(cur);
        if cur == finish {
            return trace;
        }

        // Unconditional, like the uniform-cost strategy.
        unvisited_neighbors(grid, cur, &mut nbuf);
        for &np in nbuf.iter() {
            if let Some(n) = grid.at_mut(np) {
                n.distance = cur_dist + 1.0 + n.heuristic;
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
