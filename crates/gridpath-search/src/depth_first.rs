//! Depth-first exploration.

use gridpath_core::{Grid, Point};

use crate::neighbors::unvisited_neighbors;

/// Run a depth-first exploration from the grid's start toward its finish.
///
/// The frontier is a plain stack: neighbors are pushed in the fixed order
/// up, down, left, right, so "right" is explored first on the next pop.
/// There is no visited check on pop, so a cell pushed by two different
/// parents before its first acceptance can appear in the trace twice.
/// The discovered path is not necessarily shortest; use
/// [`uniform_cost`](crate::uniform_cost) for that guarantee.
pub fn depth_first(grid: &mut Grid) -> Vec<Point> {
    let start = grid.start();
    let finish = grid.finish();
    let mut trace = Vec::new();

    if let Some(c) = grid.at_mut(start) {
        c.distance = 0.0;
    }
    let mut stack = vec![start];
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = stack.pop() {
        let Some(cell) = grid.at(cur) else { continue };
        if cell.is_wall() {
            continue;
        }
        let cur_dist = cell.distance;
        if cur_dist == f64::INFINITY {
            // Parity with the sorted strategies; unreachable in normal
            // flow since only relaxed cells get pushed.
            return trace;
        }

        if let Some(c) = grid.at_mut(cur) {
            c.visited = true;
        }
        trace.push(cur);
        if cur == finish {
            return trace;
        }

        unvisited_neighbors(grid, cur, &mut nbuf);
        for &np in nbuf.iter() {
            if let Some(n) = grid.at_mut(np) {
                n.distance = cur_dist + 1.0;
                n.predecessor = Some(cur);
            }
            stack.push(np);
        }
    }

    trace
}
