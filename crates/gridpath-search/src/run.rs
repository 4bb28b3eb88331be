//! Strategy selection and the single search entry point.

use std::fmt;

use gridpath_core::{Grid, Point};

use crate::depth_first::depth_first;
use crate::guided::heuristic_guided;
use crate::path::reconstruct_path;
use crate::report::SearchReport;
use crate::uniform::uniform_cost;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Dijkstra-style search; guarantees a shortest path.
    UniformCost,
    /// A*-style search with a straight-line estimate; same path cost as
    /// uniform-cost, usually fewer cells explored.
    HeuristicGuided,
    /// Stack-discipline exploration; the discovered path is not
    /// necessarily shortest.
    DepthFirst,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UniformCost => "uniform-cost",
            Self::HeuristicGuided => "heuristic-guided",
            Self::DepthFirst => "depth-first",
        };
        f.write_str(name)
    }
}

/// Run one search on the grid and reconstruct the resulting path.
///
/// This is the single entry point the presentation layer calls. The grid's
/// per-cell search state is mutated in place and must be reset (see
/// [`Grid::reset_search_state`]) before the next run; the caller
/// serializes run/clear/run per grid instance.
pub fn run_search(strategy: Strategy, grid: &mut Grid) -> SearchReport {
    log::debug!(
        "running {strategy} search on {}x{} grid, start {} finish {}",
        grid.width(),
        grid.height(),
        grid.start(),
        grid.finish(),
    );
    let visited = match strategy {
        Strategy::UniformCost => uniform_cost(grid),
        Strategy::HeuristicGuided => heuristic_guided(grid),
        Strategy::DepthFirst => depth_first(grid),
    };
    let path = reconstruct_path(grid, grid.finish());
    let report = SearchReport { visited, path };
    log::debug!(
        "{strategy}: {} cells visited, path {}",
        report.visited.len(),
        if report.found(grid.start()) {
            "found"
        } else {
            "not found"
        },
    );
    report
}
