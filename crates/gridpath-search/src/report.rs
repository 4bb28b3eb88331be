//! Search results: the visitation trace, the reconstructed path, and the
//! playback frame sequence a presentation layer consumes.

use gridpath_core::Point;

/// The outcome of one search run.
///
/// `visited` is the append-only visitation trace (cells in acceptance
/// order, finish included when reached); `path` is the predecessor chain
/// from start to finish, or a partial chain whose head is not the start
/// when no path exists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub visited: Vec<Point>,
    pub path: Vec<Point>,
}

/// One frame of trace playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackStep {
    /// A cell accepted during exploration.
    Visit(Point),
    /// An interior cell of the final path.
    PathHop(Point),
}

impl SearchReport {
    /// Whether the path actually reaches the given start cell.
    ///
    /// Reconstruction always returns at least the finish cell, so "no
    /// path" is detected by the head of the chain, not by emptiness.
    pub fn found(&self, start: Point) -> bool {
        self.path.first() == Some(&start)
    }

    /// The frames an animated playback walks, in order: every trace cell
    /// after the start, then every interior path cell. The start cell is
    /// never a frame, and the last trace entry is replaced by the path
    /// frames. Pacing is entirely the caller's concern; the core never
    /// schedules.
    pub fn playback(&self) -> impl Iterator<Item = PlaybackStep> + '_ {
        let visits: &[Point] = if self.visited.len() > 1 {
            &self.visited[1..self.visited.len() - 1]
        } else {
            &[]
        };
        let hops: &[Point] = if self.visited.len() > 1 && self.path.len() > 2 {
            &self.path[1..self.path.len() - 1]
        } else {
            &[]
        };
        visits
            .iter()
            .copied()
            .map(PlaybackStep::Visit)
            .chain(hops.iter().copied().map(PlaybackStep::PathHop))
    }
}
