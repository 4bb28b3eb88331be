//! **gridpath-search** — search strategies for the gridpath engine.
//!
//! Three interchangeable strategies explore a [`Grid`](gridpath_core::Grid)
//! from its start cell toward its finish cell, each producing a visitation
//! trace and leaving predecessor backlinks for path reconstruction:
//!
//! - **Uniform-cost** ([`uniform_cost`]): Dijkstra-style, shortest path
//!   guaranteed.
//! - **Heuristic-guided** ([`heuristic_guided`]): A*-style with a
//!   straight-line estimate; equal path cost, usually fewer cells
//!   explored.
//! - **Depth-first** ([`depth_first`]): stack-discipline exploration; the
//!   discovered path is not necessarily shortest.
//!
//! [`run_search`] dispatches on [`Strategy`], reconstructs the path and
//! bundles both into a [`SearchReport`]; [`SearchReport::playback`] then
//! yields the frame sequence an animated presentation walks. Searches are
//! synchronous single passes over fully owned state: "no path" is a
//! normal data outcome, never an error, and any pacing or cancellation of
//! trace playback is the caller's concern.
//!
//! The two sorted strategies keep the full cell set as their frontier and
//! re-sort it with a stable sort every iteration; together with
//! unconditional neighbor relaxation this fixes the exact visitation
//! order, tie-breaks included, that the tests pin down.

mod depth_first;
mod distance;
mod guided;
mod neighbors;
mod path;
mod report;
mod run;
mod uniform;

pub use depth_first::depth_first;
pub use distance::{euclidean, manhattan};
pub use guided::heuristic_guided;
pub use neighbors::unvisited_neighbors;
pub use path::reconstruct_path;
pub use report::{PlaybackStep, SearchReport};
pub use run::{Strategy, run_search};
