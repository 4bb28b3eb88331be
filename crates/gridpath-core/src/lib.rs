//! **gridpath-core** — grid model for the gridpath pathfinding engine.
//!
//! This crate owns the board: the [`Point`] coordinate primitive, the
//! per-cell record ([`Cell`], [`CellKind`]) holding mutable search state,
//! and the [`Grid`] arena with its editing operations (wall toggling and
//! search-state resets). The search strategies themselves live in the
//! `gridpath-search` crate and borrow the grid mutably while they run.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellKind};
pub use geom::Point;
pub use grid::{Grid, GridError};
