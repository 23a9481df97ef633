//! Route finding on sonar treasure-hunt sea maps.
//!
//! This crate provides the grid graph and the search used to plot a
//! boat's shortest route to the treasure:
//!
//! - [`Grid`] owns every [`Cell`] of a map parsed from text, enumerates
//!   8-way neighbors and moves the boat.
//! - [`PriorityQueue`] is the ordered frontier, with a caller-supplied
//!   priority relation.
//! - [`Grid::find_path`], [`Grid::retrace_path`] and [`Grid::plot_path`]
//!   implement A* with the octile step metric ([`octile`]) as both edge
//!   cost and heuristic.
//!
//! Search state lives on the cells themselves. Parent links are
//! [`CellId`] handles into the grid, never references.

mod astar;
mod cell;
mod distance;
mod grid;
mod queue;

pub use astar::SearchSummary;
pub use cell::{Cell, CellId};
pub use distance::{DIAGONAL_COST, ORTHOGONAL_COST, octile};
pub use grid::{BOAT, Grid, ISLAND, MapError, PATH, SEA, TREASURE};
pub use queue::{PriorityQueue, QueueError};
