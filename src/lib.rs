//! Shortest paths over a 2D grid of cells laid across a continuous world.
//!
//! A [`CellGrid`] is built once from an [`ObstacleMap`]; a [`SearchEngine`]
//! then finds routes across it with Dijkstra or A*. Moves go to any of the
//! eight neighbouring cells and cost the Manhattan distance between the two
//! cells, so a diagonal step costs 2.

extern crate best;
extern crate direction;
extern crate grid_2d;
extern crate log;
extern crate num_traits;

mod algorithm;
mod astar;
mod cell;
mod config;
mod cost;
mod dijkstra;
mod error;
mod grid;
mod layout;
mod metadata;
mod path;
mod search;
mod session;

pub use crate::algorithm::*;
pub use crate::cell::*;
pub use crate::config::*;
pub use crate::cost::*;
pub use crate::error::*;
pub use crate::grid::*;
pub use crate::layout::*;
pub use crate::metadata::*;
pub use crate::path::*;
pub use crate::search::*;
pub use crate::session::*;

pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
