use crate::grid::CellGrid;
use crate::metadata::SearchMetadata;
use direction::{Direction, Directions};
use grid_2d::Coord;
use std::slice;

/// Open and closed lists as they stood when a search loop ended.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    pub open: Vec<Coord>,
    pub closed: Vec<Coord>,
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Route<Cost> {
    /// Cells from just after the start up to and including the destination.
    /// A search from a cell to itself yields that cell alone, and an
    /// unreachable destination yields an empty path.
    pub path: Vec<Coord>,
    pub frontier: Frontier,
    pub metadata: SearchMetadata<Cost>,
}

impl<Cost> Route<Cost> {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn walk(&self, start: Coord) -> PathWalk {
        PathWalk::new(start, &self.path)
    }

    pub fn directions(&self, start: Coord) -> Vec<Direction> {
        self.walk(start)
            .filter_map(|(from, to)| direction_between(from, to))
            .collect()
    }
}

fn direction_between(from: Coord, to: Coord) -> Option<Direction> {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    Directions.into_iter().find(|direction| {
        let offset = direction.coord();
        offset.x == dx && offset.y == dy
    })
}

/// Yields each step of a path as a `(from, to)` pair, beginning at the start.
pub struct PathWalk<'a> {
    current_coord: Coord,
    coords: slice::Iter<'a, Coord>,
}

impl<'a> PathWalk<'a> {
    pub fn new(start: Coord, path: &'a [Coord]) -> Self {
        Self {
            current_coord: start,
            coords: path.iter(),
        }
    }
}

impl<'a> Iterator for PathWalk<'a> {
    type Item = (Coord, Coord);
    fn next(&mut self) -> Option<Self::Item> {
        let &next_coord = self.coords.next()?;
        let step = (self.current_coord, next_coord);
        self.current_coord = next_coord;
        Some(step)
    }
}

pub(crate) fn retrace<P, Cost: Copy>(
    grid: &CellGrid<P, Cost>,
    start: usize,
    destination: usize,
) -> Vec<Coord> {
    if start == destination {
        return vec![grid.cell(start).coord()];
    }

    let mut path = Vec::new();
    let mut index = destination;
    while index != start {
        let cell = grid.cell(index);
        path.push(cell.coord());
        match cell.parent() {
            Some(parent) => index = parent,
            None => break,
        }
    }
    path.reverse();
    path
}
