use crate::algorithm::Algorithm;
use crate::cost::SearchCost;
use crate::error::Error;
use crate::grid::CellGrid;
use crate::path::Route;
use crate::search::SearchEngine;
use grid_2d::Coord;

/// Tracks the selected start, destination and algorithm, and runs one search
/// each time that selection changes. Calling `update` every frame with an
/// unchanged selection does not search again.
#[derive(Debug, Clone)]
pub struct PathSession<Cost = f32> {
    engine: SearchEngine,
    algorithm: Algorithm,
    start: Option<Coord>,
    destination: Option<Coord>,
    search_triggered: bool,
    route: Option<Route<Cost>>,
}

impl<Cost: SearchCost> PathSession<Cost> {
    pub fn new(engine: SearchEngine, algorithm: Algorithm) -> Self {
        Self {
            engine,
            algorithm,
            start: None,
            destination: None,
            search_triggered: false,
            route: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn destination(&self) -> Option<Coord> {
        self.destination
    }

    /// Result of the most recent search, if any has run for the current
    /// selection or an earlier one.
    pub fn route(&self) -> Option<&Route<Cost>> {
        self.route.as_ref()
    }

    pub fn is_search_triggered(&self) -> bool {
        self.search_triggered
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.algorithm != algorithm {
            self.algorithm = algorithm;
            self.search_triggered = false;
        }
    }

    pub fn select_start(&mut self, start: Coord) {
        if self.start != Some(start) {
            self.start = Some(start);
            self.search_triggered = false;
        }
    }

    pub fn select_destination(&mut self, destination: Coord) {
        if self.destination != Some(destination) {
            self.destination = Some(destination);
            self.search_triggered = false;
        }
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.destination = None;
        self.search_triggered = false;
        self.route = None;
    }

    /// Searches if both ends are selected and the selection changed since the
    /// last search. Returns whether a search ran.
    pub fn update<P>(&mut self, grid: &mut CellGrid<P, Cost>) -> Result<bool, Error> {
        if self.search_triggered {
            return Ok(false);
        }
        let (start, destination) = match (self.start, self.destination) {
            (Some(start), Some(destination)) => (start, destination),
            _ => return Ok(false),
        };

        log::debug!(
            "selection changed, searching {:?} -> {:?} with {}",
            start,
            destination,
            self.algorithm
        );
        let route = self
            .engine
            .find_path(grid, start, destination, self.algorithm)?;
        self.route = Some(route);
        self.search_triggered = true;
        Ok(true)
    }
}
