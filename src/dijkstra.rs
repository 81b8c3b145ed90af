use crate::algorithm::Algorithm;
use crate::cost::SearchCost;
use crate::error::Error;
use crate::grid::CellGrid;
use crate::path::Route;
use crate::search::SearchEngine;
use grid_2d::Coord;

impl SearchEngine {
    pub fn dijkstra<P, Cost>(
        &self,
        grid: &mut CellGrid<P, Cost>,
        start: Coord,
        destination: Coord,
    ) -> Result<Route<Cost>, Error>
    where
        Cost: SearchCost,
    {
        self.search_general(
            grid,
            start,
            destination,
            Algorithm::Dijkstra,
            |_, _| Cost::zero(),
            |cell| cell.g_cost(),
        )
    }
}
