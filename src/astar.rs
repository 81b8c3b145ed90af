use crate::algorithm::Algorithm;
use crate::cost::{step_cost, SearchCost};
use crate::error::Error;
use crate::grid::CellGrid;
use crate::path::Route;
use crate::search::SearchEngine;
use grid_2d::Coord;

impl SearchEngine {
    /// A* with the grid's own step cost as the estimate. The open list is
    /// ordered by total cost, then by estimate, so among equally promising
    /// cells the one nearest the destination is expanded first.
    pub fn astar<P, Cost>(
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
            Algorithm::AStar,
            step_cost::<Cost>,
            |cell| (cell.f_cost(), cell.h_cost()),
        )
    }
}
