use crate::algorithm::Algorithm;
use crate::cell::Cell;
use crate::config::SearchConfig;
use crate::cost::{step_cost, SearchCost};
use crate::error::Error;
use crate::grid::CellGrid;
use crate::metadata::SearchMetadata;
use crate::path::{self, Frontier, Route};
use best::BestMap;
use grid_2d::Coord;

/// Cells discovered but not yet finalised, kept in discovery order.
#[derive(Debug, Clone)]
pub(crate) struct OpenList {
    entries: Vec<usize>,
    members: Vec<bool>,
}

impl OpenList {
    pub(crate) fn new(num_cells: usize) -> Self {
        Self {
            entries: Vec::new(),
            members: vec![false; num_cells],
        }
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.members[index]
    }

    pub(crate) fn insert(&mut self, index: usize) {
        if !self.members[index] {
            self.members[index] = true;
            self.entries.push(index);
        }
    }

    /// Removes and returns the entry with the smallest key. Among entries
    /// with equal keys the one discovered first wins.
    pub(crate) fn pop_best<K, F>(&mut self, key_fn: F) -> Option<usize>
    where
        K: PartialOrd,
        F: Fn(usize) -> K,
    {
        let mut best_map = BestMap::new();
        for (position, &index) in self.entries.iter().enumerate() {
            best_map.insert_lt(key_fn(index), position);
        }
        let position = best_map.into_value()?;
        let index = self.entries.remove(position);
        self.members[index] = false;
        Some(index)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().cloned()
    }
}

/// Finalised cells in the order they were closed. Nothing is ever reopened.
#[derive(Debug, Clone)]
pub(crate) struct ClosedList {
    entries: Vec<usize>,
    members: Vec<bool>,
}

impl ClosedList {
    pub(crate) fn new(num_cells: usize) -> Self {
        Self {
            entries: Vec::new(),
            members: vec![false; num_cells],
        }
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.members[index]
    }

    pub(crate) fn insert(&mut self, index: usize) {
        if !self.members[index] {
            self.members[index] = true;
            self.entries.push(index);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().cloned()
    }
}

/// Runs searches over a `CellGrid`. Holds no state between calls; the open
/// and closed lists of a search live only as long as that search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn find_path<P, Cost>(
        &self,
        grid: &mut CellGrid<P, Cost>,
        start: Coord,
        destination: Coord,
        algorithm: Algorithm,
    ) -> Result<Route<Cost>, Error>
    where
        Cost: SearchCost,
    {
        match algorithm {
            Algorithm::Dijkstra => self.dijkstra(grid, start, destination),
            Algorithm::AStar => self.astar(grid, start, destination),
        }
    }

    pub(crate) fn search_general<P, Cost, H, K, Key>(
        &self,
        grid: &mut CellGrid<P, Cost>,
        start: Coord,
        destination: Coord,
        algorithm: Algorithm,
        heuristic_fn: H,
        key_fn: K,
    ) -> Result<Route<Cost>, Error>
    where
        Cost: SearchCost,
        H: Fn(Coord, Coord) -> Cost,
        K: Fn(&Cell<P, Cost>) -> Key,
        Key: PartialOrd,
    {
        let start_index = grid.index_of(start).ok_or(Error::StartOutsideGrid)?;
        let destination_index = grid
            .index_of(destination)
            .ok_or(Error::DestinationOutsideGrid)?;

        if !self.config.allow_solid_start && !grid.cell(start_index).is_traversable() {
            return Err(Error::StartSolid);
        }

        log::debug!(
            "{} search from {:?} to {:?}",
            algorithm,
            start,
            destination
        );

        grid.reset_costs();
        {
            let node = grid.cell_mut(start_index);
            node.g_cost = Cost::zero();
            node.h_cost = heuristic_fn(start, destination);
        }

        let mut open = OpenList::new(grid.len());
        let mut closed = ClosedList::new(grid.len());
        let mut neighbours = Vec::with_capacity(8);
        open.insert(start_index);

        while let Some(current_index) = open.pop_best(|index| key_fn(grid.cell(index))) {
            closed.insert(current_index);

            if current_index == destination_index {
                let path = path::retrace(grid, start_index, destination_index);
                let cost = grid.cell(destination_index).g_cost();
                let route = make_route(grid, path, cost, &open, &closed);
                log::debug!(
                    "{} search reached {:?}: {} steps, {} nodes visited",
                    algorithm,
                    destination,
                    route.metadata.length,
                    route.metadata.num_nodes_visited
                );
                return Ok(route);
            }

            let (current_coord, current_cost) = {
                let node = grid.cell(current_index);
                (node.coord(), node.g_cost())
            };
            log::trace!("{} expanding {:?}", algorithm, current_coord);

            neighbours.clear();
            grid.neighbour_indices(current_index, &mut neighbours);

            for &neighbour_index in &neighbours {
                if closed.contains(neighbour_index) {
                    continue;
                }

                let node = grid.cell_mut(neighbour_index);
                if !node.traversable {
                    continue;
                }

                let cost = current_cost + step_cost::<Cost>(current_coord, node.coord);
                let discovered = open.contains(neighbour_index);

                if !discovered || cost < node.g_cost {
                    node.g_cost = cost;
                    node.h_cost = heuristic_fn(node.coord, destination);
                    node.parent = Some(current_index);
                    open.insert(neighbour_index);
                }
            }
        }

        let route = make_route(grid, Vec::new(), Cost::zero(), &open, &closed);
        log::debug!(
            "{} search found no path to {:?} after visiting {} nodes",
            algorithm,
            destination,
            route.metadata.num_nodes_visited
        );
        Ok(route)
    }
}

fn make_route<P, Cost: Copy>(
    grid: &CellGrid<P, Cost>,
    path: Vec<Coord>,
    cost: Cost,
    open: &OpenList,
    closed: &ClosedList,
) -> Route<Cost> {
    let frontier = Frontier {
        open: open.iter().map(|index| grid.cell(index).coord()).collect(),
        closed: closed.iter().map(|index| grid.cell(index).coord()).collect(),
    };
    let metadata = SearchMetadata {
        num_nodes_visited: closed.len(),
        cost,
        length: path.len(),
    };
    Route {
        path,
        frontier,
        metadata,
    }
}
