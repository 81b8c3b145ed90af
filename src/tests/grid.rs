use super::*;
use crate::error::Error;
use crate::search::SearchEngine;
use std::cell::RefCell;

#[test]
fn build_tags_traversability() {
    let strings = vec!["..#", "#..", "..."];
    let (grid, _, _) = grid_from_strings::<f32>(&strings);

    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 3);
    assert!(!grid.cell_at(Coord::new(2, 0)).unwrap().is_traversable());
    assert!(!grid.cell_at(Coord::new(0, 1)).unwrap().is_traversable());
    assert!(grid.cell_at(Coord::new(1, 1)).unwrap().is_traversable());
    assert_eq!(grid.cells().filter(|cell| cell.is_traversable()).count(), 7);
}

#[test]
fn build_rejects_non_positive_dimensions() {
    for &(width, height) in &[(0, 5), (5, 0), (-1, 3), (0, 0)] {
        let result: Result<CellGrid<(), f32>, _> =
            CellGrid::build(width, height, &|_: Coord| false, |_| ());
        assert_eq!(
            result.err(),
            Some(Error::InvalidDimensions { width, height })
        );
    }
}

#[test]
fn build_queries_each_oracle_once_per_cell() {
    let obstacle_queries = RefCell::new(Vec::new());
    let mut position_queries = Vec::new();
    let is_blocked = |coord: Coord| {
        obstacle_queries.borrow_mut().push(coord);
        coord.x == coord.y
    };

    let grid: CellGrid<(i32, i32), f32> = CellGrid::build(4, 3, &is_blocked, |coord| {
        position_queries.push(coord);
        (coord.x * 10, coord.y * 10)
    })
    .unwrap();

    let obstacle_queries = obstacle_queries.into_inner();
    assert_eq!(obstacle_queries.len(), 12);
    assert_eq!(obstacle_queries.iter().collect::<HashSet<_>>().len(), 12);
    assert_eq!(position_queries.len(), 12);

    let cell = grid.cell_at(Coord::new(3, 2)).unwrap();
    assert_eq!(cell.world_position(), &(30, 20));
    assert!(cell.is_traversable());
    assert!(!grid.cell_at(Coord::new(2, 2)).unwrap().is_traversable());
}

#[test]
fn cell_at_out_of_bounds_is_none() {
    let grid = open_grid::<f32>(3, 2);
    assert!(grid.cell_at(Coord::new(-1, 0)).is_none());
    assert!(grid.cell_at(Coord::new(0, -1)).is_none());
    assert!(grid.cell_at(Coord::new(3, 0)).is_none());
    assert!(grid.cell_at(Coord::new(0, 2)).is_none());
    assert_eq!(
        grid.cell_at(Coord::new(2, 1)).map(|cell| cell.coord()),
        Some(Coord::new(2, 1))
    );
}

#[test]
fn neighbours_stay_in_bounds() {
    let grid = open_grid::<f32>(3, 3);
    assert_eq!(grid.neighbours(Coord::new(0, 0)).count(), 3);
    assert_eq!(grid.neighbours(Coord::new(1, 0)).count(), 5);
    assert_eq!(grid.neighbours(Coord::new(2, 2)).count(), 3);

    let centre = grid
        .neighbours(Coord::new(1, 1))
        .map(|cell| cell.coord())
        .collect::<HashSet<_>>();
    assert_eq!(centre.len(), 8);
    assert!(!centre.contains(&Coord::new(1, 1)));
}

#[test]
fn neighbours_include_blocked_cells() {
    let strings = vec!["###", "#.#", "###"];
    let (grid, _, _) = grid_from_strings::<f32>(&strings);
    let neighbours = grid.neighbours(Coord::new(1, 1)).collect::<Vec<_>>();
    assert_eq!(neighbours.len(), 8);
    assert!(neighbours.iter().all(|cell| !cell.is_traversable()));
}

#[test]
fn reset_restores_unreached_state() {
    let mut grid = open_grid::<f32>(4, 4);
    let engine = SearchEngine::default();
    engine
        .astar(&mut grid, Coord::new(0, 0), Coord::new(3, 2))
        .unwrap();
    assert!(grid.parent_of(Coord::new(3, 2)).is_some());

    grid.reset_costs();
    let once = grid
        .cells()
        .map(|cell| (cell.g_cost(), cell.h_cost()))
        .collect::<Vec<_>>();
    grid.reset_costs();
    let twice = grid
        .cells()
        .map(|cell| (cell.g_cost(), cell.h_cost()))
        .collect::<Vec<_>>();

    assert_eq!(once, twice);
    for cell in grid.cells() {
        assert_eq!(cell.g_cost(), f32::unreached());
        assert_eq!(cell.h_cost(), f32::unreached());
        assert!(grid.parent_of(cell.coord()).is_none());
    }
}

#[test]
fn unreached_cost_sum_stays_in_range() {
    assert!((f32::unreached() + f32::unreached()).is_finite());
    assert!(f32::unreached() > 1.0e30);
    assert!(u32::unreached().checked_add(u32::unreached()).is_some());
    assert!(i32::unreached().checked_add(i32::unreached()).is_some());
    assert!(u32::unreached() > 1_000_000);
}

#[test]
fn f_cost_is_sum_of_g_and_h() {
    let mut grid = open_grid::<u32>(5, 5);
    let engine = SearchEngine::default();
    let route = engine
        .astar(&mut grid, Coord::new(0, 0), Coord::new(4, 1))
        .unwrap();
    for &coord in route.frontier.closed.iter() {
        let cell = grid.cell_at(coord).unwrap();
        assert_eq!(cell.f_cost(), cell.g_cost() + cell.h_cost());
    }
}
