mod grid;

use crate::cost::{manhattan_distance, SearchCost};
use crate::grid::{CellGrid, ObstacleMap};
use grid_2d::{Coord, Grid, Size};
use std::collections::{HashMap, HashSet};

pub(crate) struct TestObstacles {
    blocked: Grid<bool>,
}

impl ObstacleMap for TestObstacles {
    fn is_blocked(&self, coord: Coord) -> bool {
        self.blocked.get(coord).cloned().unwrap_or(true)
    }
}

/// `.` open, `#` blocked, `s` start, `g` goal, `B` both, `S`/`G` a blocked
/// start/goal.
pub(crate) fn grid_from_strings<Cost: SearchCost>(
    strings: &[&str],
) -> (CellGrid<(), Cost>, Coord, Coord) {
    let width = strings[0].len() as u32;
    let height = strings.len() as u32;
    let mut blocked = Grid::new_clone(Size::new(width, height), false);
    let mut start = None;
    let mut goal = None;
    for (i, line) in strings.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            let coord = Coord::new(j as i32, i as i32);
            match ch {
                '.' => (),
                '#' => *blocked.get_mut(coord).unwrap() = true,
                's' => start = Some(coord),
                'g' => goal = Some(coord),
                'B' => {
                    start = Some(coord);
                    goal = Some(coord);
                }
                'S' => {
                    start = Some(coord);
                    *blocked.get_mut(coord).unwrap() = true;
                }
                'G' => {
                    goal = Some(coord);
                    *blocked.get_mut(coord).unwrap() = true;
                }
                _ => panic!("unexpected character {:?}", ch),
            }
        }
    }

    let obstacles = TestObstacles { blocked };
    let grid = CellGrid::build(width as i32, height as i32, &obstacles, |_| ()).unwrap();
    (
        grid,
        start.unwrap_or_else(|| Coord::new(0, 0)),
        goal.unwrap_or_else(|| Coord::new(0, 0)),
    )
}

pub(crate) fn open_grid<Cost: SearchCost>(width: i32, height: i32) -> CellGrid<(), Cost> {
    CellGrid::build(width, height, &|_: Coord| false, |_| ()).unwrap()
}

pub(crate) fn path_cost(start: Coord, path: &[Coord]) -> u32 {
    let mut current = start;
    let mut total = 0;
    for &coord in path {
        total += manhattan_distance(current, coord) as u32;
        current = coord;
    }
    total
}

/// Panics unless `path` is a valid route from `start` to `goal`.
pub(crate) fn check_path<P, Cost: Copy>(
    grid: &CellGrid<P, Cost>,
    start: Coord,
    goal: Coord,
    path: &[Coord],
) {
    if start == goal {
        assert_eq!(path, &[start][..]);
        return;
    }

    assert_eq!(path.last(), Some(&goal), "path does not end at the goal");

    let mut seen = HashSet::new();
    let mut current = start;
    for &coord in path {
        assert!(
            grid.neighbours(current).any(|cell| cell.coord() == coord),
            "{:?} is not adjacent to {:?}",
            coord,
            current
        );
        assert!(
            grid.cell_at(coord).unwrap().is_traversable(),
            "path goes through wall at {:?}",
            coord
        );
        assert!(coord != start, "path revisits the start");
        assert!(seen.insert(coord), "path visits {:?} twice", coord);
        current = coord;
    }
}

/// Cheapest cost from `start` to `goal` found by relaxing every edge until
/// nothing changes.
pub(crate) fn reference_cost<P, Cost: Copy>(
    grid: &CellGrid<P, Cost>,
    start: Coord,
    goal: Coord,
) -> Option<u32> {
    let mut best: HashMap<Coord, u32> = HashMap::new();
    best.insert(start, 0);
    loop {
        let mut changed = false;
        let known = best.iter().map(|(&c, &v)| (c, v)).collect::<Vec<_>>();
        for (coord, cost) in known {
            for neighbour in grid.neighbours(coord) {
                if !neighbour.is_traversable() {
                    continue;
                }
                let candidate = cost + manhattan_distance(coord, neighbour.coord()) as u32;
                let entry = best.entry(neighbour.coord()).or_insert(u32::max_value());
                if candidate < *entry {
                    *entry = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    best.get(&goal).cloned()
}
