extern crate grid_2d;
extern crate rand;
extern crate rand_isaac;

use grid_2d::{Coord, Grid, Size};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_isaac::Isaac64Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeCell {
    Wall,
    Floor,
}

impl MazeCell {
    pub fn is_wall(self) -> bool {
        self == MazeCell::Wall
    }
}

pub fn rng_from_seed(seed: u64) -> Isaac64Rng {
    Isaac64Rng::seed_from_u64(seed)
}

/// Carves a perfect maze by randomised depth-first search. Floor cells lie on
/// even coordinates and the corridors joining them; `(0, 0)` is always floor.
pub fn generate<R: Rng>(size: Size, rng: &mut R) -> Grid<MazeCell> {
    let mut grid = Grid::new_clone(size, MazeCell::Wall);
    let steps = [
        Coord::new(0, -2),
        Coord::new(2, 0),
        Coord::new(0, 2),
        Coord::new(-2, 0),
    ];

    let origin = Coord::new(0, 0);
    match grid.get_mut(origin) {
        Some(cell) => *cell = MazeCell::Floor,
        None => return grid,
    }

    let mut stack = vec![origin];
    while let Some(&current) = stack.last() {
        let candidates = steps
            .iter()
            .map(|&step| {
                let between = Coord::new(current.x + step.x / 2, current.y + step.y / 2);
                (current + step, between)
            })
            .filter(|&(next, _)| grid.get(next) == Some(&MazeCell::Wall))
            .collect::<Vec<_>>();

        let (next, between) = match candidates.choose(rng) {
            Some(&candidate) => candidate,
            None => {
                stack.pop();
                continue;
            }
        };

        for &coord in &[between, next] {
            if let Some(cell) = grid.get_mut(coord) {
                *cell = MazeCell::Floor;
            }
        }
        stack.push(next);
    }

    grid
}

/// Turns `count` randomly chosen cells into floor, adding loops to a maze so
/// that most pairs of cells are joined by more than one route.
pub fn open_walls<R: Rng>(grid: &mut Grid<MazeCell>, count: usize, rng: &mut R) {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    if width == 0 || height == 0 {
        return;
    }
    for _ in 0..count {
        let coord = Coord::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if let Some(cell) = grid.get_mut(coord) {
            *cell = MazeCell::Floor;
        }
    }
}

/// Open field where each cell is independently a wall with probability
/// `density`.
pub fn scatter<R: Rng>(size: Size, density: f64, rng: &mut R) -> Grid<MazeCell> {
    Grid::new_fn(size, |_| {
        if rng.gen_bool(density) {
            MazeCell::Wall
        } else {
            MazeCell::Floor
        }
    })
}

pub fn floor_coords(grid: &Grid<MazeCell>) -> Vec<Coord> {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let mut coords = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let coord = Coord::new(x, y);
            if grid.get(coord) == Some(&MazeCell::Floor) {
                coords.push(coord);
            }
        }
    }
    coords
}
