use crate::config::LayoutConfig;
use crate::cost::SearchCost;
use crate::error::Error;
use crate::grid::{CellGrid, ObstacleMap};
use grid_2d::Coord;

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Maps a continuous world point to the cell covering it.
pub trait Locator {
    fn locate(&self, point: WorldPoint) -> Option<Coord>;
}

/// Square cells laid over a flat plane, centred on the plane's centre. The
/// number of cells along each axis is the plane's extent divided by the cell
/// size, rounded to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneLayout {
    config: LayoutConfig,
    columns: i32,
    rows: i32,
}

impl PlaneLayout {
    pub fn new(config: LayoutConfig) -> Self {
        let diameter = config.node_diameter();
        let (columns, rows) = if diameter > 0.0 {
            (
                (config.size_x / diameter).round() as i32,
                (config.size_z / diameter).round() as i32,
            )
        } else {
            (0, 0)
        };
        Self {
            config,
            columns,
            rows,
        }
    }

    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    fn corner(&self) -> (f32, f32) {
        let diameter = self.config.node_diameter();
        (
            self.config.center.x - self.columns as f32 * diameter / 2.0,
            self.config.center.z - self.rows as f32 * diameter / 2.0,
        )
    }

    /// Centre of the cell at `coord`, at the plane's height.
    pub fn world_position_of(&self, coord: Coord) -> WorldPoint {
        let diameter = self.config.node_diameter();
        let (corner_x, corner_z) = self.corner();
        WorldPoint::new(
            corner_x + coord.x as f32 * diameter + self.config.node_radius,
            self.config.center.y,
            corner_z + coord.y as f32 * diameter + self.config.node_radius,
        )
    }

    pub fn build_grid<O, Cost>(&self, obstacles: &O) -> Result<CellGrid<WorldPoint, Cost>, Error>
    where
        O: ObstacleMap + ?Sized,
        Cost: SearchCost,
    {
        CellGrid::build(self.columns, self.rows, obstacles, |coord| {
            self.world_position_of(coord)
        })
    }
}

impl Locator for PlaneLayout {
    fn locate(&self, point: WorldPoint) -> Option<Coord> {
        let diameter = self.config.node_diameter();
        if !(diameter > 0.0) {
            return None;
        }
        let (corner_x, corner_z) = self.corner();
        let fx = (point.x - corner_x) / diameter;
        let fz = (point.z - corner_z) / diameter;
        if !(fx >= 0.0 && fx < self.columns as f32 && fz >= 0.0 && fz < self.rows as f32) {
            return None;
        }
        Some(Coord::new(fx.floor() as i32, fz.floor() as i32))
    }
}
