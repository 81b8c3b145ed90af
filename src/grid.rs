use crate::cell::Cell;
use crate::cost::SearchCost;
use crate::error::Error;
use direction::Directions;
use grid_2d::{Coord, Grid, Size};

/// Answers whether the world location covered by a cell is blocked.
pub trait ObstacleMap {
    fn is_blocked(&self, coord: Coord) -> bool;
}

impl<F> ObstacleMap for F
where
    F: Fn(Coord) -> bool,
{
    fn is_blocked(&self, coord: Coord) -> bool {
        self(coord)
    }
}

/// Dense grid of cells. `Coord::y` is the world's z axis.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct CellGrid<P, Cost = f32> {
    cells: Grid<Cell<P, Cost>>,
}

impl<P, Cost: SearchCost> CellGrid<P, Cost> {
    /// Queries `obstacles` and `world_position_of` exactly once per cell.
    pub fn build<O, W>(
        width: i32,
        height: i32,
        obstacles: &O,
        mut world_position_of: W,
    ) -> Result<Self, Error>
    where
        O: ObstacleMap + ?Sized,
        W: FnMut(Coord) -> P,
    {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = Size::new(width as u32, height as u32);
        let cells = Grid::new_fn(size, |coord| {
            let traversable = !obstacles.is_blocked(coord);
            Cell::new(coord, world_position_of(coord), traversable)
        });

        let num_blocked = cells.iter().filter(|cell| !cell.traversable).count();
        log::debug!(
            "built {}x{} cell grid with {} blocked cells",
            width,
            height,
            num_blocked
        );

        Ok(Self { cells })
    }

    /// Puts every cell back into the unreached state, making any previously
    /// computed cost worse than a real one.
    pub fn reset_costs(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset();
        }
    }
}

impl<P, Cost: Copy> CellGrid<P, Cost> {
    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    pub fn size(&self) -> Size {
        self.cells.size()
    }

    pub fn cell_at(&self, coord: Coord) -> Option<&Cell<P, Cost>> {
        self.cells.get(coord)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell<P, Cost>> + '_ {
        self.cells.iter()
    }

    /// The in-bounds cells of the Moore neighbourhood of `coord`, blocked
    /// ones included.
    pub fn neighbours(&self, coord: Coord) -> impl Iterator<Item = &Cell<P, Cost>> + '_ {
        Directions
            .into_iter()
            .filter_map(move |direction| self.cells.get(coord + direction.coord()))
    }

    /// The cell `coord` was reached from during the last search.
    pub fn parent_of(&self, coord: Coord) -> Option<&Cell<P, Cost>> {
        let parent = self.cells.get(coord)?.parent()?;
        Some(&self.cells[parent])
    }

    pub(crate) fn len(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub(crate) fn index_of(&self, coord: Coord) -> Option<usize> {
        self.cells.index_of_coord(coord)
    }

    pub(crate) fn cell(&self, index: usize) -> &Cell<P, Cost> {
        &self.cells[index]
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Cell<P, Cost> {
        &mut self.cells[index]
    }

    pub(crate) fn neighbour_indices(&self, index: usize, buf: &mut Vec<usize>) {
        let coord = self.cells[index].coord;
        for direction in Directions {
            if let Some(neighbour) = self.cells.index_of_coord(coord + direction.coord()) {
                buf.push(neighbour);
            }
        }
    }
}
