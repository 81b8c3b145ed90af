use crate::cost::SearchCost;
use grid_2d::Coord;

/// One position of a `CellGrid`. Search state (`g_cost`, `h_cost`, `parent`)
/// is only meaningful for cells touched by the most recent search.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Cell<P, Cost = f32> {
    pub(crate) coord: Coord,
    pub(crate) world_position: P,
    pub(crate) traversable: bool,
    pub(crate) g_cost: Cost,
    pub(crate) h_cost: Cost,
    pub(crate) parent: Option<usize>,
}

impl<P, Cost: SearchCost> Cell<P, Cost> {
    pub(crate) fn new(coord: Coord, world_position: P, traversable: bool) -> Self {
        Self {
            coord,
            world_position,
            traversable,
            g_cost: Cost::unreached(),
            h_cost: Cost::unreached(),
            parent: None,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.g_cost = Cost::unreached();
        self.h_cost = Cost::unreached();
        self.parent = None;
    }

    pub fn f_cost(&self) -> Cost {
        self.g_cost + self.h_cost
    }
}

impl<P, Cost: Copy> Cell<P, Cost> {
    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn world_position(&self) -> &P {
        &self.world_position
    }

    pub fn is_traversable(&self) -> bool {
        self.traversable
    }

    pub fn g_cost(&self) -> Cost {
        self.g_cost
    }

    pub fn h_cost(&self) -> Cost {
        self.h_cost
    }

    pub(crate) fn parent(&self) -> Option<usize> {
        self.parent
    }
}

impl<P, Cost> PartialEq for Cell<P, Cost> {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}
