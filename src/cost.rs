use grid_2d::Coord;
use num_traits::{Bounded, Num, NumCast};

/// Numeric type used for accumulated and estimated path costs.
pub trait SearchCost: Num + Bounded + NumCast + PartialOrd + Copy {
    /// A cost strictly worse than any real path cost. Two sentinels can be
    /// summed without leaving the type's range.
    fn unreached() -> Self {
        Self::max_value() / (Self::one() + Self::one())
    }
}

impl<T> SearchCost for T where T: Num + Bounded + NumCast + PartialOrd + Copy {}

pub fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Cost of moving between two cells, also used as the A* estimate. Diagonal
/// neighbours are two apart under this metric.
pub fn step_cost<Cost: SearchCost>(a: Coord, b: Coord) -> Cost {
    NumCast::from(manhattan_distance(a, b)).expect("Failed to cast to Cost")
}
