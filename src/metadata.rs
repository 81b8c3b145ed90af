#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMetadata<Cost> {
    /// Number of cells extracted from the open list.
    pub num_nodes_visited: usize,
    /// Accumulated cost of the destination, or zero when it was not reached.
    pub cost: Cost,
    pub length: usize,
}
