use crate::layout::WorldPoint;

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// When false, searching from a non-traversable start cell is an error.
    pub allow_solid_start: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_solid_start: true,
        }
    }
}

/// Describes a flat rectangular plane in the world's XZ plane, divided into
/// square cells of side `2 * node_radius`.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub center: WorldPoint,
    pub size_x: f32,
    pub size_z: f32,
    pub node_radius: f32,
}

impl LayoutConfig {
    pub fn node_diameter(&self) -> f32 {
        self.node_radius * 2.0
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center: WorldPoint::new(0.0, 0.0, 0.0),
            size_x: 10.0,
            size_z: 10.0,
            node_radius: 0.5,
        }
    }
}
