//! Wire types for the generation contract

use scene::{Color, Voxel};
use serde::{Deserialize, Serialize};

/// A request for a generated voxel sculpture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// User's description of the desired model
    pub prompt: String,
    /// Half-extent of the grid: generated coordinates must fit in
    /// `-grid_bound..=grid_bound` on every axis
    pub grid_bound: i32,
}

impl GenerationRequest {
    /// Create a request for a prompt within a grid bound
    pub fn new(prompt: impl Into<String>, grid_bound: i32) -> Self {
        Self {
            prompt: prompt.into(),
            grid_bound,
        }
    }
}

/// One voxel in a generated point list
///
/// The color travels as a hex string; conversion to a scene [`Voxel`] may
/// fail and such points are dropped rather than failing the generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedVoxel {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub color: String,
}

impl GeneratedVoxel {
    /// Convert to a scene voxel; `None` when the color fails to parse
    pub fn to_voxel(&self) -> Option<Voxel> {
        let color = Color::from_hex(&self.color).ok()?;
        Some(Voxel::new(glam::IVec3::new(self.x, self.y, self.z), color))
    }
}
