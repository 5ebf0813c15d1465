//! The persisted project record

use scene::{Color, Voxel};
use serde::{Deserialize, Serialize};

/// A saved scene with its grid settings
///
/// The id is stable across re-saves of the same project; saving without a
/// prior id allocates a fresh one. Timestamps are epoch milliseconds and
/// refresh on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub timestamp: i64,
    pub voxels: Vec<Voxel>,
    pub grid_size: i32,
    pub grid_density: f32,
    pub current_color: Color,
}

impl Project {
    /// Create a project with a freshly allocated id
    pub fn new(
        name: impl Into<String>,
        voxels: Vec<Voxel>,
        grid_size: i32,
        grid_density: f32,
        current_color: Color,
    ) -> Self {
        Self {
            id: allocate_id(),
            name: name.into(),
            timestamp: now_millis(),
            voxels,
            grid_size,
            grid_density,
            current_color,
        }
    }

    /// Re-save under an existing id, refreshing the timestamp
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        voxels: Vec<Voxel>,
        grid_size: i32,
        grid_density: f32,
        current_color: Color,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            timestamp: now_millis(),
            voxels,
            grid_size,
            grid_density,
            current_color,
        }
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Allocate a unique project id: epoch millis plus a random suffix
fn allocate_id() -> String {
    format!("{:x}-{:04x}", now_millis(), rand::random::<u16>())
}
