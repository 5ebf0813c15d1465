//! Named project persistence for Voxelsmith scenes
//!
//! A [`Project`] is the persisted record of a scene: id, name, timestamp,
//! voxel list, grid settings and the current color. The [`ProjectStore`]
//! trait is the storage contract the editor depends on; [`FileProjectStore`]
//! keeps one JSON file per project under a root directory.

pub mod error;
pub mod record;
pub mod store;

pub use error::{Error, Result};
pub use record::Project;
pub use store::{FileProjectStore, ProjectStore};
