//! Authoritative voxel scene model for Voxelsmith
//!
//! This crate holds the ground truth of an edited scene:
//!
//! - [`Color`]: opaque sRGB color value with hex and HSL views
//! - [`Voxel`] / [`VoxelStore`]: ordered, position-keyed set of unit cubes
//! - [`History`]: bounded snapshot log with a cursor for undo/redo
//!
//! The store is mutated only through the editor session (in the `session`
//! crate) or project load; rendering reads it as an ordered voxel list.

pub mod color;
pub mod error;
pub mod history;
pub mod voxel;

pub use color::{Color, Hsl};
pub use error::{Error, Result};
pub use history::History;
pub use voxel::{Voxel, VoxelStore};
