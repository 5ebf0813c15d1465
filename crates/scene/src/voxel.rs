//! Voxel store: the ordered, position-keyed set of placed unit cubes

use crate::color::Color;
use crate::error::{Error, Result};
use glam::IVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A unit cube at an integer lattice position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Voxel {
    /// Lattice coordinate of the cube
    pub position: IVec3,
    /// Display color
    pub color: Color,
}

impl Voxel {
    /// Create a voxel at a lattice position
    pub const fn new(position: IVec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// Ordered collection of placed voxels
///
/// Set semantics keyed by position: no two voxels ever share a lattice cell
/// after interactive mutation. Insertion order is preserved so rendering and
/// iteration stay deterministic. Indices shift on removal and must not be
/// retained across mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoxelStore {
    voxels: Vec<Voxel>,
}

impl VoxelStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an arbitrary voxel list
    ///
    /// No positional dedup is performed: an append-commit of a generated
    /// preview may legitimately collide with existing voxels, and rendering
    /// resolves the overlap last-write-wins.
    pub fn from_voxels(voxels: Vec<Voxel>) -> Self {
        Self { voxels }
    }

    /// Place a voxel, returning whether the store changed
    ///
    /// Placement at an occupied position is a silent no-op: a click on a
    /// cell that already holds a voxel must never error or duplicate.
    pub fn add(&mut self, position: IVec3, color: Color) -> bool {
        if self.voxel_at(position).is_some() {
            debug!("Position {position} already occupied, skipping placement");
            return false;
        }
        self.voxels.push(Voxel::new(position, color));
        true
    }

    /// Remove the voxel at `index`
    ///
    /// Indices after `index` shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Voxel> {
        if index >= self.voxels.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.voxels.len(),
            });
        }
        Ok(self.voxels.remove(index))
    }

    /// Replace the color of the voxel at `index` in place
    pub fn set_color_at(&mut self, index: usize, color: Color) -> Result<()> {
        let len = self.voxels.len();
        let voxel = self
            .voxels
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        voxel.color = color;
        Ok(())
    }

    /// Find the voxel occupying a lattice position, if any
    ///
    /// Linear scan, first match. The store is small enough (bounded grid,
    /// fully in memory) that no spatial index is warranted.
    pub fn voxel_at(&self, position: IVec3) -> Option<(usize, &Voxel)> {
        self.voxels
            .iter()
            .enumerate()
            .find(|(_, v)| v.position == position)
    }

    /// Get the voxel at `index`
    pub fn get(&self, index: usize) -> Option<&Voxel> {
        self.voxels.get(index)
    }

    /// Number of voxels in the store
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Whether the store holds no voxels
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Iterate over voxels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Voxel> {
        self.voxels.iter()
    }

    /// Voxels as an ordered slice (rendering projection)
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Append voxels without dedup (append-commit path)
    pub fn extend(&mut self, voxels: impl IntoIterator<Item = Voxel>) {
        self.voxels.extend(voxels);
    }
}

impl From<Vec<Voxel>> for VoxelStore {
    fn from(voxels: Vec<Voxel>) -> Self {
        Self::from_voxels(voxels)
    }
}
