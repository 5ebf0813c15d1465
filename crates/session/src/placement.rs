//! Placement resolution: from hover input to the one cell a voxel would fill

use glam::{IVec3, Vec3};

/// Outward normal of an axis-aligned cube face
///
/// Faces of a unit cube only ever expose axis normals, so exactly one
/// component is ±1 and the others are 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceNormal {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl FaceNormal {
    /// Convert to an integer offset vector
    pub fn as_ivec3(&self) -> IVec3 {
        match self {
            FaceNormal::PosX => IVec3::X,
            FaceNormal::NegX => IVec3::NEG_X,
            FaceNormal::PosY => IVec3::Y,
            FaceNormal::NegY => IVec3::NEG_Y,
            FaceNormal::PosZ => IVec3::Z,
            FaceNormal::NegZ => IVec3::NEG_Z,
        }
    }

    /// Try to create from a raw raycast normal
    ///
    /// Returns `None` for degenerate input (zero vector, or no dominant
    /// axis); placement is skipped in that case rather than guessed.
    pub fn from_vec3(v: Vec3) -> Option<Self> {
        let abs = v.abs();
        if abs.x > abs.y && abs.x > abs.z {
            return Some(if v.x > 0.0 { FaceNormal::PosX } else { FaceNormal::NegX });
        }
        if abs.y > abs.x && abs.y > abs.z {
            return Some(if v.y > 0.0 { FaceNormal::PosY } else { FaceNormal::NegY });
        }
        if abs.z > abs.x && abs.z > abs.y {
            return Some(if v.z > 0.0 { FaceNormal::PosZ } else { FaceNormal::NegZ });
        }
        None
    }
}

/// Round a raw world-space coordinate to its nearest lattice cell
pub fn grid_cell(raw: Vec3) -> IVec3 {
    IVec3::new(
        (raw.x + 0.5).floor() as i32,
        (raw.y + 0.5).floor() as i32,
        (raw.z + 0.5).floor() as i32,
    )
}

/// The single cell a new voxel would occupy given the current hover
///
/// `source` is the hovered existing voxel when the hover came in through a
/// face; `target` is where placement would land. Occupancy of `target` is
/// not checked here: the store's `add` absorbs collisions as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementCandidate {
    /// Position of the hovered voxel, if hovering a face
    pub source: Option<IVec3>,
    /// Cell a new voxel would fill
    pub target: IVec3,
}

impl PlacementCandidate {
    /// Candidate from a hovered voxel face: one step along the normal
    pub fn from_face(voxel_position: IVec3, normal: FaceNormal) -> Self {
        Self {
            source: Some(voxel_position),
            target: voxel_position + normal.as_ivec3(),
        }
    }

    /// Candidate from a hovered empty grid cell
    pub fn from_cell(cell: IVec3) -> Self {
        Self {
            source: None,
            target: cell,
        }
    }
}
