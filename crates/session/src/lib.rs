//! Editor session for Voxelsmith
//!
//! Turns raw spatial interaction events (a hovered cell, a clicked cell, a
//! clicked voxel plus a face normal) into scene mutations, and owns the
//! pieces around the voxel store that make it an editor:
//!
//! - [`Tool`] and the pure [`dispatch`] function mapping clicks to edit ops
//! - [`FaceNormal`] / [`PlacementCandidate`]: where the next voxel would go
//! - [`StagedPreview`]: an AI-proposed voxel set awaiting recolor and commit
//! - [`EditorSession`]: the single owner of store, history, preview, active
//!   tool and current color
//!
//! The rendering layer is a consumer only: after any event it re-reads the
//! session's projections (`voxels`, `staged_voxels`, `placement_candidate`,
//! `ghost_color`). Clicks arriving here are assumed to be drag-filtered by
//! the interaction layer.

pub mod placement;
pub mod preview;
pub mod session;
pub mod tool;

pub use placement::{grid_cell, FaceNormal, PlacementCandidate};
pub use preview::StagedPreview;
pub use session::{CommitMode, EditorSession};
pub use tool::{dispatch, ClickEvent, EditOp, Tool};
