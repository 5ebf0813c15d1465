//! Editing tools and the pure click dispatcher

use crate::placement::{FaceNormal, PlacementCandidate};
use glam::IVec3;
use scene::{Color, VoxelStore};

/// The active editing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Place a voxel in the current color
    #[default]
    Pencil,
    /// Remove the clicked voxel
    Eraser,
    /// Repaint the clicked voxel in the current color
    Paint,
    /// Pick up the clicked voxel's color, then switch to Pencil
    Picker,
    /// Place a copy of the clicked voxel on the clicked face
    Duplicate,
}

impl Tool {
    /// UI label for this tool
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Eraser => "eraser",
            Tool::Paint => "paint",
            Tool::Picker => "picker",
            Tool::Duplicate => "duplicate",
        }
    }
}

/// A drag-filtered click forwarded by the interaction layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickEvent {
    /// An existing voxel was clicked on one of its faces
    Voxel {
        /// Index into the store at the time of the click
        index: usize,
        /// Outward normal of the clicked face
        normal: FaceNormal,
    },
    /// An empty grid cell was clicked
    EmptyCell(IVec3),
}

/// A store mutation (or color pick-up) produced by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOp {
    /// Place a voxel at `cell` in `color`
    Place { cell: IVec3, color: Color },
    /// Remove the voxel at `index`
    Remove { index: usize },
    /// Repaint the voxel at `index`
    Paint { index: usize, color: Color },
    /// Read the color of the voxel at `index` into the current color
    Pick { index: usize },
}

/// Map a click to an edit operation
///
/// Pure: reads the store only to resolve placement cells and source colors.
/// Returns `None` where the tool table says no-op (e.g. Eraser on an empty
/// cell) and for voxel clicks whose index no longer resolves — except for
/// the index-consuming ops (Remove/Paint/Pick), which are passed through so
/// the store can report the stale index.
pub fn dispatch(
    tool: Tool,
    event: &ClickEvent,
    store: &VoxelStore,
    current_color: Color,
) -> Option<EditOp> {
    match (tool, event) {
        (Tool::Pencil, ClickEvent::Voxel { index, normal }) => {
            let voxel = store.get(*index)?;
            let candidate = PlacementCandidate::from_face(voxel.position, *normal);
            Some(EditOp::Place {
                cell: candidate.target,
                color: current_color,
            })
        }
        (Tool::Pencil, ClickEvent::EmptyCell(cell)) => Some(EditOp::Place {
            cell: *cell,
            color: current_color,
        }),

        (Tool::Eraser, ClickEvent::Voxel { index, .. }) => Some(EditOp::Remove { index: *index }),

        (Tool::Paint, ClickEvent::Voxel { index, .. }) => Some(EditOp::Paint {
            index: *index,
            color: current_color,
        }),

        (Tool::Picker, ClickEvent::Voxel { index, .. }) => Some(EditOp::Pick { index: *index }),

        (Tool::Duplicate, ClickEvent::Voxel { index, normal }) => {
            let voxel = store.get(*index)?;
            let candidate = PlacementCandidate::from_face(voxel.position, *normal);
            // The copy keeps the source voxel's own color, never the
            // currently selected paint color.
            Some(EditOp::Place {
                cell: candidate.target,
                color: voxel.color,
            })
        }

        (Tool::Eraser | Tool::Paint | Tool::Picker | Tool::Duplicate, ClickEvent::EmptyCell(_)) => {
            None
        }
    }
}
