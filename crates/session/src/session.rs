//! The editor session: single owner of store, history, preview and tool state

use crate::placement::{FaceNormal, PlacementCandidate};
use crate::preview::StagedPreview;
use crate::tool::{dispatch, ClickEvent, EditOp, Tool};
use glam::{IVec3, Vec3};
use scene::{Color, History, Result, Voxel, VoxelStore};
use tracing::{debug, info};

/// How a staged preview is merged into the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// The staged voxels become the whole scene
    Replace,
    /// The staged voxels are appended to the existing scene
    ///
    /// No positional dedup: appended voxels may collide with existing ones,
    /// and rendering resolves the overlap last-write-wins.
    Append,
}

/// An editing session over one voxel scene
///
/// Owns the voxel store, the undo/redo history, the staged AI preview, the
/// active tool, the current color and the hover state. All mutation goes
/// through the event intake below; everything else is a read-only
/// projection for the rendering layer.
#[derive(Debug, Clone)]
pub struct EditorSession {
    store: VoxelStore,
    history: History,
    preview: Option<StagedPreview>,
    tool: Tool,
    current_color: Color,
    hover: Option<PlacementCandidate>,
    grid_size: i32,
    grid_density: f32,
}

impl EditorSession {
    /// Start a session over an empty scene
    ///
    /// The empty scene is recorded as the first snapshot so the first edit
    /// can be undone back to it.
    pub fn new(grid_size: i32, grid_density: f32, current_color: Color) -> Self {
        let store = VoxelStore::new();
        let mut history = History::new();
        history.record(store.clone());
        Self {
            store,
            history,
            preview: None,
            tool: Tool::default(),
            current_color,
            hover: None,
            grid_size,
            grid_density,
        }
    }

    // ------------------------------------------------------------------
    // Event intake (interaction layer -> core)
    // ------------------------------------------------------------------

    /// An empty grid cell is hovered
    pub fn hover_empty_cell(&mut self, cell: IVec3) {
        self.hover = Some(PlacementCandidate::from_cell(cell));
    }

    /// A voxel face is hovered
    ///
    /// A stale index or a degenerate normal clears the candidate instead of
    /// guessing a placement.
    pub fn hover_voxel_face(&mut self, index: usize, normal: Vec3) {
        self.hover = match (self.store.get(index), FaceNormal::from_vec3(normal)) {
            (Some(voxel), Some(normal)) => {
                Some(PlacementCandidate::from_face(voxel.position, normal))
            }
            _ => None,
        };
    }

    /// The pointer left all placement targets
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// A drag-filtered click landed on an empty grid cell
    pub fn click_empty_cell(&mut self, cell: IVec3) -> Result<()> {
        self.apply_click(ClickEvent::EmptyCell(cell))
    }

    /// A drag-filtered click landed on a voxel face
    ///
    /// A degenerate normal skips placement entirely: no mutation, no
    /// history entry.
    pub fn click_voxel(&mut self, index: usize, normal: Vec3) -> Result<()> {
        let Some(normal) = FaceNormal::from_vec3(normal) else {
            debug!("Degenerate face normal {normal}, skipping placement");
            return Ok(());
        };
        self.apply_click(ClickEvent::Voxel { index, normal })
    }

    fn apply_click(&mut self, event: ClickEvent) -> Result<()> {
        let Some(op) = dispatch(self.tool, &event, &self.store, self.current_color) else {
            return Ok(());
        };
        match op {
            EditOp::Place { cell, color } => {
                if self.store.add(cell, color) {
                    info!("Placed voxel at {cell} ({color})");
                    self.history.record(self.store.clone());
                }
            }
            EditOp::Remove { index } => {
                let removed = self.store.remove_at(index)?;
                info!("Removed voxel at {}", removed.position);
                self.history.record(self.store.clone());
            }
            EditOp::Paint { index, color } => {
                self.store.set_color_at(index, color)?;
                self.history.record(self.store.clone());
            }
            EditOp::Pick { index } => {
                let len = self.store.len();
                let voxel = self
                    .store
                    .get(index)
                    .ok_or(scene::Error::IndexOutOfRange { index, len })?;
                self.current_color = voxel.color;
                self.tool = Tool::Pencil;
                debug!("Picked color {}, switching to pencil", self.current_color);
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Undo / redo
    // ------------------------------------------------------------------

    /// Step the scene back one snapshot; `false` at the oldest
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.store = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Step the scene forward one snapshot; `false` at the newest
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.store = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ------------------------------------------------------------------
    // AI preview
    // ------------------------------------------------------------------

    /// Stage a generated voxel set for preview
    ///
    /// An empty set stages nothing: a failed or empty generation leaves the
    /// session exactly as it was.
    pub fn stage_preview(&mut self, voxels: Vec<Voxel>) {
        if voxels.is_empty() {
            debug!("Empty generation result, nothing staged");
            return;
        }
        info!("Staged {} generated voxels for preview", voxels.len());
        self.preview = Some(StagedPreview::new(voxels));
    }

    /// Recolor the staged preview; `None` restores the generated colors
    pub fn recolor_preview(&mut self, target: Option<Color>) {
        if let Some(preview) = &mut self.preview {
            preview.recolor(target);
        }
    }

    /// Merge the staged preview into the scene
    ///
    /// Records exactly one history snapshot and clears the preview.
    /// Returns `false` when nothing is staged.
    pub fn commit_preview(&mut self, mode: CommitMode) -> bool {
        let Some(preview) = self.preview.take() else {
            return false;
        };
        let voxels = preview.into_displayed();
        match mode {
            CommitMode::Replace => {
                info!("Committing preview: replacing scene with {} voxels", voxels.len());
                self.store = VoxelStore::from_voxels(voxels);
            }
            CommitMode::Append => {
                info!("Committing preview: appending {} voxels", voxels.len());
                self.store.extend(voxels);
            }
        }
        self.history.record(self.store.clone());
        true
    }

    /// Drop the staged preview without touching the scene or history
    pub fn discard_preview(&mut self) {
        if self.preview.take().is_some() {
            debug!("Discarded staged preview");
        }
    }

    // ------------------------------------------------------------------
    // Read-only projections (core -> rendering layer)
    // ------------------------------------------------------------------

    /// The scene as an ordered voxel list
    pub fn voxels(&self) -> &[Voxel] {
        self.store.voxels()
    }

    /// The underlying store
    pub fn store(&self) -> &VoxelStore {
        &self.store
    }

    /// The staged preview voxels, if a generation is awaiting commit
    pub fn staged_voxels(&self) -> Option<&[Voxel]> {
        self.preview.as_ref().map(|p| p.displayed())
    }

    /// The current placement candidate, if a target is hovered
    pub fn placement_candidate(&self) -> Option<&PlacementCandidate> {
        self.hover.as_ref()
    }

    /// The active tool
    pub fn active_tool(&self) -> Tool {
        self.tool
    }

    /// Select the active tool
    pub fn set_active_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// The currently selected color
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Select the current color
    pub fn set_current_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Display color for the not-yet-placed voxel under the cursor
    ///
    /// With the Duplicate tool and a hovered candidate, this is the color
    /// of any existing voxel one face-step away from the target cell, so
    /// the ghost matches what Duplicate would actually place. Otherwise the
    /// current color.
    pub fn ghost_color(&self) -> Color {
        if self.tool == Tool::Duplicate {
            if let Some(candidate) = &self.hover {
                let neighbor = self.store.iter().find(|v| {
                    let d = (v.position - candidate.target).abs();
                    d.x + d.y + d.z == 1
                });
                if let Some(voxel) = neighbor {
                    return voxel.color;
                }
            }
        }
        self.current_color
    }

    /// Grid extent (voxels per side)
    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Grid line density
    pub fn grid_density(&self) -> f32 {
        self.grid_density
    }

    // ------------------------------------------------------------------
    // Project bridging
    // ------------------------------------------------------------------

    /// Replace the session contents with a loaded project's scene
    ///
    /// Clears history, preview and hover; the loaded scene becomes the
    /// first snapshot so undo stops there rather than at an empty scene.
    pub fn load(
        &mut self,
        voxels: Vec<Voxel>,
        grid_size: i32,
        grid_density: f32,
        current_color: Color,
    ) {
        info!("Loading scene with {} voxels", voxels.len());
        self.store = VoxelStore::from_voxels(voxels);
        self.history.clear();
        self.history.record(self.store.clone());
        self.preview = None;
        self.hover = None;
        self.grid_size = grid_size;
        self.grid_density = grid_density;
        self.current_color = current_color;
    }
}
