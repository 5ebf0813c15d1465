//! Linear undo/redo history of voxel store snapshots
//!
//! Every content-changing mutation records one full snapshot. The log is
//! bounded: once 20 snapshots are held, recording evicts the oldest.
//! Recording after an undo discards the redo branch (linear history).

use crate::voxel::VoxelStore;

/// Maximum number of retained snapshots
pub const MAX_SNAPSHOTS: usize = 20;

/// Bounded snapshot log with a cursor
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<VoxelStore>,
    cursor: usize,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot of the store after a mutation
    ///
    /// Discards any redoable snapshots past the cursor, appends, evicts the
    /// oldest entry when over capacity, and leaves the cursor on the new
    /// snapshot.
    pub fn record(&mut self, snapshot: VoxelStore) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(snapshot);
        if self.snapshots.len() > MAX_SNAPSHOTS {
            self.snapshots.remove(0);
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot
    ///
    /// Returns the snapshot the cursor lands on, or `None` when already at
    /// the oldest retained snapshot (boundary no-op, not an error).
    pub fn undo(&mut self) -> Option<&VoxelStore> {
        if self.cursor == 0 || self.snapshots.is_empty() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot
    ///
    /// Returns the snapshot the cursor lands on, or `None` when already at
    /// the newest.
    pub fn redo(&mut self) -> Option<&VoxelStore> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Whether a step back is available
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a step forward is available
    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor + 1 < self.snapshots.len()
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether any snapshot has been recorded
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drop all snapshots (project load / new scene)
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }
}
