//! Staged preview of an AI-generated voxel set
//!
//! The generator proposes a voxel list; it is staged here, optionally
//! recolored, and only becomes part of the scene on commit. The original
//! set never changes once staged: every recolor is derived from it, so
//! recoloring is repeatable and fully reversible.

use scene::{Color, Voxel};

/// A generated voxel set awaiting commit
#[derive(Debug, Clone, PartialEq)]
pub struct StagedPreview {
    original: Vec<Voxel>,
    displayed: Vec<Voxel>,
}

impl StagedPreview {
    /// Stage a generated voxel set
    pub fn new(voxels: Vec<Voxel>) -> Self {
        Self {
            displayed: voxels.clone(),
            original: voxels,
        }
    }

    /// Recolor the displayed set toward a target color
    ///
    /// `None` restores the original colors exactly. `Some(target)` shifts
    /// every voxel's hue to the target while keeping its own lightness (see
    /// [`Color::recolored_toward`]). Always computed from the originals,
    /// never from the previous displayed set.
    pub fn recolor(&mut self, target: Option<Color>) {
        self.displayed = match target {
            None => self.original.clone(),
            Some(target) => self
                .original
                .iter()
                .map(|v| Voxel::new(v.position, v.color.recolored_toward(target)))
                .collect(),
        };
    }

    /// The voxels as they would be committed (rendering projection)
    pub fn displayed(&self) -> &[Voxel] {
        &self.displayed
    }

    /// Number of staged voxels
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Whether the staged set is empty
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Consume the preview, yielding the displayed voxels for commit
    pub fn into_displayed(self) -> Vec<Voxel> {
        self.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;

    fn staged() -> StagedPreview {
        StagedPreview::new(vec![
            Voxel::new(IVec3::new(0, 0, 0), Color::from_hex("#804040").unwrap()),
            Voxel::new(IVec3::new(0, 1, 0), Color::from_hex("#c08080").unwrap()),
            Voxel::new(IVec3::new(0, 2, 0), Color::from_hex("#402020").unwrap()),
        ])
    }

    #[test]
    fn test_recolor_none_restores_originals() {
        let mut preview = staged();
        let originals: Vec<Voxel> = preview.displayed().to_vec();

        preview.recolor(Some(Color::from_hex("#00ff00").unwrap()));
        assert_ne!(preview.displayed(), originals.as_slice());

        preview.recolor(None);
        assert_eq!(preview.displayed(), originals.as_slice());
    }

    #[test]
    fn test_recolor_preserves_positions() {
        let mut preview = staged();
        preview.recolor(Some(Color::from_hex("#0000ff").unwrap()));
        let positions: Vec<IVec3> = preview.displayed().iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![IVec3::new(0, 0, 0), IVec3::new(0, 1, 0), IVec3::new(0, 2, 0)]
        );
    }

    #[test]
    fn test_recolor_is_repeatable() {
        let target = Color::from_hex("#3366cc").unwrap();

        let mut a = staged();
        a.recolor(Some(target));
        let first: Vec<Voxel> = a.displayed().to_vec();

        // Recoloring again, even after detours, lands on the same colors.
        a.recolor(Some(Color::from_hex("#ff0000").unwrap()));
        a.recolor(Some(target));
        assert_eq!(a.displayed(), first.as_slice());

        let mut b = staged();
        b.recolor(Some(target));
        assert_eq!(b.displayed(), first.as_slice());
    }
}
