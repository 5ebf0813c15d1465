//! Tolerant parsing of model output into a voxel point list
//!
//! Models rarely return bare JSON: the array usually arrives wrapped in
//! prose, markdown fences, or both. Parsing extracts the first JSON array
//! from the text, deserializes it, and drops points outside the grid bound.

use crate::error::{Error, Result};
use crate::types::GeneratedVoxel;
use tracing::debug;

/// Parse raw model output into generated voxels
///
/// Points outside `-grid_bound..=grid_bound` on any axis are dropped, not
/// clamped. An empty array is a valid result (no preview produced).
pub fn parse_generated(text: &str, grid_bound: i32) -> Result<Vec<GeneratedVoxel>> {
    let json = extract_json_array(text)
        .ok_or_else(|| Error::UnexpectedFormat("no JSON array in model output".to_string()))?;
    let points: Vec<GeneratedVoxel> = serde_json::from_str(json)?;

    let total = points.len();
    let points: Vec<GeneratedVoxel> = points
        .into_iter()
        .filter(|p| in_bound(p, grid_bound))
        .collect();
    if points.len() < total {
        debug!(
            "Dropped {} of {} generated points outside grid bound {}",
            total - points.len(),
            total,
            grid_bound
        );
    }
    Ok(points)
}

fn in_bound(p: &GeneratedVoxel, bound: i32) -> bool {
    // unsigned_abs: i32::MIN from a misbehaving model must not overflow
    let bound = bound.max(0) as u32;
    p.x.unsigned_abs() <= bound && p.y.unsigned_abs() <= bound && p.z.unsigned_abs() <= bound
}

/// Find the first balanced top-level JSON array in the text
fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
