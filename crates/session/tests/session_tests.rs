//! End-to-end editing scenarios over the session object
//!
//! Exercises the tool table, history semantics, and the preview commit
//! paths the way the interaction layer drives them.

use glam::{IVec3, Vec3};
use scene::{Color, Voxel};
use session::{CommitMode, EditorSession, Tool};

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap()
}

fn new_session() -> EditorSession {
    EditorSession::new(16, 1.0, hex("#00ff00"))
}

const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

#[test]
fn pencil_places_with_current_color() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::new(0, 0, 0)).unwrap();

    assert_eq!(
        session.voxels(),
        &[Voxel::new(IVec3::new(0, 0, 0), hex("#00ff00"))]
    );
}

#[test]
fn pencil_on_face_places_adjacent() {
    let mut session = new_session();
    session.set_current_color(hex("#ff0000"));
    session.click_empty_cell(IVec3::new(0, 0, 0)).unwrap();

    session.set_current_color(hex("#00ff00"));
    session.click_voxel(0, Vec3::new(1.0, 0.0, 0.0)).unwrap();

    assert_eq!(
        session.voxels(),
        &[
            Voxel::new(IVec3::new(0, 0, 0), hex("#ff0000")),
            Voxel::new(IVec3::new(1, 0, 0), hex("#00ff00")),
        ]
    );
}

#[test]
fn placing_on_occupied_cell_changes_nothing() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::new(1, 2, 3)).unwrap();
    let before = session.voxels().to_vec();

    session.set_current_color(hex("#123456"));
    session.click_empty_cell(IVec3::new(1, 2, 3)).unwrap();

    assert_eq!(session.voxels(), before.as_slice());
    // The no-op recorded nothing: one undo reaches the empty scene.
    assert!(session.undo());
    assert!(session.voxels().is_empty());
    assert!(!session.undo());
}

#[test]
fn eraser_removes_clicked_voxel() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::new(0, 0, 0)).unwrap();
    session.click_empty_cell(IVec3::new(1, 0, 0)).unwrap();

    session.set_active_tool(Tool::Eraser);
    session.click_voxel(0, UP).unwrap();

    assert_eq!(session.voxels().len(), 1);
    assert!(session.store().voxel_at(IVec3::new(0, 0, 0)).is_none());
}

#[test]
fn eraser_on_stale_index_is_an_error_and_mutates_nothing() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::ZERO).unwrap();

    session.set_active_tool(Tool::Eraser);
    assert!(session.click_voxel(5, UP).is_err());
    assert_eq!(session.voxels().len(), 1);
    // The failed click recorded no snapshot.
    assert!(session.undo());
    assert!(session.voxels().is_empty());
}

#[test]
fn paint_recolors_in_place() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::ZERO).unwrap();

    session.set_current_color(hex("#abcdef"));
    session.set_active_tool(Tool::Paint);
    session.click_voxel(0, UP).unwrap();

    assert_eq!(session.voxels()[0].color, hex("#abcdef"));
    assert_eq!(session.voxels()[0].position, IVec3::ZERO);
}

#[test]
fn picker_reads_color_and_switches_to_pencil() {
    let mut session = new_session();
    session.set_current_color(hex("#d0021b"));
    session.click_empty_cell(IVec3::ZERO).unwrap();

    session.set_current_color(hex("#ffffff"));
    session.set_active_tool(Tool::Picker);
    session.click_voxel(0, UP).unwrap();

    assert_eq!(session.current_color(), hex("#d0021b"));
    assert_eq!(session.active_tool(), Tool::Pencil);
}

#[test]
fn duplicate_copies_source_color_not_current() {
    let mut session = new_session();
    session.set_current_color(hex("#ff0000"));
    session.click_empty_cell(IVec3::ZERO).unwrap();

    // Churn the current color repeatedly; the copy must ignore all of it.
    session.set_active_tool(Tool::Duplicate);
    for c in ["#00ff00", "#0000ff", "#ffff00"] {
        session.set_current_color(hex(c));
    }
    session.click_voxel(0, UP).unwrap();

    assert_eq!(session.voxels().len(), 2);
    assert_eq!(session.voxels()[1].position, IVec3::new(0, 1, 0));
    assert_eq!(session.voxels()[1].color, hex("#ff0000"));
}

#[test]
fn degenerate_normal_skips_placement() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::ZERO).unwrap();

    session.click_voxel(0, Vec3::ZERO).unwrap();
    assert_eq!(session.voxels().len(), 1);
    // No history entry either.
    assert!(session.undo());
    assert!(session.voxels().is_empty());
}

#[test]
fn undo_redo_restore_exact_content() {
    let mut session = new_session();
    for i in 0..5 {
        session.click_empty_cell(IVec3::new(i, 0, 0)).unwrap();
    }
    assert_eq!(session.voxels().len(), 5);

    assert!(session.undo());
    assert_eq!(session.voxels().len(), 4);
    assert!(session.redo());
    assert_eq!(session.voxels().len(), 5);
    assert!(!session.redo());
}

#[test]
fn history_is_capped_at_twenty_snapshots() {
    let mut session = new_session();
    // Initial snapshot + 25 placements overflow the 20-entry log.
    for i in 0..25 {
        session.click_empty_cell(IVec3::new(i, 0, 0)).unwrap();
    }

    let mut undos = 0;
    while session.undo() {
        undos += 1;
    }
    assert_eq!(undos, 19, "20 retained snapshots allow 19 undo steps");
    assert_eq!(session.voxels().len(), 6, "the oldest snapshots were evicted");
}

#[test]
fn edit_after_undo_discards_redo() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::new(0, 0, 0)).unwrap();
    session.click_empty_cell(IVec3::new(1, 0, 0)).unwrap();

    assert!(session.undo());
    session.click_empty_cell(IVec3::new(2, 0, 0)).unwrap();

    assert!(!session.redo());
    assert_eq!(session.voxels().len(), 2);
    assert!(session.store().voxel_at(IVec3::new(2, 0, 0)).is_some());
    assert!(session.store().voxel_at(IVec3::new(1, 0, 0)).is_none());
}

#[test]
fn hover_produces_placement_candidate() {
    let mut session = new_session();
    session.hover_empty_cell(IVec3::new(3, 0, 3));
    assert_eq!(
        session.placement_candidate().unwrap().target,
        IVec3::new(3, 0, 3)
    );

    session.click_empty_cell(IVec3::ZERO).unwrap();
    session.hover_voxel_face(0, UP);
    let candidate = session.placement_candidate().unwrap();
    assert_eq!(candidate.source, Some(IVec3::ZERO));
    assert_eq!(candidate.target, IVec3::new(0, 1, 0));

    session.clear_hover();
    assert!(session.placement_candidate().is_none());
}

#[test]
fn hover_with_degenerate_normal_clears_candidate() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::ZERO).unwrap();
    session.hover_voxel_face(0, UP);
    assert!(session.placement_candidate().is_some());

    session.hover_voxel_face(0, Vec3::new(0.5, 0.5, 0.0));
    assert!(session.placement_candidate().is_none());
}

#[test]
fn ghost_color_follows_duplicate_neighbor() {
    let mut session = new_session();
    session.set_current_color(hex("#112233"));
    session.click_empty_cell(IVec3::ZERO).unwrap();

    session.set_current_color(hex("#ffffff"));
    session.set_active_tool(Tool::Duplicate);
    session.hover_voxel_face(0, UP);

    // The candidate cell (0,1,0) face-touches the voxel at the origin.
    assert_eq!(session.ghost_color(), hex("#112233"));

    // Away from any neighbor the ghost falls back to the current color.
    session.hover_empty_cell(IVec3::new(8, 8, 8));
    assert_eq!(session.ghost_color(), hex("#ffffff"));

    // Other tools always preview the current color.
    session.set_active_tool(Tool::Pencil);
    session.hover_voxel_face(0, UP);
    assert_eq!(session.ghost_color(), hex("#ffffff"));
}

#[test]
fn empty_generation_stages_nothing() {
    let mut session = new_session();
    session.stage_preview(Vec::new());
    assert!(session.staged_voxels().is_none());
    assert!(!session.commit_preview(CommitMode::Replace));
}

#[test]
fn commit_replace_swaps_scene() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::ZERO).unwrap();

    session.stage_preview(vec![
        Voxel::new(IVec3::new(5, 0, 0), hex("#aa0000")),
        Voxel::new(IVec3::new(5, 1, 0), hex("#bb0000")),
    ]);
    assert!(session.commit_preview(CommitMode::Replace));

    assert_eq!(session.voxels().len(), 2);
    assert!(session.store().voxel_at(IVec3::ZERO).is_none());
    assert!(session.staged_voxels().is_none());

    // Exactly one snapshot: a single undo returns to the pre-commit scene.
    assert!(session.undo());
    assert_eq!(session.voxels().len(), 1);
}

#[test]
fn commit_append_extends_scene() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::new(0, 0, 0)).unwrap();
    session.click_empty_cell(IVec3::new(1, 0, 0)).unwrap();

    session.stage_preview(vec![
        Voxel::new(IVec3::new(0, 5, 0), hex("#aa0000")),
        Voxel::new(IVec3::new(1, 5, 0), hex("#bb0000")),
        Voxel::new(IVec3::new(2, 5, 0), hex("#cc0000")),
    ]);
    assert!(session.commit_preview(CommitMode::Append));

    assert_eq!(session.voxels().len(), 5);
    assert!(session.staged_voxels().is_none());

    assert!(session.undo());
    assert_eq!(session.voxels().len(), 2);
}

#[test]
fn committed_preview_uses_displayed_colors() {
    let mut session = new_session();
    session.stage_preview(vec![Voxel::new(IVec3::ZERO, hex("#804040"))]);
    let target = hex("#0000ff");
    session.recolor_preview(Some(target));
    let displayed = session.staged_voxels().unwrap()[0].color;
    assert_eq!(displayed, hex("#804040").recolored_toward(target));

    session.commit_preview(CommitMode::Replace);
    assert_eq!(session.voxels()[0].color, displayed);
}

#[test]
fn discard_leaves_scene_and_history_untouched() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::ZERO).unwrap();

    session.stage_preview(vec![Voxel::new(IVec3::new(5, 5, 5), hex("#aa0000"))]);
    session.discard_preview();

    assert!(session.staged_voxels().is_none());
    assert_eq!(session.voxels().len(), 1);
    assert!(session.undo());
    assert!(session.voxels().is_empty());
    assert!(!session.undo());
}

#[test]
fn load_resets_history_and_preview() {
    let mut session = new_session();
    session.click_empty_cell(IVec3::ZERO).unwrap();
    session.stage_preview(vec![Voxel::new(IVec3::new(9, 9, 9), hex("#aa0000"))]);

    session.load(
        vec![Voxel::new(IVec3::new(2, 2, 2), hex("#00aaff"))],
        32,
        0.5,
        hex("#ff00ff"),
    );

    assert_eq!(session.voxels().len(), 1);
    assert_eq!(session.grid_size(), 32);
    assert_eq!(session.current_color(), hex("#ff00ff"));
    assert!(session.staged_voxels().is_none());
    // The loaded scene is the history floor.
    assert!(!session.undo());
}
