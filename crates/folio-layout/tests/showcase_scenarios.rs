//! End-to-end scenarios for the showcase grid: focus entry, exit, direct
//! focus moves, row-major insertion, rejected inserts, and hit testing.

use folio_core::event::PointerEvent;
use folio_layout::{
    FocusState, GridCell, GridConfig, LayoutConfig, MediaDescriptor, MediaGrid, MediaKind,
    PlacementAllocator, Rect,
};

fn six_tile_grid() -> MediaGrid {
    let tiles = (1..=6).map(|i| MediaDescriptor::image(format!("project{i}.png"), format!("P{i}")));
    let config = GridConfig::new(LayoutConfig::default().with_focus_expansion(6.0).with_gap(4))
        .with_tiles(tiles);
    MediaGrid::new(config).expect("valid config")
}

fn empty_grid() -> MediaGrid {
    MediaGrid::new(GridConfig::default()).expect("default config is valid")
}

#[test]
fn focus_entry_expands_row_and_column() {
    let mut grid = six_tile_grid();
    assert!(grid.pointer_enter(GridCell::new(1, 0)));
    let spec = grid.partition();
    assert_eq!(spec.rows, [3.0, 6.0, 3.0]);
    assert_eq!(spec.cols, [6.0, 3.0, 3.0]);
}

#[test]
fn focus_exit_reverts_to_thirds() {
    let mut grid = six_tile_grid();
    grid.pointer_enter(GridCell::new(1, 0));
    assert!(grid.pointer_leave(GridCell::new(1, 0)));
    let spec = grid.partition();
    assert_eq!(spec.rows, [4.0, 4.0, 4.0]);
    assert_eq!(spec.cols, [4.0, 4.0, 4.0]);
    assert_eq!(grid.focus(), FocusState::NoFocus);
}

#[test]
fn focus_jumps_between_cells_without_clearing() {
    let mut grid = six_tile_grid();
    grid.pointer_enter(GridCell::new(0, 0));
    grid.pointer_enter(GridCell::new(2, 2));
    assert_eq!(grid.focus(), FocusState::FocusedAt(GridCell::new(2, 2)));
    let spec = grid.partition();
    assert_eq!(spec.rows, [3.0, 3.0, 6.0]);
    assert_eq!(spec.cols, [3.0, 3.0, 6.0]);

    // The late leave from the first cell must not clear the new focus.
    assert!(!grid.pointer_leave(GridCell::new(0, 0)));
    assert_eq!(grid.focus(), FocusState::FocusedAt(GridCell::new(2, 2)));
}

#[test]
fn inserts_fill_first_row_in_order() {
    let mut grid = empty_grid();
    let cells: Vec<_> = ["a.png", "b.png", "c.png"]
        .into_iter()
        .map(|src| {
            grid.insert(MediaDescriptor::new(src, MediaKind::Image, ""))
                .expect("non-empty source")
                .position
        })
        .collect();
    assert_eq!(
        cells,
        vec![GridCell::new(0, 0), GridCell::new(0, 1), GridCell::new(0, 2)]
    );
}

#[test]
fn empty_source_insert_is_noop() {
    let mut grid = six_tile_grid();
    let before = grid.tiles();
    assert!(grid.insert(MediaDescriptor::image("", "x")).is_none());
    assert_eq!(grid.tiles(), before);
}

#[test]
fn insert_uses_previous_count() {
    let mut grid = six_tile_grid();
    let previous = grid.tiles().len();
    let tile = grid
        .insert(MediaDescriptor::video("demo.mp4", "Demo"))
        .expect("inserted");
    assert_eq!(grid.tiles().len(), previous + 1);
    assert_eq!(tile.position, PlacementAllocator::allocate(previous));
    assert_eq!(grid.tiles().last(), Some(&tile));
}

#[test]
fn inserted_tile_renders_at_default_proportions() {
    let mut grid = six_tile_grid();
    let tile = grid
        .insert(MediaDescriptor::image("new.png", "New"))
        .expect("inserted");
    assert_eq!(tile.position, GridCell::new(2, 0));
    let regions = grid.render(Rect::from_size(128, 68));
    assert_eq!(regions.last(), Some(&(tile.id, Rect::new(0, 48, 40, 20))));
}

#[test]
fn tenth_tile_is_kept_but_not_rendered() {
    let mut grid = six_tile_grid();
    for i in 0..4 {
        grid.insert(MediaDescriptor::image(format!("more{i}.png"), ""));
    }
    let tiles = grid.tiles();
    assert_eq!(tiles.len(), 10);
    assert_eq!(tiles[9].position, GridCell::new(3, 0));
    let rendered = grid.render(Rect::from_size(300, 300));
    assert!(rendered.iter().all(|(id, _)| *id != tiles[9].id));
    assert_eq!(rendered.len(), 9);
}

#[test]
fn focused_render_sizes_follow_partition() {
    let mut grid = six_tile_grid();
    grid.pointer_enter(GridCell::new(1, 0));
    // 128 - 2*4 = 120 wide, 68 - 2*4 = 60 tall.
    let layout = grid.layout(Rect::from_size(128, 68));
    assert_eq!(layout.col_width(0), 60);
    assert_eq!(layout.col_width(1), 30);
    assert_eq!(layout.row_height(1), 30);
    assert_eq!(layout.row_height(0), 15);
    assert_eq!(
        layout.region(GridCell::new(1, 0)),
        Some(Rect::new(0, 19, 60, 30))
    );
}

#[test]
fn render_right_after_focus_matches_layout() {
    let mut grid = six_tile_grid();
    let area = Rect::from_size(128, 68);
    grid.pointer_enter(GridCell::new(1, 0));
    let layout = grid.layout(area);
    let rendered = grid.render(area);
    let focal = grid.tiles()[3].id;
    assert_eq!(
        rendered.iter().find(|(id, _)| *id == focal).map(|(_, rect)| *rect),
        layout.region(GridCell::new(1, 0))
    );
}

#[test]
fn hovering_empty_cell_leaves_partition_alone() {
    let mut grid = six_tile_grid();
    let area = Rect::from_size(128, 68);
    assert!(!grid.handle_pointer(area, PointerEvent::moved(100, 60)));
    assert_eq!(grid.focus(), FocusState::NoFocus);
    assert_eq!(grid.partition().rows, [4.0, 4.0, 4.0]);
    assert_eq!(grid.partition().cols, [4.0, 4.0, 4.0]);
}
