//! Grid behavior through the public API.

use blockfall::core::{catalog_matrix, Grid};
use blockfall::types::{PieceKind, GRID_COLS, GRID_ROWS};

fn fill_row(grid: &mut Grid, y: i8, except: Option<i8>) {
    for x in 0..GRID_COLS as i8 {
        if Some(x) != except {
            grid.set(x, y, 1);
        }
    }
}

#[test]
fn test_new_grid_dimensions_and_emptiness() {
    let grid = Grid::new();
    assert_eq!(grid.width(), GRID_COLS);
    assert_eq!(grid.height(), GRID_ROWS);
    assert!(grid.cells().iter().all(|&tag| tag == 0));
}

#[test]
fn test_get_set_round_trip() {
    let mut grid = Grid::new();

    assert!(grid.set(5, 10, 6));
    assert_eq!(grid.get(5, 10), Some(6));

    assert!(grid.set(5, 10, 0));
    assert_eq!(grid.get(5, 10), Some(0));

    // Out of bounds refuses and reads back as None.
    assert!(!grid.set(-1, 0, 1));
    assert!(!grid.set(0, GRID_ROWS as i8, 1));
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(GRID_COLS as i8, 0), None);
}

#[test]
fn test_occupancy_boundaries() {
    let grid = Grid::new();

    // Side walls and the floor are solid.
    assert!(grid.is_occupied(-1, 10));
    assert!(grid.is_occupied(GRID_COLS as i8, 10));
    assert!(grid.is_occupied(3, GRID_ROWS as i8));

    // The area above the grid is open so pieces can spawn into it.
    assert!(!grid.is_occupied(3, -1));
    assert!(!grid.is_occupied(3, -4));

    // Interior empty cells are free.
    assert!(!grid.is_occupied(3, 10));
}

#[test]
fn test_lock_then_clear_single_row() {
    let mut grid = Grid::new();

    // Bottom row complete except column 5, marker above.
    fill_row(&mut grid, 19, Some(5));
    grid.set(2, 18, 4);

    // Close the gap and collapse.
    grid.set(5, 19, 1);
    let cleared = grid.clear_complete_rows();

    assert_eq!(cleared, 1);
    // Row 19 now holds exactly what row 18 held.
    for x in 0..GRID_COLS as i8 {
        let expected = if x == 2 { 4 } else { 0 };
        assert_eq!(grid.get(x, 19), Some(expected));
        assert_eq!(grid.get(x, 18), Some(0));
    }
}

#[test]
fn test_lock_writes_piece_tags() {
    let mut grid = Grid::new();
    let matrix = catalog_matrix(PieceKind::O);

    grid.lock(&matrix, 4, 18);

    let tag = PieceKind::O.tag();
    assert_eq!(grid.get(4, 18), Some(tag));
    assert_eq!(grid.get(5, 18), Some(tag));
    assert_eq!(grid.get(4, 19), Some(tag));
    assert_eq!(grid.get(5, 19), Some(tag));
}

#[test]
fn test_multi_row_clear_preserves_order_of_survivors() {
    let mut grid = Grid::new();

    // Two full rows with distinct survivor rows between and above them.
    fill_row(&mut grid, 17, None);
    fill_row(&mut grid, 19, None);
    grid.set(1, 16, 2);
    grid.set(2, 18, 3);

    assert_eq!(grid.clear_complete_rows(), 2);

    // Survivors keep their relative order: row 16's marker stays above
    // row 18's after both drop.
    assert_eq!(grid.get(1, 18), Some(2));
    assert_eq!(grid.get(2, 19), Some(3));

    // The top two rows are empty.
    for y in 0..2 {
        for x in 0..GRID_COLS as i8 {
            assert_eq!(grid.get(x, y), Some(0));
        }
    }
}

#[test]
fn test_reset_empties_everything() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 0, None);
    fill_row(&mut grid, 19, None);

    grid.reset();
    assert!(grid.cells().iter().all(|&tag| tag == 0));
}
