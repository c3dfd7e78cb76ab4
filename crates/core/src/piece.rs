//! Active piece module - the single falling piece
//!
//! The active piece owns a copy of its catalog matrix (rotation mutates the
//! copy, never the catalog) and an anchor: the board coordinate of the
//! matrix's top-left corner. All movement is attempt-then-commit against the
//! grid's occupancy test; a rejected attempt leaves the piece untouched.

use crate::grid::Grid;
use crate::shapes::{catalog_matrix, ShapeMatrix};
use blockfall_types::{PieceKind, RotateDir, GRID_COLS};

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    kind: PieceKind,
    matrix: ShapeMatrix,
    x: i8,
    y: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn position.
    ///
    /// The anchor centers the bounding matrix: `x = (cols - size) / 2`,
    /// `y = 0`. The caller is responsible for checking [`collides`] at the
    /// spawn position and declaring game over if it does.
    ///
    /// [`collides`]: ActivePiece::collides
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = catalog_matrix(kind);
        let x = ((GRID_COLS as usize - matrix.size()) / 2) as i8;
        Self {
            kind,
            matrix,
            x,
            y: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn matrix(&self) -> &ShapeMatrix {
        &self.matrix
    }

    /// Anchor x (board column of the matrix's left edge)
    pub fn x(&self) -> i8 {
        self.x
    }

    /// Anchor y (board row of the matrix's top edge)
    pub fn y(&self) -> i8 {
        self.y
    }

    fn fits(matrix: &ShapeMatrix, grid: &Grid, x: i8, y: i8) -> bool {
        let n = matrix.size();
        for row in 0..n {
            for col in 0..n {
                if matrix.tag_at(row, col) != 0
                    && grid.is_occupied(x + col as i8, y + row as i8)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the piece collides with the grid at its current position
    pub fn collides(&self, grid: &Grid) -> bool {
        !Self::fits(&self.matrix, grid, self.x, self.y)
    }

    /// Try to translate by (dx, dy); commits and returns true only when the
    /// destination is collision-free.
    pub fn try_move(&mut self, grid: &Grid, dx: i8, dy: i8) -> bool {
        let new_x = self.x + dx;
        let new_y = self.y + dy;
        if Self::fits(&self.matrix, grid, new_x, new_y) {
            self.x = new_x;
            self.y = new_y;
            return true;
        }
        false
    }

    /// Try to rotate in place.
    ///
    /// The rotated matrix is tested at the current anchor with no offset
    /// search; a rotation that would collide is rejected and the piece keeps
    /// its orientation.
    pub fn try_rotate(&mut self, grid: &Grid, dir: RotateDir) -> bool {
        let mut rotated = self.matrix;
        match dir {
            RotateDir::Clockwise => rotated.rotate_cw(),
            RotateDir::CounterClockwise => rotated.rotate_ccw(),
        }
        if Self::fits(&rotated, grid, self.x, self.y) {
            self.matrix = rotated;
            return true;
        }
        false
    }

    /// Drop to the lowest collision-free position, returning the number of
    /// rows descended. The caller locks the piece afterwards.
    pub fn drop_to_floor(&mut self, grid: &Grid) -> u8 {
        let mut rows = 0;
        while self.try_move(grid, 0, 1) {
            rows += 1;
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::GRID_ROWS;

    #[test]
    fn test_spawn_centers_bounding_matrix() {
        assert_eq!(ActivePiece::spawn(PieceKind::I).x(), 3);
        assert_eq!(ActivePiece::spawn(PieceKind::T).x(), 3);
        assert_eq!(ActivePiece::spawn(PieceKind::O).x(), 4);
        for kind in PieceKind::ALL {
            assert_eq!(ActivePiece::spawn(kind).y(), 0);
        }
    }

    #[test]
    fn test_spawn_never_collides_on_empty_grid() {
        let grid = Grid::new();
        for kind in PieceKind::ALL {
            assert!(!ActivePiece::spawn(kind).collides(&grid), "{:?}", kind);
        }
    }

    #[test]
    fn test_try_move_commits_or_leaves_untouched() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceKind::T);
        let before = piece;

        assert!(piece.try_move(&grid, 1, 0));
        assert_eq!(piece.x(), before.x() + 1);
        assert_eq!(piece.y(), before.y());

        // Walk into the left wall; the failing move must not mutate.
        let mut piece = ActivePiece::spawn(PieceKind::T);
        while piece.try_move(&grid, -1, 0) {}
        let at_wall = piece;
        assert!(!piece.try_move(&grid, -1, 0));
        assert_eq!(piece, at_wall);
        assert_eq!(piece.x(), 0);
    }

    #[test]
    fn test_cannot_move_below_floor() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceKind::O);
        piece.drop_to_floor(&grid);
        assert!(!piece.try_move(&grid, 0, 1));
        // O is 2x2, so its anchor rests two rows above the floor.
        assert_eq!(piece.y(), GRID_ROWS as i8 - 2);
    }

    #[test]
    fn test_move_blocked_by_locked_cells() {
        let mut grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceKind::O);

        // Wall of locked cells directly right of the spawn footprint.
        for y in 0..GRID_ROWS as i8 {
            grid.set(6, y, 2);
        }

        assert!(!piece.try_move(&grid, 1, 0));
        assert!(piece.try_move(&grid, -1, 0));
    }

    #[test]
    fn test_rotation_rejected_when_blocked() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceKind::I);
        piece.drop_to_floor(&grid);

        // A vertical I at the resting row would reach below the floor, so
        // the rotation must be refused and the piece left horizontal.
        let before = piece;
        assert!(!piece.try_rotate(&grid, RotateDir::Clockwise));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_rotation_near_wall_rejected_without_kick() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceKind::I);

        // Vertical I hugging the left wall: its bar sits in matrix column 2,
        // so the anchor can go to x = -2.
        assert!(piece.try_rotate(&grid, RotateDir::Clockwise));
        while piece.try_move(&grid, -1, 0) {}
        assert_eq!(piece.x(), -2);

        // Rotating back to horizontal would poke through the wall; with no
        // wall kicks it simply fails.
        let before = piece;
        assert!(!piece.try_rotate(&grid, RotateDir::CounterClockwise));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_drop_to_floor_distance() {
        let grid = Grid::new();
        let mut piece = ActivePiece::spawn(PieceKind::I);
        // Horizontal I occupies matrix row 1; from y = 0 it can fall until
        // that row reaches the bottom row.
        let rows = piece.drop_to_floor(&grid);
        assert_eq!(rows, GRID_ROWS - 2);
        assert_eq!(piece.y(), (GRID_ROWS - 2) as i8);
    }

    #[test]
    fn test_drop_lands_on_stack() {
        let mut grid = Grid::new();
        for x in 0..GRID_COLS as i8 {
            grid.set(x, 19, 1);
        }

        let mut piece = ActivePiece::spawn(PieceKind::O);
        piece.drop_to_floor(&grid);
        assert_eq!(piece.y(), 17);
    }
}
