//! Placement legality checks
//!
//! A candidate word crosses exactly one existing letter, the anchor. Every
//! other letter must land on an empty in-bounds cell with empty surroundings,
//! and the cells just beyond both ends must be empty so words never touch
//! end-to-end. The anchor cell must hold the anchor letter exactly (or still
//! be empty); its side neighbors are exempt from the clearance rule, which is
//! what lets words cross at all.
//!
//! Anchor matching is case-sensitive: an uppercase cell never matches a
//! lowercase candidate letter, so the main word's diagonal cells cannot be
//! crossed through these checks.

use crate::core::{Grid, GridPosition};

/// Check whether `word` can run downward with its `loc`-th letter on `anchor`
///
/// Out-of-bounds reads count as empty, so end caps and neighborhoods that
/// poke past the edges pass automatically; the letters themselves must all
/// be in bounds.
#[must_use]
pub fn can_place_vertical(grid: &Grid, word: &str, anchor: GridPosition, loc: usize) -> bool {
    let letters: Vec<char> = word.chars().collect();
    let len = letters.len() as i32;
    let loc = loc as i32;

    // Cells just beyond both ends must be empty
    if grid.get(anchor.row - loc - 1, anchor.col) != Grid::EMPTY {
        return false;
    }
    if grid.get(anchor.row + len - loc, anchor.col) != Grid::EMPTY {
        return false;
    }

    for (i, &letter) in letters.iter().enumerate() {
        let offset = i as i32 - loc;
        let row = anchor.row + offset;

        if !grid.in_bounds(row, anchor.col) {
            return false;
        }

        let cell = grid.get(row, anchor.col);
        if cell != Grid::EMPTY && cell != letter {
            return false;
        }

        // Non-anchor letters need clear surroundings; the first and last
        // letters also guard the row past their end
        if offset != 0 {
            let row_offsets: &[i32] = if i == 0 {
                &[-1, 0]
            } else if i as i32 == len - 1 {
                &[0, 1]
            } else {
                &[0]
            };
            for &dr in row_offsets {
                for dc in -1..=1 {
                    if grid.get(row + dr, anchor.col + dc) != Grid::EMPTY {
                        return false;
                    }
                }
            }
        }
    }

    true
}

/// Check whether `word` can run rightward with its `loc`-th letter on `anchor`
///
/// The transpose of [`can_place_vertical`].
#[must_use]
pub fn can_place_horizontal(grid: &Grid, word: &str, anchor: GridPosition, loc: usize) -> bool {
    let letters: Vec<char> = word.chars().collect();
    let len = letters.len() as i32;
    let loc = loc as i32;

    if grid.get(anchor.row, anchor.col - loc - 1) != Grid::EMPTY {
        return false;
    }
    if grid.get(anchor.row, anchor.col + len - loc) != Grid::EMPTY {
        return false;
    }

    for (i, &letter) in letters.iter().enumerate() {
        let offset = i as i32 - loc;
        let col = anchor.col + offset;

        if !grid.in_bounds(anchor.row, col) {
            return false;
        }

        let cell = grid.get(anchor.row, col);
        if cell != Grid::EMPTY && cell != letter {
            return false;
        }

        if offset != 0 {
            let col_offsets: &[i32] = if i == 0 {
                &[-1, 0]
            } else if i as i32 == len - 1 {
                &[0, 1]
            } else {
                &[0]
            };
            for &dc in col_offsets {
                for dr in -1..=1 {
                    if grid.get(anchor.row + dr, col + dc) != Grid::EMPTY {
                        return false;
                    }
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid() -> Grid {
        Grid::new(15, 25)
    }

    fn with_horizontal(grid: &mut Grid, word: &str, row: i32, col: i32) {
        for (i, ch) in word.chars().enumerate() {
            grid.set(row, col + i as i32, ch);
        }
    }

    fn with_vertical(grid: &mut Grid, word: &str, row: i32, col: i32) {
        for (i, ch) in word.chars().enumerate() {
            grid.set(row + i as i32, col, ch);
        }
    }

    /// "mast" across row 7, columns 10-13
    fn base_row() -> Grid {
        let mut grid = empty_grid();
        with_horizontal(&mut grid, "mast", 7, 10);
        grid
    }

    /// "mast" down column 7, rows 5-8
    fn base_col() -> Grid {
        let mut grid = empty_grid();
        with_vertical(&mut grid, "mast", 5, 7);
        grid
    }

    // -- vertical --

    #[test]
    fn vertical_cross_with_anchor_at_first_letter() {
        // "stem" hangs below the s of mast; the anchor's row neighbors
        // (a and t of mast) are exempt from the clearance rule
        let grid = base_row();
        assert!(can_place_vertical(
            &grid,
            "stem",
            GridPosition::new(7, 12),
            0
        ));
    }

    #[test]
    fn vertical_cross_with_anchor_mid_word() {
        // "salt" through the a of mast, one letter above, two below
        let grid = base_row();
        assert!(can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_cross_with_anchor_at_last_letter() {
        // "tea" ends on the a of mast; m and s beside the anchor are exempt
        let grid = base_row();
        assert!(can_place_vertical(&grid, "tea", GridPosition::new(7, 11), 2));
    }

    #[test]
    fn vertical_rejects_blocker_above_top_end() {
        let mut grid = base_row();
        grid.set(5, 11, 'x');
        assert!(!can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_rejects_blocker_above_anchor_at_first_letter() {
        // Only the end cap sees (6, 12): the anchor has no clearance checks
        let mut grid = base_row();
        grid.set(6, 12, 'x');
        assert!(!can_place_vertical(
            &grid,
            "stem",
            GridPosition::new(7, 12),
            0
        ));
    }

    #[test]
    fn vertical_rejects_blocker_below_bottom_end() {
        let mut grid = base_row();
        grid.set(10, 11, 'x');
        assert!(!can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_rejects_neighbor_beside_first_letter() {
        let mut grid = base_row();
        grid.set(6, 10, 'x');
        assert!(!can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_rejects_diagonal_neighbor_of_first_letter() {
        let mut grid = base_row();
        grid.set(5, 10, 'x');
        assert!(!can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_rejects_diagonal_neighbor_past_last_letter() {
        let mut grid = base_row();
        grid.set(10, 12, 'x');
        assert!(!can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_rejects_neighbor_beside_middle_letter() {
        let mut left = base_row();
        left.set(8, 10, 'x');
        assert!(!can_place_vertical(
            &left,
            "salt",
            GridPosition::new(7, 11),
            1
        ));

        let mut right = base_row();
        right.set(8, 12, 'x');
        assert!(!can_place_vertical(
            &right,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_rejects_matching_letter_off_anchor() {
        // The l at (8, 11) matches salt's l, but only the anchor may reuse
        // an occupied cell
        let mut grid = base_row();
        grid.set(8, 11, 'l');
        assert!(!can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_rejects_conflicting_letter_off_anchor() {
        let mut grid = base_row();
        grid.set(8, 11, 'z');
        assert!(!can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_allows_empty_anchor_cell() {
        let grid = empty_grid();
        assert!(can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_rejects_case_mismatch_at_anchor() {
        // Uppercase cells (the main word's diagonal) never match lowercase
        // candidate letters
        let mut grid = empty_grid();
        grid.set(7, 11, 'A');
        assert!(!can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(7, 11),
            1
        ));
    }

    #[test]
    fn vertical_may_reach_top_row() {
        let mut grid = empty_grid();
        with_horizontal(&mut grid, "mast", 1, 10);
        assert!(can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(1, 11),
            1
        ));
    }

    #[test]
    fn vertical_may_end_on_bottom_row() {
        let mut grid = empty_grid();
        with_horizontal(&mut grid, "mast", 12, 10);
        assert!(can_place_vertical(
            &grid,
            "alt",
            GridPosition::new(12, 11),
            0
        ));
    }

    #[test]
    fn vertical_rejects_overhang_past_top_row() {
        let mut grid = empty_grid();
        with_horizontal(&mut grid, "mast", 1, 10);
        // Anchoring salt's l puts the s at row -1
        assert!(!can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(1, 11),
            2
        ));
    }

    #[test]
    fn vertical_rejects_overhang_past_bottom_row() {
        let mut grid = empty_grid();
        with_horizontal(&mut grid, "mast", 13, 10);
        assert!(!can_place_vertical(
            &grid,
            "salt",
            GridPosition::new(13, 11),
            1
        ));
    }

    // -- horizontal --

    #[test]
    fn horizontal_cross_with_anchor_mid_word() {
        // "salt" through the a of a vertical mast; the m above and s below
        // the anchor are exempt
        let grid = base_col();
        assert!(can_place_horizontal(
            &grid,
            "salt",
            GridPosition::new(6, 7),
            1
        ));
    }

    #[test]
    fn horizontal_six_letter_cross() {
        let grid = base_col();
        assert!(can_place_horizontal(
            &grid,
            "stream",
            GridPosition::new(8, 7),
            1
        ));
    }

    #[test]
    fn horizontal_rejects_blocker_past_right_end() {
        let mut grid = base_col();
        grid.set(8, 12, 'x');
        assert!(!can_place_horizontal(
            &grid,
            "stream",
            GridPosition::new(8, 7),
            1
        ));
    }

    #[test]
    fn horizontal_rejects_blocker_past_left_end() {
        let mut grid = base_col();
        grid.set(6, 5, 'x');
        assert!(!can_place_horizontal(
            &grid,
            "salt",
            GridPosition::new(6, 7),
            1
        ));
    }

    #[test]
    fn horizontal_rejects_neighbor_above_first_letter() {
        let mut grid = base_col();
        grid.set(5, 6, 'x');
        assert!(!can_place_horizontal(
            &grid,
            "salt",
            GridPosition::new(6, 7),
            1
        ));
    }

    #[test]
    fn horizontal_rejects_diagonal_neighbor_of_first_letter() {
        let mut grid = base_col();
        grid.set(5, 5, 'x');
        assert!(!can_place_horizontal(
            &grid,
            "salt",
            GridPosition::new(6, 7),
            1
        ));
    }

    #[test]
    fn horizontal_rejects_diagonal_neighbor_past_last_letter() {
        let mut grid = base_col();
        grid.set(7, 10, 'x');
        assert!(!can_place_horizontal(
            &grid,
            "salt",
            GridPosition::new(6, 7),
            1
        ));
    }

    #[test]
    fn horizontal_rejects_neighbor_above_middle_letter() {
        let mut grid = base_col();
        grid.set(5, 8, 'x');
        assert!(!can_place_horizontal(
            &grid,
            "salt",
            GridPosition::new(6, 7),
            1
        ));
    }

    #[test]
    fn horizontal_rejects_matching_letter_off_anchor() {
        let mut grid = base_col();
        grid.set(6, 8, 'l');
        assert!(!can_place_horizontal(
            &grid,
            "salt",
            GridPosition::new(6, 7),
            1
        ));
    }

    #[test]
    fn horizontal_may_reach_left_column() {
        let mut grid = empty_grid();
        with_vertical(&mut grid, "mast", 5, 2);
        assert!(can_place_horizontal(
            &grid,
            "tea",
            GridPosition::new(6, 2),
            2
        ));
    }

    #[test]
    fn horizontal_may_end_on_right_column() {
        let mut grid = empty_grid();
        with_vertical(&mut grid, "mast", 5, 22);
        assert!(can_place_horizontal(
            &grid,
            "ate",
            GridPosition::new(6, 22),
            0
        ));
    }

    #[test]
    fn horizontal_rejects_overhang_past_left_column() {
        let mut grid = empty_grid();
        with_vertical(&mut grid, "mast", 5, 1);
        assert!(!can_place_horizontal(
            &grid,
            "tea",
            GridPosition::new(6, 1),
            2
        ));
    }

    #[test]
    fn horizontal_rejects_overhang_past_right_column() {
        let mut grid = empty_grid();
        with_vertical(&mut grid, "mast", 5, 23);
        assert!(!can_place_horizontal(
            &grid,
            "ate",
            GridPosition::new(6, 23),
            0
        ));
    }
}
