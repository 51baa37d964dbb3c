use ratatui::style::Color;

use crate::constants::{COLS, ROWS};
use crate::game::piece::ShapeMatrix;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Filled(Color),
}

pub type Board = [[Cell; COLS]; ROWS];

pub fn empty_board() -> Board {
    [[Cell::Empty; COLS]; ROWS]
}

/// Sole arbiter of placement legality. A shape cell is illegal when it
/// leaves the field horizontally, falls below the bottom row, or lands on
/// an occupied cell. Rows above the field (negative board row) are legal
/// and skip the occupancy check, so freshly spawned or rotated pieces may
/// overhang the top edge; their columns are still bounds-checked.
pub fn collides(board: &Board, shape: &ShapeMatrix, offset_x: i32, offset_y: i32) -> bool {
    for (y, row) in shape.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if !cell {
                continue;
            }
            let px = x as i32 + offset_x;
            let py = y as i32 + offset_y;
            if px < 0 || px >= COLS as i32 || py >= ROWS as i32 {
                return true;
            }
            if py >= 0 && board[py as usize][px as usize] != Cell::Empty {
                return true;
            }
        }
    }
    false
}

/// Writes a piece's occupied cells into the board. The placement must
/// already have passed `collides`; this indexes the board directly and
/// will panic on an out-of-range placement.
pub fn freeze(board: &mut Board, shape: &ShapeMatrix, offset_x: i32, offset_y: i32, color: Color) {
    for (y, row) in shape.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell {
                let px = (x as i32 + offset_x) as usize;
                let py = (y as i32 + offset_y) as usize;
                board[py][px] = Cell::Filled(color);
            }
        }
    }
}

/// Removes every full row, keeping the surviving rows in order, and tops
/// the board back up with empty rows. Full rows need not be adjacent.
/// Returns the rebuilt board and the number of rows removed.
pub fn clear_lines(board: &Board) -> (Board, u32) {
    let mut new_board = empty_board();
    let mut cleared = 0u32;
    let mut write_row = ROWS;

    for read_row in (0..ROWS).rev() {
        if board[read_row].iter().all(|&cell| cell != Cell::Empty) {
            cleared += 1;
        } else {
            write_row -= 1;
            new_board[write_row] = board[read_row];
        }
    }

    (new_board, cleared)
}
