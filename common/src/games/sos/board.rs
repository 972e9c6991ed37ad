use super::types::{Letter, Position};

pub fn make_board(size: usize) -> Vec<Vec<Option<Letter>>> {
    vec![vec![None; size]; size]
}

/// Empty cells in row-major order; the bot controller relies on this
/// ordering for its deterministic tie-breaks.
pub fn get_empty_cells(board: &[Vec<Option<Letter>>]) -> Vec<Position> {
    let mut cells = Vec::new();
    for (row, cols) in board.iter().enumerate() {
        for (col, &cell) in cols.iter().enumerate() {
            if cell.is_none() {
                cells.push(Position::new(row, col));
            }
        }
    }
    cells
}
