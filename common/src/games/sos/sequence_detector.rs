use super::types::{Letter, Position};

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

const SOS_PATTERN: [Letter; 3] = [Letter::S, Letter::O, Letter::S];

/// Number of S-O-S sequences a hypothetical placement would complete.
///
/// The target cell must be empty; calling this on an occupied cell is a bug
/// in the caller's candidate generation and panics. Each direction through
/// the cell contributes up to three distinct 3-cell windows (target at
/// offset 0, 1 or 2), and every in-bounds window is tested exactly once.
/// S-O-S reads the same in both traversal directions, so a single forward
/// read per window covers both.
pub fn completed_sequences(
    board: &[Vec<Option<Letter>>],
    row: usize,
    col: usize,
    letter: Letter,
) -> usize {
    assert!(
        board[row][col].is_none(),
        "completed_sequences called on occupied cell ({}, {})",
        row,
        col
    );

    let mut count = 0;
    for (d_row, d_col) in DIRECTIONS {
        for target_offset in 0..3 {
            if window_reads_sos(board, row, col, d_row, d_col, target_offset, Some(letter)) {
                count += 1;
            }
        }
    }
    count
}

/// Completed S-O-S lines through an already-placed cell, as (start, end)
/// position pairs. Used to score an applied move: a sequence is finished
/// exactly when its last empty cell is filled, so every line reported here
/// is new.
pub fn sos_lines_through(
    board: &[Vec<Option<Letter>>],
    row: usize,
    col: usize,
) -> Vec<(Position, Position)> {
    let mut lines = Vec::new();
    for (d_row, d_col) in DIRECTIONS {
        for target_offset in 0..3 {
            if window_reads_sos(board, row, col, d_row, d_col, target_offset, None) {
                let start_row = row as isize - d_row * target_offset;
                let start_col = col as isize - d_col * target_offset;
                lines.push((
                    Position::new(start_row as usize, start_col as usize),
                    Position::new((start_row + d_row * 2) as usize, (start_col + d_col * 2) as usize),
                ));
            }
        }
    }
    lines
}

/// Tests one 3-cell window: the window runs along (d_row, d_col) with the
/// target cell at `target_offset`. With `placed` set, the target cell reads
/// as that letter instead of the board value.
fn window_reads_sos(
    board: &[Vec<Option<Letter>>],
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
    target_offset: isize,
    placed: Option<Letter>,
) -> bool {
    let size = board.len() as isize;
    let start_row = row as isize - d_row * target_offset;
    let start_col = col as isize - d_col * target_offset;

    for i in 0..3 {
        let cell_row = start_row + d_row * i;
        let cell_col = start_col + d_col * i;
        if cell_row < 0 || cell_col < 0 || cell_row >= size || cell_col >= size {
            return false;
        }

        let value = if i == target_offset && placed.is_some() {
            placed
        } else {
            board[cell_row as usize][cell_col as usize]
        };

        if value != Some(SOS_PATTERN[i as usize]) {
            return false;
        }
    }

    true
}
