use crate::games::SessionRng;

use super::board::get_empty_cells;
use super::game_state::SosGameState;
use super::sequence_detector::completed_sequences;
use super::types::{GameMode, Letter, Placement, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SosBotType {
    Random,
    Heuristic,
}

pub struct BotInput {
    pub board: Vec<Vec<Option<Letter>>>,
    pub game_mode: GameMode,
}

impl BotInput {
    pub fn from_game_state(state: &SosGameState) -> Self {
        Self {
            board: state.board.clone(),
            game_mode: state.game_mode,
        }
    }
}

pub fn calculate_move(
    bot_type: SosBotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<Placement> {
    match bot_type {
        SosBotType::Random => calculate_random_move(input, rng),
        SosBotType::Heuristic => calculate_heuristic_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Placement> {
    let empty_cells = get_empty_cells(&input.board);
    if empty_cells.is_empty() {
        return None;
    }
    let position = empty_cells[rng.random_range(0..empty_cells.len())];
    let letter = if rng.random_bool() { Letter::S } else { Letter::O };
    Some(Placement::new(position.row, position.col, letter))
}

/// Greedy, rule-ordered move selection. Completing a sequence pays off for
/// whichever side places the final letter, so taking our own completion and
/// denying the opponent theirs is the same rule; no separate blocking pass
/// exists. Without a completing move, grab corners before edges before
/// center cells. Ties always resolve S before O, then lowest row-major
/// position, so identical boards produce identical placements.
pub fn calculate_heuristic_move(input: &BotInput) -> Option<Placement> {
    let empty_cells = get_empty_cells(&input.board);
    if empty_cells.is_empty() {
        return None;
    }

    if let Some(placement) = find_completing_move(&input.board, &empty_cells) {
        return Some(placement);
    }

    if let Some(placement) = find_positional_move(&input.board, &empty_cells) {
        return Some(placement);
    }

    // unreachable: every empty cell falls in one of the tiers above
    let position = empty_cells[0];
    Some(Placement::new(position.row, position.col, Letter::S))
}

/// Best candidate that finishes at least one sequence. Iteration runs
/// letter S first, positions row-major, keeping the first candidate with a
/// strictly higher completion count, which realizes the tie-break order:
/// more completions, then S over O, then row-major position.
fn find_completing_move(
    board: &[Vec<Option<Letter>>],
    empty_cells: &[Position],
) -> Option<Placement> {
    let mut best: Option<(Placement, usize)> = None;

    for letter in [Letter::S, Letter::O] {
        for &position in empty_cells {
            let count = completed_sequences(board, position.row, position.col, letter);
            if count == 0 {
                continue;
            }
            let improves = match best {
                None => true,
                Some((_, best_count)) => count > best_count,
            };
            if improves {
                best = Some((Placement::new(position.row, position.col, letter), count));
            }
        }
    }

    best.map(|(placement, _)| placement)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellTier {
    Corner,
    Edge,
    Center,
}

fn classify_cell(position: Position, size: usize) -> CellTier {
    let row_on_border = position.row == 0 || position.row == size - 1;
    let col_on_border = position.col == 0 || position.col == size - 1;
    match (row_on_border, col_on_border) {
        (true, true) => CellTier::Corner,
        (true, false) | (false, true) => CellTier::Edge,
        (false, false) => CellTier::Center,
    }
}

/// First empty cell of the best available tier, row-major, with S. S is the
/// terminal letter of every sequence and corners sit on fewer lines, so an
/// early corner S opens completions on two axes at low risk.
fn find_positional_move(
    board: &[Vec<Option<Letter>>],
    empty_cells: &[Position],
) -> Option<Placement> {
    let size = board.len();
    for tier in [CellTier::Corner, CellTier::Edge, CellTier::Center] {
        if let Some(&position) = empty_cells
            .iter()
            .find(|&&position| classify_cell(position, size) == tier)
        {
            return Some(Placement::new(position.row, position.col, Letter::S));
        }
    }
    None
}
