mod board;
mod bot_controller;
mod game_state;
mod sequence_detector;
mod session;
mod settings;
mod types;

pub use board::{get_empty_cells, make_board};
pub use bot_controller::{BotInput, SosBotType, calculate_heuristic_move, calculate_move};
pub use game_state::SosGameState;
pub use sequence_detector::{completed_sequences, sos_lines_through};
pub use session::{PlayerController, SosPlayerSlot, SosSession, SosSessionConfig};
pub use settings::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, SosSessionSettings};
pub use types::{
    FirstPlayerMode, GameMode, GameStatus, Letter, Placement, PlayerColor, Position, SosLine,
};
