mod sos;

pub use sos::{GameUiAction, SosGameUi, calculate_cell_size, draw_board};
