use serde::{Deserialize, Serialize};

use super::types::{FirstPlayerMode, GameMode};

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SosSessionSettings {
    pub board_size: usize,
    pub game_mode: GameMode,
    pub first_player_mode: FirstPlayerMode,
}

impl SosSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(format!(
                "Board size must be at least {}",
                MIN_BOARD_SIZE
            ));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must not exceed {}",
                MAX_BOARD_SIZE
            ));
        }
        Ok(())
    }
}

impl Default for SosSessionSettings {
    fn default() -> Self {
        Self {
            board_size: 6,
            game_mode: GameMode::Simple,
            first_player_mode: FirstPlayerMode::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(SosSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_board_sizes() {
        let mut settings = SosSessionSettings::default();
        settings.board_size = 2;
        assert!(settings.validate().is_err());
        settings.board_size = 13;
        assert!(settings.validate().is_err());
        settings.board_size = 3;
        assert!(settings.validate().is_ok());
        settings.board_size = 12;
        assert!(settings.validate().is_ok());
    }
}
