use common::config::Validate;
use common::games::sos::{
    FirstPlayerMode, GameMode, MAX_BOARD_SIZE, MIN_BOARD_SIZE, PlayerController, SosBotType,
    SosSessionSettings,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum ControllerConfig {
    Human,
    RandomBot,
    HeuristicBot,
}

impl ControllerConfig {
    pub fn to_controller(self) -> PlayerController {
        match self {
            ControllerConfig::Human => PlayerController::Human,
            ControllerConfig::RandomBot => PlayerController::Bot(SosBotType::Random),
            ControllerConfig::HeuristicBot => PlayerController::Bot(SosBotType::Heuristic),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ControllerConfig::Human => "Human",
            ControllerConfig::RandomBot => "Random bot",
            ControllerConfig::HeuristicBot => "Heuristic bot",
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SosLobbyConfig {
    pub board_size: u32,
    pub game_mode: GameMode,
    pub first_player_mode: FirstPlayerMode,
    pub blue_controller: ControllerConfig,
    pub red_controller: ControllerConfig,
    pub blue_name: String,
    pub red_name: String,
}

impl SosLobbyConfig {
    pub fn to_session_settings(&self) -> SosSessionSettings {
        SosSessionSettings {
            board_size: self.board_size as usize,
            game_mode: self.game_mode,
            first_player_mode: self.first_player_mode,
        }
    }
}

impl Validate for SosLobbyConfig {
    fn validate(&self) -> Result<(), String> {
        if (self.board_size as usize) < MIN_BOARD_SIZE {
            return Err(format!("Board size must be at least {}", MIN_BOARD_SIZE));
        }
        if (self.board_size as usize) > MAX_BOARD_SIZE {
            return Err(format!("Board size must not exceed {}", MAX_BOARD_SIZE));
        }
        if self.blue_name.trim().is_empty() || self.red_name.trim().is_empty() {
            return Err("Player names must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SosLobbyConfig {
    fn default() -> Self {
        Self {
            board_size: 6,
            game_mode: GameMode::Simple,
            first_player_mode: FirstPlayerMode::Blue,
            blue_controller: ControllerConfig::Human,
            red_controller: ControllerConfig::HeuristicBot,
            blue_name: "Blue".to_string(),
            red_name: "Red".to_string(),
        }
    }
}
