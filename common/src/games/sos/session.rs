use crate::PlayerId;
use crate::games::SessionRng;
use crate::replay::{Replay, ReplayPlayerInfo, ReplayRecorder};
use crate::version::VERSION;

use super::bot_controller::{BotInput, SosBotType, calculate_move};
use super::game_state::SosGameState;
use super::settings::SosSessionSettings;
use super::types::{GameStatus, Placement, PlayerColor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerController {
    Human,
    Bot(SosBotType),
}

impl PlayerController {
    pub fn is_bot(self) -> bool {
        matches!(self, PlayerController::Bot(_))
    }
}

#[derive(Clone, Debug)]
pub struct SosPlayerSlot {
    pub name: PlayerId,
    pub controller: PlayerController,
}

#[derive(Clone, Debug)]
pub struct SosSessionConfig {
    pub blue: SosPlayerSlot,
    pub red: SosPlayerSlot,
}

/// Synchronous local game session: owns the game state, the seeded RNG and
/// the optional replay recorder. The client drives it one placement at a
/// time — `play_bot_turn` when the current side is a bot, `handle_placement`
/// when a human clicks.
pub struct SosSession {
    game_state: SosGameState,
    rng: SessionRng,
    blue: SosPlayerSlot,
    red: SosPlayerSlot,
    replay_recorder: Option<ReplayRecorder>,
    turn: u64,
}

impl SosSession {
    pub fn create(
        settings: &SosSessionSettings,
        config: SosSessionConfig,
        seed: u64,
        record_replay: bool,
    ) -> Result<Self, String> {
        settings.validate()?;

        let mut rng = SessionRng::new(seed);
        let game_state = SosGameState::new(
            settings.board_size,
            settings.game_mode,
            config.blue.name.clone(),
            config.red.name.clone(),
            settings.first_player_mode,
            &mut rng,
        );

        let replay_recorder = if record_replay {
            let players = vec![
                ReplayPlayerInfo {
                    name: config.blue.name.to_string(),
                    color: PlayerColor::Blue,
                    is_bot: config.blue.controller.is_bot(),
                },
                ReplayPlayerInfo {
                    name: config.red.name.to_string(),
                    color: PlayerColor::Red,
                    is_bot: config.red.controller.is_bot(),
                },
            ];
            Some(ReplayRecorder::new(
                VERSION.to_string(),
                seed,
                *settings,
                players,
            ))
        } else {
            None
        };

        Ok(Self {
            game_state,
            rng,
            blue: config.blue,
            red: config.red,
            replay_recorder,
            turn: 0,
        })
    }

    pub fn game_state(&self) -> &SosGameState {
        &self.game_state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn controller(&self, color: PlayerColor) -> PlayerController {
        match color {
            PlayerColor::Blue => self.blue.controller,
            PlayerColor::Red => self.red.controller,
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        self.game_state.status == GameStatus::InProgress
            && self.controller(self.game_state.current_color).is_bot()
    }

    pub fn play_bot_turn(&mut self) -> Result<(), String> {
        let color = self.game_state.current_color;
        let PlayerController::Bot(bot_type) = self.controller(color) else {
            return Err(format!("{} is not controlled by a bot", color));
        };

        let input = BotInput::from_game_state(&self.game_state);
        let placement = calculate_move(bot_type, &input, &mut self.rng)
            .ok_or_else(|| "No legal move left on the board".to_string())?;

        self.apply_placement(color, placement)
    }

    pub fn handle_placement(
        &mut self,
        color: PlayerColor,
        placement: Placement,
    ) -> Result<(), String> {
        self.apply_placement(color, placement)
    }

    fn apply_placement(&mut self, color: PlayerColor, placement: Placement) -> Result<(), String> {
        self.game_state
            .place_letter(color, placement.row, placement.col, placement.letter)?;

        if let Some(recorder) = self.replay_recorder.as_mut() {
            recorder.record_placement(self.turn, color, placement);
        }
        self.turn += 1;
        Ok(())
    }

    pub fn forfeit(&mut self, color: PlayerColor) -> Result<(), String> {
        self.game_state.forfeit(color)
    }

    /// Takes the finished replay out of the session; subsequent calls
    /// return None.
    pub fn finalize_replay(&mut self) -> Option<Replay> {
        self.replay_recorder.take().map(ReplayRecorder::finalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::sos::types::{FirstPlayerMode, GameMode, Letter};

    fn bot_config(blue: SosBotType, red: SosBotType) -> SosSessionConfig {
        SosSessionConfig {
            blue: SosPlayerSlot {
                name: PlayerId::from("blue bot"),
                controller: PlayerController::Bot(blue),
            },
            red: SosPlayerSlot {
                name: PlayerId::from("red bot"),
                controller: PlayerController::Bot(red),
            },
        }
    }

    fn small_settings(game_mode: GameMode) -> SosSessionSettings {
        SosSessionSettings {
            board_size: 3,
            game_mode,
            first_player_mode: FirstPlayerMode::Blue,
        }
    }

    #[test]
    fn rejects_invalid_settings() {
        let mut settings = small_settings(GameMode::Simple);
        settings.board_size = 2;
        let result = SosSession::create(
            &settings,
            bot_config(SosBotType::Heuristic, SosBotType::Heuristic),
            1,
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn bot_game_runs_to_completion() {
        let settings = small_settings(GameMode::General);
        let mut session = SosSession::create(
            &settings,
            bot_config(SosBotType::Heuristic, SosBotType::Random),
            99,
            true,
        )
        .unwrap();

        let mut guard = 0;
        while session.is_bot_turn() {
            session.play_bot_turn().unwrap();
            guard += 1;
            assert!(guard <= 9, "3x3 game must finish within 9 placements");
        }

        assert_ne!(session.game_state().status, GameStatus::InProgress);
        let replay = session.finalize_replay().unwrap();
        assert_eq!(replay.actions.len() as u64, guard);
        assert!(session.finalize_replay().is_none());
    }

    #[test]
    fn play_bot_turn_requires_a_bot() {
        let settings = small_settings(GameMode::Simple);
        let config = SosSessionConfig {
            blue: SosPlayerSlot {
                name: PlayerId::from("human"),
                controller: PlayerController::Human,
            },
            red: SosPlayerSlot {
                name: PlayerId::from("bot"),
                controller: PlayerController::Bot(SosBotType::Heuristic),
            },
        };
        let mut session = SosSession::create(&settings, config, 5, false).unwrap();

        assert!(!session.is_bot_turn());
        assert!(session.play_bot_turn().is_err());

        session
            .handle_placement(PlayerColor::Blue, Placement::new(1, 1, Letter::O))
            .unwrap();
        assert!(session.is_bot_turn());
        session.play_bot_turn().unwrap();
    }

    #[test]
    fn human_placement_is_validated_by_game_state() {
        let settings = small_settings(GameMode::Simple);
        let config = SosSessionConfig {
            blue: SosPlayerSlot {
                name: PlayerId::from("human blue"),
                controller: PlayerController::Human,
            },
            red: SosPlayerSlot {
                name: PlayerId::from("human red"),
                controller: PlayerController::Human,
            },
        };
        let mut session = SosSession::create(&settings, config, 5, false).unwrap();

        assert!(
            session
                .handle_placement(PlayerColor::Red, Placement::new(0, 0, Letter::S))
                .is_err()
        );
        session
            .handle_placement(PlayerColor::Blue, Placement::new(0, 0, Letter::S))
            .unwrap();
        assert!(
            session
                .handle_placement(PlayerColor::Red, Placement::new(0, 0, Letter::O))
                .is_err()
        );
    }
}
