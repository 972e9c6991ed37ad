pub mod file_io;
pub mod player;
pub mod recorder;

pub use file_io::{
    ReplayError, generate_replay_filename, load_replay, load_replay_from_str, save_replay,
};
pub use player::ReplayPlayer;
pub use recorder::{Replay, ReplayAction, ReplayPlayerInfo, ReplayRecorder};

pub const REPLAY_FILE_EXTENSION: &str = "sosreplay";
pub const REPLAY_VERSION: u8 = 1;

#[cfg(test)]
mod integration_tests {
    use crate::PlayerId;
    use crate::games::SessionRng;
    use crate::games::sos::{
        FirstPlayerMode, GameMode, GameStatus, PlayerController, SosBotType, SosGameState,
        SosPlayerSlot, SosSession, SosSessionConfig, SosSessionSettings,
    };
    use super::ReplayPlayer;

    #[test]
    fn recorded_bot_game_replays_to_the_same_result() {
        let settings = SosSessionSettings {
            board_size: 5,
            game_mode: GameMode::General,
            first_player_mode: FirstPlayerMode::Random,
        };
        let config = SosSessionConfig {
            blue: SosPlayerSlot {
                name: PlayerId::from("blue bot"),
                controller: PlayerController::Bot(SosBotType::Heuristic),
            },
            red: SosPlayerSlot {
                name: PlayerId::from("red bot"),
                controller: PlayerController::Bot(SosBotType::Random),
            },
        };

        let mut session = SosSession::create(&settings, config, 31337, true).unwrap();
        while session.is_bot_turn() {
            session.play_bot_turn().unwrap();
        }
        assert_ne!(session.game_state().status, GameStatus::InProgress);

        let original_status = session.game_state().status;
        let original_blue_score = session.game_state().blue_score;
        let original_red_score = session.game_state().red_score;

        let replay = session.finalize_replay().unwrap();
        let mut player = ReplayPlayer::new(replay);

        // the seed reproduces the first-player draw; the actions carry the rest
        let mut rng = SessionRng::new(player.seed());
        let mut replayed = SosGameState::new(
            player.settings().board_size,
            player.settings().game_mode,
            PlayerId::from(player.players()[0].name.as_str()),
            PlayerId::from(player.players()[1].name.as_str()),
            player.settings().first_player_mode,
            &mut rng,
        );

        while let Some(action) = player.next_action() {
            replayed
                .place_letter(action.color, action.row, action.col, action.letter)
                .unwrap();
        }

        assert_eq!(replayed.status, original_status);
        assert_eq!(replayed.blue_score, original_blue_score);
        assert_eq!(replayed.red_score, original_red_score);
    }
}
