use std::path::{Path, PathBuf};

use common::PlayerId;
use common::games::sos::{
    GameStatus, Placement, PlayerColor, SosPlayerSlot, SosSession, SosSessionConfig,
};
use common::replay::{generate_replay_filename, save_replay};
use common::version::VERSION;

use crate::config::{ReplayConfig, SosLobbyConfig};

/// A local match driven by the UI loop: bot placements are played one per
/// tick, human placements arrive from board clicks, and the replay is saved
/// once when the game ends.
pub struct LocalGame {
    session: SosSession,
    replay_config: ReplayConfig,
    replay_saved: bool,
    saved_replay_path: Option<PathBuf>,
}

impl LocalGame {
    pub fn start(cfg: &SosLobbyConfig, replay_config: &ReplayConfig) -> Result<Self, String> {
        let settings = cfg.to_session_settings();
        let session_config = SosSessionConfig {
            blue: SosPlayerSlot {
                name: PlayerId::new(cfg.blue_name.clone()),
                controller: cfg.blue_controller.to_controller(),
            },
            red: SosPlayerSlot {
                name: PlayerId::new(cfg.red_name.clone()),
                controller: cfg.red_controller.to_controller(),
            },
        };

        let seed: u64 = rand::random();
        let session = SosSession::create(&settings, session_config, seed, replay_config.save)?;
        common::log!(
            "Started SOS game: {}x{} {:?}, seed {}",
            settings.board_size,
            settings.board_size,
            settings.game_mode,
            seed
        );

        Ok(Self {
            session,
            replay_config: replay_config.clone(),
            replay_saved: false,
            saved_replay_path: None,
        })
    }

    pub fn session(&self) -> &SosSession {
        &self.session
    }

    pub fn saved_replay_path(&self) -> Option<&Path> {
        self.saved_replay_path.as_deref()
    }

    pub fn is_over(&self) -> bool {
        self.session.game_state().status != GameStatus::InProgress
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && !self.session.is_bot_turn()
    }

    /// Advances the game by at most one bot placement and saves the replay
    /// once the game is over. Called every UI frame.
    pub fn tick(&mut self) {
        if self.session.is_bot_turn()
            && let Err(e) = self.session.play_bot_turn()
        {
            common::log!("Bot move failed: {}", e);
        }

        if self.is_over() && !self.replay_saved {
            self.replay_saved = true;
            self.save_replay();
        }
    }

    pub fn place(&mut self, placement: Placement) {
        let color = self.session.game_state().current_color;
        if let Err(e) = self.session.handle_placement(color, placement) {
            common::log!(
                "{} failed to place {} at ({}, {}): {}",
                color,
                placement.letter,
                placement.row,
                placement.col,
                e
            );
        }
    }

    pub fn forfeit(&mut self, color: PlayerColor) {
        if let Err(e) = self.session.forfeit(color) {
            common::log!("{} failed to forfeit: {}", color, e);
        }
    }

    fn save_replay(&mut self) {
        if !self.replay_config.save {
            return;
        }
        let Some(replay) = self.session.finalize_replay() else {
            return;
        };

        let replay_dir = Path::new(&self.replay_config.location);
        if let Err(e) = std::fs::create_dir_all(replay_dir) {
            common::log!("Failed to create replay directory: {}", e);
            return;
        }

        let file_path = replay_dir.join(generate_replay_filename(VERSION));
        match save_replay(&file_path, &replay) {
            Ok(()) => {
                common::log!("Replay saved to: {}", file_path.display());
                self.saved_replay_path = Some(file_path);
            }
            Err(e) => {
                common::log!("Failed to save replay: {}", e);
            }
        }
    }
}
