use std::path::Path;

use common::PlayerId;
use common::games::SessionRng;
use common::games::sos::{GameStatus, PlayerColor, SosGameState};
use common::replay::{Replay, ReplayPlayer, load_replay};
use eframe::egui;

use crate::colors::player_color;
use crate::game_ui::{calculate_cell_size, draw_board};

const AUTO_PLAY_STEP_SECONDS: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    BackToMenu,
}

/// Replay playback screen: rebuilds the game from the recorded seed and
/// settings, then re-applies the recorded placements one at a time.
pub struct ReplayPlayback {
    player: ReplayPlayer,
    game_state: SosGameState,
    auto_play: bool,
    last_step_time: f64,
    error: Option<String>,
}

impl ReplayPlayback {
    pub fn load(path: &Path) -> Result<Self, String> {
        let replay = load_replay(path).map_err(|e| e.to_string())?;
        common::log!("Loaded replay from: {}", path.display());
        Ok(Self::new(replay))
    }

    pub fn new(replay: Replay) -> Self {
        let player = ReplayPlayer::new(replay);
        let game_state = Self::rebuild_game(&player);
        Self {
            player,
            game_state,
            auto_play: false,
            last_step_time: 0.0,
            error: None,
        }
    }

    fn rebuild_game(player: &ReplayPlayer) -> SosGameState {
        let settings = player.settings();
        let blue_name = player
            .players()
            .iter()
            .find(|p| p.color == PlayerColor::Blue)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Blue".to_string());
        let red_name = player
            .players()
            .iter()
            .find(|p| p.color == PlayerColor::Red)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Red".to_string());

        // the recorded seed reproduces the first-player draw
        let mut rng = SessionRng::new(player.seed());
        SosGameState::new(
            settings.board_size,
            settings.game_mode,
            PlayerId::new(blue_name),
            PlayerId::new(red_name),
            settings.first_player_mode,
            &mut rng,
        )
    }

    fn step_forward(&mut self) {
        let Some(action) = self.player.next_action() else {
            return;
        };
        if let Err(e) =
            self.game_state
                .place_letter(action.color, action.row, action.col, action.letter)
        {
            common::log!("Replay action {} is inconsistent: {}", action.turn, e);
            self.error = Some(format!("Corrupt replay: {}", e));
            self.auto_play = false;
        }
    }

    fn step_back(&mut self) {
        let target = self.player.current_action_index().saturating_sub(1);
        self.restart();
        for _ in 0..target {
            self.step_forward();
        }
    }

    fn restart(&mut self) {
        self.player.reset();
        self.game_state = Self::rebuild_game(&self.player);
        self.error = None;
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> Option<PlaybackAction> {
        if self.auto_play && !self.player.is_finished() {
            let now = ctx.input(|i| i.time);
            if now - self.last_step_time >= AUTO_PLAY_STEP_SECONDS {
                self.step_forward();
                self.last_step_time = now;
            }
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        let mut action = None;
        let cell_size = calculate_cell_size(
            ui.available_width(),
            ui.available_height(),
            self.game_state.size,
        );

        ui.horizontal(|ui| {
            draw_board(ui, &self.game_state, cell_size, egui::Sense::hover());

            ui.separator();

            ui.vertical(|ui| {
                ui.heading("Replay");
                ui.label(format!(
                    "Action {} / {}",
                    self.player.current_action_index(),
                    self.player.total_actions()
                ));
                ui.label(format!("Engine version: {}", self.player.engine_version()));
                ui.label(format!("Seed: {}", self.player.seed()));
                ui.separator();

                for color in [PlayerColor::Blue, PlayerColor::Red] {
                    ui.colored_label(
                        player_color(color),
                        format!(
                            "{} ({}): {} SOS",
                            self.game_state.player_name(color),
                            color,
                            self.game_state.score(color)
                        ),
                    );
                }

                if self.game_state.status != GameStatus::InProgress {
                    ui.separator();
                    match self.game_state.get_winner() {
                        Some(winner) => {
                            ui.label(format!("Winner: {}", self.game_state.player_name(winner)));
                        }
                        None => {
                            ui.label("Draw");
                        }
                    }
                }

                if let Some(error) = &self.error {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, error);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Restart").clicked() {
                        self.restart();
                    }
                    if ui.button("Step back").clicked() {
                        self.auto_play = false;
                        self.step_back();
                    }
                    if ui.button("Step").clicked() {
                        self.auto_play = false;
                        self.step_forward();
                    }
                });
                ui.checkbox(&mut self.auto_play, "Auto play");

                ui.separator();
                if ui.button("Back to Menu").clicked() {
                    action = Some(PlaybackAction::BackToMenu);
                }
            });
        });

        action
    }
}
