use common::games::sos::{FirstPlayerMode, GameMode, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use eframe::egui;

use crate::config::{Config, ControllerConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    LoadReplay(String),
}

pub struct MenuUi {
    replay_path: String,
    pub error: Option<String>,
}

impl MenuUi {
    pub fn new(last_replay_path: Option<String>) -> Self {
        Self {
            replay_path: last_replay_path.unwrap_or_default(),
            error: None,
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, config: &mut Config) -> Option<MenuAction> {
        let mut action = None;

        ui.heading("SOS");
        ui.separator();

        ui.add(
            egui::Slider::new(
                &mut config.sos.board_size,
                MIN_BOARD_SIZE as u32..=MAX_BOARD_SIZE as u32,
            )
            .text("Board size"),
        );

        ui.horizontal(|ui| {
            ui.label("Mode:");
            ui.radio_value(&mut config.sos.game_mode, GameMode::Simple, "Simple");
            ui.radio_value(&mut config.sos.game_mode, GameMode::General, "General");
        });

        ui.horizontal(|ui| {
            ui.label("First player:");
            ui.radio_value(
                &mut config.sos.first_player_mode,
                FirstPlayerMode::Blue,
                "Blue",
            );
            ui.radio_value(
                &mut config.sos.first_player_mode,
                FirstPlayerMode::Random,
                "Random",
            );
        });

        ui.separator();

        Self::render_player_row(
            ui,
            "Blue",
            &mut config.sos.blue_controller,
            &mut config.sos.blue_name,
        );
        Self::render_player_row(
            ui,
            "Red",
            &mut config.sos.red_controller,
            &mut config.sos.red_name,
        );

        ui.separator();

        ui.checkbox(&mut config.replays.save, "Save replays");
        if config.replays.save {
            ui.horizontal(|ui| {
                ui.label("Replay folder:");
                ui.text_edit_singleline(&mut config.replays.location);
            });
        }

        ui.separator();

        if ui.button("Start Game").clicked() {
            action = Some(MenuAction::StartGame);
        }

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Replay file:");
            ui.text_edit_singleline(&mut self.replay_path);
            if ui.button("Watch Replay").clicked() && !self.replay_path.trim().is_empty() {
                action = Some(MenuAction::LoadReplay(self.replay_path.trim().to_string()));
            }
        });

        if let Some(error) = &self.error {
            ui.separator();
            ui.colored_label(egui::Color32::RED, error);
        }

        action
    }

    fn render_player_row(
        ui: &mut egui::Ui,
        side: &str,
        controller: &mut ControllerConfig,
        name: &mut String,
    ) {
        ui.horizontal(|ui| {
            ui.label(format!("{} player:", side));
            egui::ComboBox::from_id_salt(side)
                .selected_text(controller.label())
                .show_ui(ui, |ui| {
                    for option in [
                        ControllerConfig::Human,
                        ControllerConfig::RandomBot,
                        ControllerConfig::HeuristicBot,
                    ] {
                        ui.selectable_value(controller, option, option.label());
                    }
                });
            if *controller == ControllerConfig::Human {
                ui.label("Name:");
                ui.text_edit_singleline(name);
                if ui.button("Random").clicked() {
                    *name = common::id_generator::generate_player_name();
                }
            }
        });
    }
}
