use std::path::{Path, PathBuf};

use common::config::ConfigManager;
use common::games::sos::GameStatus;
use eframe::egui;

use crate::config::{Config, get_config_manager};
use crate::game_ui::{GameUiAction, SosGameUi};
use crate::menu_ui::{MenuAction, MenuUi};
use crate::offline::LocalGame;
use crate::replay_playback::{PlaybackAction, ReplayPlayback};

enum Screen {
    Menu,
    Game(LocalGame),
    Replay(ReplayPlayback),
}

pub struct SosApp {
    config_manager: ConfigManager<Config>,
    config: Config,
    menu: MenuUi,
    game_ui: SosGameUi,
    screen: Screen,
}

impl SosApp {
    pub fn new(replay: Option<PathBuf>) -> Self {
        let config_manager = get_config_manager();
        let config = match config_manager.get_config() {
            Ok(config) => config,
            Err(e) => {
                common::log!("Falling back to default config: {}", e);
                Config::default()
            }
        };

        let mut menu = MenuUi::new(config.last_replay_path.clone());
        let screen = match replay {
            Some(path) => match ReplayPlayback::load(&path) {
                Ok(playback) => Screen::Replay(playback),
                Err(e) => {
                    common::log!("Failed to load replay {}: {}", path.display(), e);
                    menu.error = Some(e);
                    Screen::Menu
                }
            },
            None => Screen::Menu,
        };

        Self {
            config_manager,
            config,
            menu,
            game_ui: SosGameUi::new(),
            screen,
        }
    }

    fn start_game(&mut self) {
        if let Err(e) = self.config_manager.set_config(&self.config) {
            common::log!("Failed to save config: {}", e);
            self.menu.error = Some(e);
            return;
        }

        match LocalGame::start(&self.config.sos, &self.config.replays) {
            Ok(game) => {
                self.game_ui = SosGameUi::new();
                self.menu.error = None;
                self.screen = Screen::Game(game);
            }
            Err(e) => {
                common::log!("Failed to start game: {}", e);
                self.menu.error = Some(e);
            }
        }
    }

    fn open_replay(&mut self, path: &str) {
        match ReplayPlayback::load(Path::new(path)) {
            Ok(playback) => {
                self.config.last_replay_path = Some(path.to_string());
                if let Err(e) = self.config_manager.set_config(&self.config) {
                    common::log!("Failed to save config: {}", e);
                }
                self.menu.error = None;
                self.screen = Screen::Replay(playback);
            }
            Err(e) => {
                common::log!("Failed to load replay {}: {}", path, e);
                self.menu.error = Some(e);
            }
        }
    }
}

impl eframe::App for SosApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut menu_action = None;
        let mut game_action = None;
        let mut playback_action = None;

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.screen {
            Screen::Menu => {
                menu_action = self.menu.render(ui, &mut self.config);
            }
            Screen::Game(game) => {
                game.tick();
                if game.session().is_bot_turn() {
                    // keep frames coming while the bot side is moving
                    ctx.request_repaint();
                }

                if game.session().game_state().status == GameStatus::InProgress {
                    game_action =
                        self.game_ui
                            .render_game(ui, game.session(), game.is_human_turn());
                } else {
                    game_action = self.game_ui.render_game_over(
                        ui,
                        game.session(),
                        game.saved_replay_path(),
                    );
                }
            }
            Screen::Replay(playback) => {
                playback_action = playback.render(ui, ctx);
            }
        });

        if let Some(action) = menu_action {
            match action {
                MenuAction::StartGame => self.start_game(),
                MenuAction::LoadReplay(path) => self.open_replay(&path),
            }
        }

        if let Some(action) = game_action {
            match action {
                GameUiAction::Place(placement) => {
                    if let Screen::Game(game) = &mut self.screen {
                        game.place(placement);
                    }
                }
                GameUiAction::Forfeit(color) => {
                    if let Screen::Game(game) = &mut self.screen {
                        game.forfeit(color);
                    }
                }
                GameUiAction::PlayAgain => self.start_game(),
                GameUiAction::BackToMenu => self.screen = Screen::Menu,
            }
        }

        if let Some(PlaybackAction::BackToMenu) = playback_action {
            self.screen = Screen::Menu;
        }
    }
}
