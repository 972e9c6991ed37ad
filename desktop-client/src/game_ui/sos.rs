use std::path::Path;

use common::games::sos::{
    GameMode, GameStatus, Letter, Placement, PlayerColor, SosGameState, SosSession,
};
use eframe::egui;

use crate::colors::player_color;

pub const BOARD_PADDING: f32 = 40.0;
pub const INFO_PANEL_WIDTH: f32 = 220.0;
const MIN_CELL_SIZE: f32 = 30.0;
const MAX_CELL_SIZE: f32 = 90.0;
const LINE_WIDTH: f32 = 2.0;
const SEQUENCE_STROKE_WIDTH: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUiAction {
    Place(Placement),
    Forfeit(PlayerColor),
    PlayAgain,
    BackToMenu,
}

pub fn calculate_cell_size(
    available_width: f32,
    available_height: f32,
    board_size: usize,
) -> f32 {
    let available_board_width = available_width - INFO_PANEL_WIDTH - (BOARD_PADDING * 2.0);
    let available_board_height = available_height - (BOARD_PADDING * 2.0);

    let cell_size =
        (available_board_width / board_size as f32).min(available_board_height / board_size as f32);

    cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

/// Paints the grid, the placed letters and the completed sequence strikes.
/// Shared between the live game screen and replay playback.
pub fn draw_board(
    ui: &mut egui::Ui,
    game: &SosGameState,
    cell_size: f32,
    sense: egui::Sense,
) -> (egui::Rect, egui::Response) {
    let board_span = cell_size * game.size as f32;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(board_span, board_span), sense);

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

    for i in 0..=game.size {
        let x = rect.left() + i as f32 * cell_size;
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            egui::Stroke::new(LINE_WIDTH, egui::Color32::BLACK),
        );
        let y = rect.top() + i as f32 * cell_size;
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            egui::Stroke::new(LINE_WIDTH, egui::Color32::BLACK),
        );
    }

    for (row, cols) in game.board.iter().enumerate() {
        for (col, cell) in cols.iter().enumerate() {
            if let Some(letter) = cell {
                let center = cell_center(rect, cell_size, row, col);
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    letter.as_char(),
                    egui::FontId::proportional(cell_size * 0.6),
                    egui::Color32::from_rgb(40, 40, 40),
                );
            }
        }
    }

    if let Some(last) = game.last_move {
        let cell_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.left() + last.col as f32 * cell_size,
                rect.top() + last.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        );
        painter.rect_stroke(
            cell_rect,
            0.0,
            egui::Stroke::new(LINE_WIDTH, egui::Color32::from_rgb(200, 170, 40)),
            egui::StrokeKind::Inside,
        );
    }

    for line in &game.sos_lines {
        let start = cell_center(rect, cell_size, line.start.row, line.start.col);
        let end = cell_center(rect, cell_size, line.end.row, line.end.col);
        let color = player_color(line.color);
        painter.line_segment(
            [start, end],
            egui::Stroke::new(SEQUENCE_STROKE_WIDTH, color.gamma_multiply(0.8)),
        );
    }

    (rect, response)
}

fn cell_center(rect: egui::Rect, cell_size: f32, row: usize, col: usize) -> egui::Pos2 {
    egui::pos2(
        rect.left() + (col as f32 + 0.5) * cell_size,
        rect.top() + (row as f32 + 0.5) * cell_size,
    )
}

pub struct SosGameUi {
    selected_letter: Letter,
    last_hover: Option<(usize, usize)>,
}

impl SosGameUi {
    pub fn new() -> Self {
        Self {
            selected_letter: Letter::S,
            last_hover: None,
        }
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        session: &SosSession,
        human_turn: bool,
    ) -> Option<GameUiAction> {
        let game = session.game_state();
        let cell_size =
            calculate_cell_size(ui.available_width(), ui.available_height(), game.size);

        let mut action = None;

        ui.horizontal(|ui| {
            ui.allocate_ui(
                egui::vec2(
                    cell_size * game.size as f32 + BOARD_PADDING * 2.0,
                    ui.available_height(),
                ),
                |ui| {
                    if let Some(board_action) =
                        self.render_board(ui, game, cell_size, human_turn)
                    {
                        action = Some(board_action);
                    }
                },
            );

            ui.separator();

            ui.vertical(|ui| {
                if let Some(panel_action) = self.render_info_panel(ui, session, human_turn) {
                    action = Some(panel_action);
                }
            });
        });

        action
    }

    fn render_board(
        &mut self,
        ui: &mut egui::Ui,
        game: &SosGameState,
        cell_size: f32,
        human_turn: bool,
    ) -> Option<GameUiAction> {
        let (rect, response) = draw_board(ui, game, cell_size, egui::Sense::click());

        if !(human_turn && game.status == GameStatus::InProgress) {
            self.last_hover = None;
            return None;
        }

        self.last_hover = None;
        if let Some(hover_pos) = response.hover_pos() {
            let col = ((hover_pos.x - rect.left()) / cell_size) as usize;
            let row = ((hover_pos.y - rect.top()) / cell_size) as usize;

            if row < game.size && col < game.size && game.board[row][col].is_none() {
                let hover_rect = egui::Rect::from_min_size(
                    egui::pos2(
                        rect.left() + col as f32 * cell_size,
                        rect.top() + row as f32 * cell_size,
                    ),
                    egui::vec2(cell_size, cell_size),
                );

                ui.painter().rect_filled(
                    hover_rect,
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                );
                ui.painter().text(
                    hover_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    self.selected_letter.as_char(),
                    egui::FontId::proportional(cell_size * 0.6),
                    egui::Color32::from_rgba_unmultiplied(40, 40, 40, 120),
                );

                self.last_hover = Some((row, col));
            }
        }

        if response.clicked()
            && let Some((row, col)) = self.last_hover
        {
            return Some(GameUiAction::Place(Placement::new(
                row,
                col,
                self.selected_letter,
            )));
        }

        None
    }

    fn render_info_panel(
        &mut self,
        ui: &mut egui::Ui,
        session: &SosSession,
        human_turn: bool,
    ) -> Option<GameUiAction> {
        let game = session.game_state();
        let mut action = None;

        ui.heading("SOS");
        ui.label(match game.game_mode {
            GameMode::Simple => "Simple mode: first SOS wins",
            GameMode::General => "General mode: most SOS wins",
        });
        ui.separator();

        for color in [PlayerColor::Blue, PlayerColor::Red] {
            let name = game.player_name(color);
            let marker = if session.controller(color).is_bot() {
                " (Bot)"
            } else {
                ""
            };
            ui.colored_label(
                player_color(color),
                format!("{}: {}{} — {} SOS", color, name, marker, game.score(color)),
            );
        }

        ui.separator();

        if game.status == GameStatus::InProgress {
            let current = game.current_color;
            if human_turn {
                ui.colored_label(
                    egui::Color32::GREEN,
                    format!("Your turn ({})", game.player_name(current)),
                );

                ui.horizontal(|ui| {
                    ui.label("Letter:");
                    ui.selectable_value(&mut self.selected_letter, Letter::S, "S");
                    ui.selectable_value(&mut self.selected_letter, Letter::O, "O");
                });

                if ui.button("Forfeit").clicked() {
                    action = Some(GameUiAction::Forfeit(current));
                }
            } else {
                ui.label(format!("{} is thinking...", game.player_name(current)));
            }
        }

        action
    }

    pub fn render_game_over(
        &mut self,
        ui: &mut egui::Ui,
        session: &SosSession,
        saved_replay: Option<&Path>,
    ) -> Option<GameUiAction> {
        let game = session.game_state();
        let cell_size =
            calculate_cell_size(ui.available_width(), ui.available_height(), game.size);

        let mut action = None;

        ui.heading("Game Over!");
        ui.separator();

        ui.horizontal(|ui| {
            draw_board(ui, game, cell_size, egui::Sense::hover());

            ui.add_space(BOARD_PADDING);

            ui.vertical(|ui| {
                match game.get_winner() {
                    Some(winner) => {
                        ui.colored_label(
                            player_color(winner),
                            egui::RichText::new(format!(
                                "Winner: {} ({})",
                                game.player_name(winner),
                                winner
                            ))
                            .size(18.0)
                            .strong(),
                        );
                    }
                    None => {
                        ui.label(egui::RichText::new("It's a draw!").size(18.0).strong());
                    }
                }

                ui.add_space(10.0);
                ui.heading("Final scores:");
                for color in [PlayerColor::Blue, PlayerColor::Red] {
                    ui.label(format!(
                        "{} ({}): {} SOS",
                        game.player_name(color),
                        color,
                        game.score(color)
                    ));
                }

                if let Some(path) = saved_replay {
                    ui.add_space(10.0);
                    ui.label(format!("Replay saved to {}", path.display()));
                }

                ui.add_space(10.0);
                ui.separator();

                if ui.button("Play Again").clicked() {
                    action = Some(GameUiAction::PlayAgain);
                }
                if ui.button("Back to Menu").clicked() {
                    action = Some(GameUiAction::BackToMenu);
                }
            });
        });

        action
    }
}
