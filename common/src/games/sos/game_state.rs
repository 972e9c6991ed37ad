use crate::PlayerId;
use crate::games::SessionRng;

use super::board::make_board;
use super::sequence_detector::sos_lines_through;
use super::types::{
    FirstPlayerMode, GameMode, GameStatus, Letter, Placement, PlayerColor, SosLine,
};

#[derive(Debug)]
pub struct SosGameState {
    pub board: Vec<Vec<Option<Letter>>>,
    pub size: usize,
    pub game_mode: GameMode,
    pub blue_player: PlayerId,
    pub red_player: PlayerId,
    pub current_color: PlayerColor,
    pub blue_score: usize,
    pub red_score: usize,
    pub sos_lines: Vec<SosLine>,
    pub status: GameStatus,
    pub last_move: Option<Placement>,
}

impl SosGameState {
    pub fn new(
        size: usize,
        game_mode: GameMode,
        blue_player: PlayerId,
        red_player: PlayerId,
        first_player_mode: FirstPlayerMode,
        rng: &mut SessionRng,
    ) -> Self {
        assert!(size >= 3, "SOS board must be at least 3x3, got {}", size);

        let current_color = match first_player_mode {
            FirstPlayerMode::Blue => PlayerColor::Blue,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    PlayerColor::Blue
                } else {
                    PlayerColor::Red
                }
            }
        };

        Self {
            board: make_board(size),
            size,
            game_mode,
            blue_player,
            red_player,
            current_color,
            blue_score: 0,
            red_score: 0,
            sos_lines: Vec::new(),
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_letter(
        &mut self,
        color: PlayerColor,
        row: usize,
        col: usize,
        letter: Letter,
    ) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if color != self.current_color {
            return Err("Not your turn".to_string());
        }

        if row >= self.size || col >= self.size {
            return Err("Position out of bounds".to_string());
        }

        if self.board[row][col].is_some() {
            return Err("Cell is already occupied".to_string());
        }

        self.board[row][col] = Some(letter);
        self.last_move = Some(Placement::new(row, col, letter));

        let completed = sos_lines_through(&self.board, row, col);
        for (start, end) in &completed {
            self.sos_lines.push(SosLine::new(color, *start, *end));
        }
        match color {
            PlayerColor::Blue => self.blue_score += completed.len(),
            PlayerColor::Red => self.red_score += completed.len(),
        }

        self.advance_turn(color, completed.len());
        Ok(())
    }

    fn advance_turn(&mut self, mover: PlayerColor, completed: usize) {
        match self.game_mode {
            GameMode::Simple => {
                if completed > 0 {
                    self.status = match mover {
                        PlayerColor::Blue => GameStatus::BlueWon,
                        PlayerColor::Red => GameStatus::RedWon,
                    };
                } else if self.is_board_full() {
                    self.status = GameStatus::Draw;
                } else {
                    self.switch_turn();
                }
            }
            GameMode::General => {
                if self.is_board_full() {
                    self.status = if self.blue_score > self.red_score {
                        GameStatus::BlueWon
                    } else if self.red_score > self.blue_score {
                        GameStatus::RedWon
                    } else {
                        GameStatus::Draw
                    };
                } else if completed == 0 {
                    // completing a sequence earns another turn
                    self.switch_turn();
                }
            }
        }
    }

    fn switch_turn(&mut self) {
        self.current_color = self.current_color.opponent();
    }

    pub fn forfeit(&mut self, color: PlayerColor) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        self.status = match color {
            PlayerColor::Blue => GameStatus::RedWon,
            PlayerColor::Red => GameStatus::BlueWon,
        };
        Ok(())
    }

    pub fn is_board_full(&self) -> bool {
        self.board
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn score(&self, color: PlayerColor) -> usize {
        match color {
            PlayerColor::Blue => self.blue_score,
            PlayerColor::Red => self.red_score,
        }
    }

    pub fn player_name(&self, color: PlayerColor) -> &PlayerId {
        match color {
            PlayerColor::Blue => &self.blue_player,
            PlayerColor::Red => &self.red_player,
        }
    }

    pub fn get_winner(&self) -> Option<PlayerColor> {
        match self.status {
            GameStatus::BlueWon => Some(PlayerColor::Blue),
            GameStatus::RedWon => Some(PlayerColor::Red),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game(size: usize, game_mode: GameMode) -> SosGameState {
        let mut rng = SessionRng::new(0);
        SosGameState::new(
            size,
            game_mode,
            PlayerId::from("blue"),
            PlayerId::from("red"),
            FirstPlayerMode::Blue,
            &mut rng,
        )
    }

    #[test]
    fn turns_alternate_without_completions() {
        let mut game = new_game(3, GameMode::Simple);
        assert_eq!(game.current_color, PlayerColor::Blue);
        game.place_letter(PlayerColor::Blue, 0, 0, Letter::S).unwrap();
        assert_eq!(game.current_color, PlayerColor::Red);
        assert_eq!(game.last_move, Some(Placement::new(0, 0, Letter::S)));
        game.place_letter(PlayerColor::Red, 1, 1, Letter::O).unwrap();
        assert_eq!(game.current_color, PlayerColor::Blue);
        assert_eq!(game.last_move, Some(Placement::new(1, 1, Letter::O)));
    }

    #[test]
    fn rejects_out_of_turn_and_bad_placements() {
        let mut game = new_game(3, GameMode::Simple);
        assert!(game.place_letter(PlayerColor::Red, 0, 0, Letter::S).is_err());

        game.place_letter(PlayerColor::Blue, 0, 0, Letter::S).unwrap();
        assert!(game.place_letter(PlayerColor::Red, 0, 0, Letter::O).is_err());
        assert!(game.place_letter(PlayerColor::Red, 3, 0, Letter::O).is_err());
    }

    #[test]
    fn simple_mode_ends_on_first_sequence() {
        let mut game = new_game(3, GameMode::Simple);
        game.place_letter(PlayerColor::Blue, 0, 0, Letter::S).unwrap();
        game.place_letter(PlayerColor::Red, 0, 1, Letter::O).unwrap();
        game.place_letter(PlayerColor::Blue, 0, 2, Letter::S).unwrap();

        assert_eq!(game.status, GameStatus::BlueWon);
        assert_eq!(game.get_winner(), Some(PlayerColor::Blue));
        assert_eq!(game.blue_score, 1);
        assert_eq!(game.sos_lines.len(), 1);
        assert!(game.place_letter(PlayerColor::Red, 2, 2, Letter::O).is_err());
    }

    #[test]
    fn simple_mode_full_board_without_sequence_is_a_draw() {
        let mut game = new_game(3, GameMode::Simple);
        // all O's can never spell S-O-S
        let mut color = PlayerColor::Blue;
        for row in 0..3 {
            for col in 0..3 {
                game.place_letter(color, row, col, Letter::O).unwrap();
                color = color.opponent();
            }
        }
        assert_eq!(game.status, GameStatus::Draw);
        assert_eq!(game.get_winner(), None);
    }

    #[test]
    fn general_mode_grants_bonus_turn_on_completion() {
        let mut game = new_game(4, GameMode::General);
        game.place_letter(PlayerColor::Blue, 0, 0, Letter::S).unwrap();
        game.place_letter(PlayerColor::Red, 1, 1, Letter::O).unwrap();
        game.place_letter(PlayerColor::Blue, 0, 1, Letter::O).unwrap();
        // Red completes the top row and keeps the turn
        game.place_letter(PlayerColor::Red, 0, 2, Letter::S).unwrap();

        assert_eq!(game.red_score, 1);
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.current_color, PlayerColor::Red);
    }

    #[test]
    fn general_mode_scores_decide_at_full_board() {
        let mut game = new_game(3, GameMode::General);
        game.place_letter(PlayerColor::Blue, 0, 0, Letter::S).unwrap();
        game.place_letter(PlayerColor::Red, 1, 0, Letter::O).unwrap();
        game.place_letter(PlayerColor::Blue, 0, 1, Letter::O).unwrap();
        game.place_letter(PlayerColor::Red, 1, 1, Letter::O).unwrap();
        // Blue completes the top row, then moves again
        game.place_letter(PlayerColor::Blue, 0, 2, Letter::S).unwrap();
        assert_eq!(game.current_color, PlayerColor::Blue);
        game.place_letter(PlayerColor::Blue, 1, 2, Letter::O).unwrap();
        game.place_letter(PlayerColor::Red, 2, 0, Letter::O).unwrap();
        game.place_letter(PlayerColor::Blue, 2, 1, Letter::O).unwrap();
        game.place_letter(PlayerColor::Red, 2, 2, Letter::O).unwrap();

        assert_eq!(game.status, GameStatus::BlueWon);
        assert_eq!(game.blue_score, 1);
        assert_eq!(game.red_score, 0);
    }

    #[test]
    fn general_mode_equal_scores_draw() {
        let mut game = new_game(3, GameMode::General);
        let mut color = PlayerColor::Blue;
        for row in 0..3 {
            for col in 0..3 {
                game.place_letter(color, row, col, Letter::O).unwrap();
                color = color.opponent();
            }
        }
        assert_eq!(game.status, GameStatus::Draw);
    }

    #[test]
    fn one_placement_can_score_twice() {
        let mut game = new_game(3, GameMode::General);
        game.place_letter(PlayerColor::Blue, 0, 0, Letter::S).unwrap();
        game.place_letter(PlayerColor::Red, 0, 1, Letter::O).unwrap();
        game.place_letter(PlayerColor::Blue, 1, 2, Letter::O).unwrap();
        game.place_letter(PlayerColor::Red, 2, 2, Letter::S).unwrap();
        // top row and right column finish on the same placement
        game.place_letter(PlayerColor::Blue, 0, 2, Letter::S).unwrap();

        assert_eq!(game.blue_score, 2);
        assert_eq!(game.sos_lines.len(), 2);
        assert_eq!(game.current_color, PlayerColor::Blue);
    }

    #[test]
    fn forfeit_awards_the_opponent() {
        let mut game = new_game(3, GameMode::Simple);
        game.forfeit(PlayerColor::Blue).unwrap();
        assert_eq!(game.status, GameStatus::RedWon);
        assert!(game.forfeit(PlayerColor::Red).is_err());
    }

    #[test]
    fn random_first_player_is_seed_stable() {
        let mut rng_a = SessionRng::new(42);
        let mut rng_b = SessionRng::new(42);
        let game_a = SosGameState::new(
            3,
            GameMode::Simple,
            PlayerId::from("blue"),
            PlayerId::from("red"),
            FirstPlayerMode::Random,
            &mut rng_a,
        );
        let game_b = SosGameState::new(
            3,
            GameMode::Simple,
            PlayerId::from("blue"),
            PlayerId::from("red"),
            FirstPlayerMode::Random,
            &mut rng_b,
        );
        assert_eq!(game_a.current_color, game_b.current_color);
    }
}
