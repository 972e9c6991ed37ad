use serde::{Deserialize, Serialize};

use crate::games::sos::{Letter, Placement, PlayerColor, SosSessionSettings};
use super::REPLAY_VERSION;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayPlayerInfo {
    pub name: String,
    pub color: PlayerColor,
    pub is_bot: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayAction {
    pub turn: u64,
    pub color: PlayerColor,
    pub row: usize,
    pub col: usize,
    pub letter: Letter,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub format_version: u8,
    pub engine_version: String,
    pub game_started_timestamp_ms: i64,
    pub seed: u64,
    pub settings: SosSessionSettings,
    pub players: Vec<ReplayPlayerInfo>,
    pub actions: Vec<ReplayAction>,
}

pub struct ReplayRecorder {
    engine_version: String,
    game_started_timestamp_ms: i64,
    seed: u64,
    settings: SosSessionSettings,
    players: Vec<ReplayPlayerInfo>,
    actions: Vec<ReplayAction>,
}

impl ReplayRecorder {
    pub fn new(
        engine_version: String,
        seed: u64,
        settings: SosSessionSettings,
        players: Vec<ReplayPlayerInfo>,
    ) -> Self {
        let game_started_timestamp_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        Self {
            engine_version,
            game_started_timestamp_ms,
            seed,
            settings,
            players,
            actions: Vec::new(),
        }
    }

    pub fn record_placement(&mut self, turn: u64, color: PlayerColor, placement: Placement) {
        self.actions.push(ReplayAction {
            turn,
            color,
            row: placement.row,
            col: placement.col,
            letter: placement.letter,
        });
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn actions_count(&self) -> usize {
        self.actions.len()
    }

    pub fn finalize(mut self) -> Replay {
        self.actions.sort_by_key(|a| a.turn);

        Replay {
            format_version: REPLAY_VERSION,
            engine_version: self.engine_version,
            game_started_timestamp_ms: self.game_started_timestamp_ms,
            seed: self.seed,
            settings: self.settings,
            players: self.players,
            actions: self.actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::sos::{FirstPlayerMode, GameMode};

    fn test_players() -> Vec<ReplayPlayerInfo> {
        vec![
            ReplayPlayerInfo {
                name: "blue".to_string(),
                color: PlayerColor::Blue,
                is_bot: false,
            },
            ReplayPlayerInfo {
                name: "red".to_string(),
                color: PlayerColor::Red,
                is_bot: true,
            },
        ]
    }

    #[test]
    fn finalize_keeps_actions_in_turn_order() {
        let settings = SosSessionSettings {
            board_size: 3,
            game_mode: GameMode::Simple,
            first_player_mode: FirstPlayerMode::Blue,
        };
        let mut recorder = ReplayRecorder::new("test".to_string(), 42, settings, test_players());

        recorder.record_placement(0, PlayerColor::Blue, Placement::new(0, 0, Letter::S));
        recorder.record_placement(1, PlayerColor::Red, Placement::new(1, 1, Letter::O));
        recorder.record_placement(2, PlayerColor::Blue, Placement::new(0, 1, Letter::O));
        assert_eq!(recorder.actions_count(), 3);

        let replay = recorder.finalize();
        assert_eq!(replay.format_version, REPLAY_VERSION);
        assert_eq!(replay.seed, 42);
        assert_eq!(replay.players.len(), 2);
        assert_eq!(replay.actions.len(), 3);
        assert!(replay.actions.windows(2).all(|w| w[0].turn <= w[1].turn));
    }
}
