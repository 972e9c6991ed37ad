use super::recorder::{Replay, ReplayAction, ReplayPlayerInfo};
use crate::games::sos::SosSessionSettings;

pub struct ReplayPlayer {
    replay: Replay,
    current_action_index: usize,
}

impl ReplayPlayer {
    pub fn new(replay: Replay) -> Self {
        Self {
            replay,
            current_action_index: 0,
        }
    }

    pub fn engine_version(&self) -> &str {
        &self.replay.engine_version
    }

    pub fn seed(&self) -> u64 {
        self.replay.seed
    }

    pub fn settings(&self) -> &SosSessionSettings {
        &self.replay.settings
    }

    pub fn players(&self) -> &[ReplayPlayerInfo] {
        &self.replay.players
    }

    pub fn game_started_timestamp_ms(&self) -> i64 {
        self.replay.game_started_timestamp_ms
    }

    pub fn total_actions(&self) -> usize {
        self.replay.actions.len()
    }

    pub fn current_action_index(&self) -> usize {
        self.current_action_index
    }

    pub fn is_finished(&self) -> bool {
        self.current_action_index >= self.replay.actions.len()
    }

    pub fn peek_next_action(&self) -> Option<&ReplayAction> {
        self.replay.actions.get(self.current_action_index)
    }

    pub fn next_action(&mut self) -> Option<ReplayAction> {
        let action = self.replay.actions.get(self.current_action_index).copied();
        if action.is_some() {
            self.current_action_index += 1;
        }
        action
    }

    pub fn reset(&mut self) {
        self.current_action_index = 0;
    }

    pub fn replay_ref(&self) -> &Replay {
        &self.replay
    }

    pub fn into_replay(self) -> Replay {
        self.replay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::sos::{
        FirstPlayerMode, GameMode, Letter, Placement, PlayerColor,
    };
    use crate::replay::{REPLAY_VERSION, ReplayRecorder};

    fn test_replay() -> Replay {
        let settings = SosSessionSettings {
            board_size: 3,
            game_mode: GameMode::Simple,
            first_player_mode: FirstPlayerMode::Blue,
        };
        let players = vec![
            ReplayPlayerInfo {
                name: "blue".to_string(),
                color: PlayerColor::Blue,
                is_bot: false,
            },
            ReplayPlayerInfo {
                name: "red".to_string(),
                color: PlayerColor::Red,
                is_bot: false,
            },
        ];
        let mut recorder = ReplayRecorder::new("1.0.0".to_string(), 7, settings, players);
        recorder.record_placement(0, PlayerColor::Blue, Placement::new(0, 0, Letter::S));
        recorder.record_placement(1, PlayerColor::Red, Placement::new(1, 1, Letter::O));
        recorder.finalize()
    }

    #[test]
    fn steps_through_actions_in_order() {
        let mut player = ReplayPlayer::new(test_replay());
        assert_eq!(player.total_actions(), 2);
        assert_eq!(player.replay_ref().format_version, REPLAY_VERSION);
        assert!(!player.is_finished());

        let first = player.next_action().unwrap();
        assert_eq!(first.turn, 0);
        assert_eq!(first.color, PlayerColor::Blue);

        let second = player.next_action().unwrap();
        assert_eq!(second.turn, 1);

        assert!(player.next_action().is_none());
        assert!(player.is_finished());
    }

    #[test]
    fn reset_rewinds_to_the_start() {
        let mut player = ReplayPlayer::new(test_replay());
        player.next_action();
        player.next_action();
        assert_eq!(player.current_action_index(), 2);

        player.reset();
        assert_eq!(player.current_action_index(), 0);
        assert_eq!(player.peek_next_action().unwrap().turn, 0);
    }
}
