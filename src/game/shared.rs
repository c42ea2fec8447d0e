use std::sync::Arc;

use parking_lot::Mutex;

use super::controller::{BoardState, Game, GameStatus, PlayedMove};
use crate::board::{MoveError, PlayerId};

/// A game handle that can be cloned across threads.
///
/// The rules engine itself holds no locks; this wrapper serializes callers
/// so only one move request is evaluated at a time.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    pub fn validate_move(&self, text: &str) -> bool {
        self.inner.lock().validate_move(text)
    }

    pub fn apply_move(&self, text: &str) -> Result<PlayedMove, MoveError> {
        self.inner.lock().apply_move(text)
    }

    pub fn board_state(&self) -> BoardState {
        self.inner.lock().board_state()
    }

    pub fn game_status(&self) -> GameStatus {
        self.inner.lock().game_status()
    }

    pub fn current_turn(&self) -> PlayerId {
        self.inner.lock().current_turn()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_one_game() {
        let shared = SharedGame::new(Game::new());
        let other = shared.clone();
        other.apply_move("e2 e4").unwrap();
        assert_eq!(shared.current_turn(), PlayerId::Player2);
        assert!(shared.board_state()["e4"].is_some());
    }

    #[test]
    fn concurrent_requests_are_serialized() {
        let shared = SharedGame::new(Game::new());
        let handles: Vec<_> = ["e2 e4", "d2 d4"]
            .into_iter()
            .map(|text| {
                let game = shared.clone();
                thread::spawn(move || game.apply_move(text).is_ok())
            })
            .collect();
        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        // Both are Player 1 moves: whichever lands first passes the turn.
        assert_eq!(accepted, 1);
        assert_eq!(shared.with(|g| g.history().len()), 1);
    }
}
