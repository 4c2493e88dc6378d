use smallvec::SmallVec;

use super::state::GameOutcome;
use super::{GameState, Player};

/// Ascending column indices that accept a stone.
pub type LegalMoves = SmallVec<[usize; 8]>;

impl GameState {
    /// Whether `column` still has a free cell. Out-of-range columns are never
    /// valid. Ignores whether the game is already decided.
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < self.config.board_width && self.heights[column] != self.top_sentinels[column]
    }

    /// Columns that can be played, in ascending order.
    ///
    /// Empty once either player has won, as well as when the board is full;
    /// use [`is_winner`](Self::is_winner) or [`is_draw`](Self::is_draw) to
    /// tell the two apart.
    pub fn legal_moves(&self) -> LegalMoves {
        if self.has_winner() {
            return LegalMoves::new();
        }

        (0..self.config.board_width)
            .filter(|&column| self.column_counts[column] < self.config.board_height)
            .collect()
    }

    /// One flag per column, true where [`is_valid_move`](Self::is_valid_move)
    /// holds.
    pub fn action_mask(&self) -> Vec<bool> {
        (0..self.config.board_width)
            .map(|column| self.is_valid_move(column))
            .collect()
    }

    pub fn is_draw(&self) -> bool {
        self.legal_moves().is_empty() && !self.has_winner()
    }

    pub fn is_game_over(&self) -> bool {
        self.has_winner() || self.legal_moves().is_empty()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = Player::BOTH.into_iter().find(|&p| self.is_winner(p)) {
            Some(GameOutcome::Winner(winner))
        } else if self.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Reward for `player` in the current position.
    pub fn reward(&self, player: Player) -> f32 {
        if self.is_winner(player) {
            self.config.reward_win
        } else if self.is_winner(player.other()) {
            self.config.reward_lose
        } else if self.is_draw() {
            self.config.reward_draw
        } else {
            self.config.reward_step
        }
    }

    /// Reward for the player who made the most recent move.
    pub fn last_mover_reward(&self) -> f32 {
        self.reward(self.turn)
    }

    fn has_winner(&self) -> bool {
        Player::BOTH.into_iter().any(|p| self.is_winner(p))
    }
}
