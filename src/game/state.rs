use smallvec::SmallVec;

use super::layout::{bit, Bitboard, Layout};
use super::Player;
use crate::config::GameConfig;
use crate::error::{ConfigError, InvalidMove};

/// Per-column counters. Inline for boards up to 8 columns wide.
pub(super) type Columns = SmallVec<[usize; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A bit-packed position.
///
/// Cloning copies every array, so a clone can be played out on another
/// thread without touching the original.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(super) config: GameConfig,
    pub(super) layout: Layout,
    pub(super) bits: [Bitboard; 2],
    /// Next free bit offset per column.
    pub(super) heights: Columns,
    pub(super) column_counts: Columns,
    pub(super) top_sentinels: Columns,
    /// Player who made the most recent move.
    pub(super) turn: Player,
}

impl GameState {
    /// Create an empty board for a validated config.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    /// Create initial game state on the default 7x6 board.
    pub fn initial() -> Self {
        Self::empty(GameConfig::default())
    }

    fn empty(config: GameConfig) -> Self {
        let layout = config.layout();
        let columns = 0..config.board_width;
        GameState {
            config,
            layout,
            bits: [0; 2],
            heights: columns.clone().map(|c| layout.bottom(c)).collect(),
            column_counts: columns.clone().map(|_| 0).collect(),
            top_sentinels: columns.map(|c| layout.top_sentinel(c)).collect(),
            // Flipped by the first move, so `First` opens.
            turn: Player::Second,
        }
    }

    /// Discard the position and start over with the same config.
    pub fn reset(&mut self) {
        *self = Self::empty(self.config);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The player who made the most recent move (`Second` before any move).
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The player whose move it is.
    pub fn to_move(&self) -> Player {
        self.turn.other()
    }

    pub fn bitboard(&self, player: Player) -> Bitboard {
        self.bits[player.index()]
    }

    pub fn heights(&self) -> &[usize] {
        &self.heights
    }

    pub fn column_counts(&self) -> &[usize] {
        &self.column_counts
    }

    /// Number of stones on the board.
    pub fn move_count(&self) -> usize {
        self.column_counts.iter().sum()
    }

    /// Drop a stone for the player to move.
    ///
    /// Fails without touching the state if the column is out of range or
    /// full, or if the game has already been decided.
    pub fn play(&mut self, column: usize) -> Result<(), InvalidMove> {
        if let Err(err) = self.check_move(column) {
            tracing::debug!(column, %err, "rejected move");
            return Err(err);
        }

        self.turn = self.turn.other();
        self.place(column, self.turn);
        Ok(())
    }

    fn check_move(&self, column: usize) -> Result<(), InvalidMove> {
        if column >= self.config.board_width {
            return Err(InvalidMove::ColumnOutOfRange {
                column,
                width: self.config.board_width,
            });
        }
        if self.is_game_over() {
            return Err(InvalidMove::GameOver);
        }
        if !self.is_valid_move(column) {
            return Err(InvalidMove::ColumnFull { column });
        }
        Ok(())
    }

    /// Set the next free cell of `column` for `player` without touching the
    /// turn. Callers guarantee the column has room.
    pub(crate) fn place(&mut self, column: usize, player: Player) {
        self.bits[player.index()] |= bit(self.heights[column]);
        self.heights[column] += 1;
        self.column_counts[column] += 1;
    }

    pub(crate) fn set_turn(&mut self, turn: Player) {
        self.turn = turn;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
