//! Conversion between the bit-packed [`GameState`] and a dense board matrix.
//!
//! The matrix is row-major with row 0 at the visual top:
//!
//! - `0`: empty cell
//! - `1`: stone of [`Player::First`]
//! - `2`: stone of [`Player::Second`]
//!
//! Values are keyed by absolute player index. Relabelling stones from one
//! player's point of view is left to the caller.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::DecodeError;
use crate::game::{GameState, Player};

pub const EMPTY: u8 = 0;

/// Dense `rows x cols` board, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct BoardMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl BoardMatrix {
    /// All-empty matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        BoardMatrix {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Build from a list of equally long rows, top row first.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, DecodeError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(DecodeError::RaggedRow {
                    row: index,
                    len: row.len(),
                    expected: cols,
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(BoardMatrix {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell value at `(row, col)`, row 0 being the top.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * self.cols + col] = value;
    }

    /// Row-major cell values.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[u8]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for BoardMatrix {
    type Error = DecodeError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        BoardMatrix::from_rows(&rows)
    }
}

impl From<BoardMatrix> for Vec<Vec<u8>> {
    fn from(matrix: BoardMatrix) -> Self {
        matrix.to_rows()
    }
}

/// Render a state as a dense matrix.
pub fn encode(state: &GameState) -> BoardMatrix {
    let layout = state.layout();
    let height = layout.height();
    let mut matrix = BoardMatrix::new(height, layout.width());

    for player in Player::BOTH {
        let mut bits = state.bitboard(player);
        while bits != 0 {
            let offset = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            if let Some((col, row)) = layout.position(offset) {
                // Bit row 0 is the bottom of the stack.
                matrix.set(height - 1 - row, col, player.cell_value());
            }
        }
    }

    matrix
}

/// Rebuild a state from a dense matrix.
///
/// `turn` is the player who made the most recent move, as reported by
/// [`GameState::turn`]. The matrix must match the configured board size,
/// hold only `0`/`1`/`2`, be gravity-packed (no stone above an empty cell)
/// and contain a winning line for at most one player.
pub fn decode(
    matrix: &BoardMatrix,
    turn: Player,
    config: GameConfig,
) -> Result<GameState, DecodeError> {
    decode_checked(matrix, turn, config).inspect_err(|err| {
        tracing::debug!(%err, "rejected board matrix");
    })
}

fn decode_checked(
    matrix: &BoardMatrix,
    turn: Player,
    config: GameConfig,
) -> Result<GameState, DecodeError> {
    let mut state = GameState::new(config)?;
    let (height, width) = (config.board_height, config.board_width);

    if matrix.rows() != height || matrix.cols() != width {
        return Err(DecodeError::DimensionMismatch {
            rows: matrix.rows(),
            cols: matrix.cols(),
            expected_rows: height,
            expected_cols: width,
        });
    }

    // Bottom row first so every stone lands on the one below it.
    for (bit_row, row) in (0..height).rev().enumerate() {
        for col in 0..width {
            let player = match matrix.get(row, col) {
                EMPTY => continue,
                value => Player::from_index(usize::from(value) - 1)
                    .ok_or(DecodeError::InvalidCell { row, col, value })?,
            };
            if state.column_counts()[col] != bit_row {
                return Err(DecodeError::FloatingStone { row, col });
            }
            state.place(col, player);
        }
    }

    if Player::BOTH.into_iter().all(|p| state.is_winner(p)) {
        return Err(DecodeError::MultipleWinners);
    }

    state.set_turn(turn);
    Ok(state)
}
