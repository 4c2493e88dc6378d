use super::layout::{Bitboard, Direction, Layout};
use super::{GameState, Player};

/// Does `bits` contain `win_length` consecutive stones along any direction?
///
/// Each pass ANDs the board with itself shifted by one more stride; a bit
/// that survives `win_length - 1` passes starts a full line. The cost depends
/// only on `win_length`, never on the board size.
pub fn has_line(bits: Bitboard, layout: &Layout, win_length: usize) -> bool {
    Direction::ALL.iter().any(|&direction| {
        let stride = layout.stride(direction);
        let mut acc = bits;
        for i in 1..win_length {
            if acc == 0 {
                break;
            }
            acc &= shift_down(bits, i.checked_mul(stride));
        }
        acc != 0
    })
}

/// Right shift that yields an empty board once the amount passes the width.
fn shift_down(bits: Bitboard, amount: Option<usize>) -> Bitboard {
    amount
        .and_then(|amount| u32::try_from(amount).ok())
        .and_then(|amount| bits.checked_shr(amount))
        .unwrap_or(0)
}

impl GameState {
    /// Whether `player` has a line of `win_length` stones.
    pub fn is_winner(&self, player: Player) -> bool {
        has_line(
            self.bits[player.index()],
            &self.layout,
            self.config.win_length,
        )
    }

    /// Whether the most recent move won the game.
    pub fn last_move_won(&self) -> bool {
        self.is_winner(self.turn)
    }
}
