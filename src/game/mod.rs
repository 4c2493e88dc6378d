//! Core Connect Four engine: padded bit layout, bit-packed game state,
//! shift-based win detection, and the legal-move and reward rules.

mod layout;
mod player;
mod rules;
mod state;
mod win;

pub use layout::{Bitboard, Direction, Layout};
pub use player::Player;
pub use rules::LegalMoves;
pub use state::{GameOutcome, GameState};
pub use win::has_line;
