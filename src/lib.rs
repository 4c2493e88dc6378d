//! # Gym Connect Four
//!
//! A bit-packed Connect Four engine for reinforcement-learning environments.
//! Each player's stones live in one `u128`, laid out column by column with a
//! sentinel bit on top of every column, so a win check is a handful of shifts
//! and ANDs regardless of board size.
//!
//! ## Modules
//!
//! - [`game`] — Layout, game state, win detection, legal moves and rewards
//! - [`codec`] — Dense board matrix encoding and validated decoding
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ```
//! use gym_connect_four::game::{GameState, Player};
//!
//! let mut state = GameState::initial();
//! for column in [0, 1, 0, 1, 0, 1, 0] {
//!     state.play(column)?;
//! }
//! assert!(state.is_winner(Player::First));
//! assert_eq!(state.reward(Player::Second), -1.0);
//! # Ok::<(), gym_connect_four::error::InvalidMove>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod game;

pub use codec::{decode, encode, BoardMatrix};
pub use config::GameConfig;
pub use error::{ConfigError, DecodeError, InvalidMove};
pub use game::{GameOutcome, GameState, LegalMoves, Player};
