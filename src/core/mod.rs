//! Core module - pure game logic with no I/O dependencies.
//!
//! Deterministic under a fixed seed and testable without a terminal.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use board::Board;
pub use game_state::{ActivePiece, GameState, LockEvent};
pub use pieces::{spawn_shape, Shape};
pub use rng::{clock_seed, PieceRng, SimpleRng};
pub use scoring::score_for_lines;
