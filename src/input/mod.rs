//! Input module - translates key events into game actions.
//!
//! The gating rules live with the caller: any mapped key leaves the start
//! screen, and after game over only the quit keys act.

pub mod map;

pub use map::{action_for_key, should_quit};
