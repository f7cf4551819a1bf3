//! Game state module - the single writer of all gameplay state.
//!
//! Ties together board, pieces, RNG, and scoring. The surrounding loop owns
//! timing: it calls [`GameState::step_gravity`] at most once per drop
//! interval and forwards key presses as [`GameAction`]s. Everything here is
//! deterministic under a fixed seed and runs without a terminal.

use crate::core::pieces::{rotation_recenter, spawn_shape, Shape};
use crate::core::rng::PieceRng;
use crate::core::scoring::score_for_lines;
use crate::core::Board;
use crate::types::{GameAction, PieceKind, SPAWN_X, SPAWN_Y};

/// The falling piece: kind, current shape matrix, top-left grid position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// What a merge event did, reported to the caller for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u8,
    pub score_awarded: u32,
}

/// Complete game state.
///
/// Lifecycle: `new` -> `start` -> falling/merging until the spawn position
/// is blocked, which sets the terminal game-over flag. After game over (and
/// before `start`) every operation is a no-op.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    rng: PieceRng,
    score: u32,
    started: bool,
    game_over: bool,
}

impl GameState {
    /// Create a fresh game with the given RNG seed. The first preview piece
    /// is drawn immediately so the renderer always has a next piece to show.
    pub fn new(seed: u32) -> Self {
        let mut rng = PieceRng::new(seed);
        let next = rng.next_kind();
        Self {
            board: Board::new(),
            active: None,
            next,
            rng,
            score: 0,
            started: false,
            game_over: false,
        }
    }

    /// Leave the start screen and spawn the first piece.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn running(&self) -> bool {
        self.started && !self.game_over
    }

    /// Promote the preview piece to active and draw a new preview.
    ///
    /// A blocked spawn position is the game-over condition. The overlapping
    /// piece stays visible so the renderer can draw the final position.
    fn spawn(&mut self) {
        let piece = ActivePiece::spawn(self.next);
        self.next = self.rng.next_kind();
        if !self.board.fits(&piece.shape, piece.x, piece.y) {
            self.game_over = true;
        }
        self.active = Some(piece);
    }

    /// Shift the piece one column; silently reverted when invalid.
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if !self.running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        if self.board.fits(&active.shape, active.x + dx, active.y) {
            self.active = Some(ActivePiece {
                x: active.x + dx,
                ..active
            });
            return true;
        }
        false
    }

    /// Rotate clockwise with a single horizontal recenter; discarded when the
    /// rotated placement is invalid.
    pub fn rotate(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.shape.rotated_cw();
        let x = active.x - rotation_recenter(&active.shape, &rotated);
        if self.board.fits(&rotated, x, active.y) {
            self.active = Some(ActivePiece {
                shape: rotated,
                x,
                ..active
            });
            return true;
        }
        false
    }

    /// One gravity step: descend a row, or merge when the piece is resting.
    ///
    /// Returns the merge event when the piece locked. Soft drop is this same
    /// operation driven by the down key instead of the timer.
    pub fn step_gravity(&mut self) -> Option<LockEvent> {
        if !self.running() {
            return None;
        }
        let active = self.active?;
        if self.board.fits(&active.shape, active.x, active.y + 1) {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            None
        } else {
            Some(self.lock_active())
        }
    }

    /// Drop straight to the ghost row and merge in one step.
    pub fn hard_drop(&mut self) -> Option<LockEvent> {
        if !self.running() {
            return None;
        }
        let ghost = self.ghost_y()?;
        if let Some(active) = self.active.as_mut() {
            active.y = ghost;
        }
        Some(self.lock_active())
    }

    /// The row the active piece would land on, probed without mutating state.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut y = active.y;
        while self.board.fits(&active.shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Merge the active piece, clear full rows, award points, respawn.
    fn lock_active(&mut self) -> LockEvent {
        let Some(active) = self.active.take() else {
            return LockEvent::default();
        };
        self.board
            .merge(&active.shape, active.x, active.y, active.kind);
        let cleared = self.board.clear_full_rows();
        let score_awarded = score_for_lines(cleared.len());
        self.score = self.score.saturating_add(score_awarded);
        self.spawn();
        LockEvent {
            lines_cleared: cleared.len() as u8,
            score_awarded,
        }
    }

    /// Apply one discrete command. No-op before `start` and after game over.
    pub fn apply_action(&mut self, action: GameAction) -> Option<LockEvent> {
        if !self.running() {
            return None;
        }
        match action {
            GameAction::MoveLeft => {
                self.move_horizontal(-1);
                None
            }
            GameAction::MoveRight => {
                self.move_horizontal(1);
                None
            }
            GameAction::Rotate => {
                self.rotate();
                None
            }
            GameAction::SoftDrop => self.step_gravity(),
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
