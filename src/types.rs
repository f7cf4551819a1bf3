//! Core types shared across the application.
//! Pure data with no external dependencies.

/// Board dimensions (columns x rows).
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn position for a fresh piece (top-left of its shape matrix).
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 0;

/// Gravity interval: one automatic descent per second.
pub const DROP_INTERVAL_MS: u64 = 1000;

/// Points per merge event, indexed by rows cleared in that event (4+ capped).
pub const LINE_CLEAR_SCORES: [u32; 5] = [0, 100, 300, 700, 1000];

/// The seven tetromino kinds.
///
/// Declaration order fixes the 0-6 identifier used for color lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Stable 0-6 identifier (index into [`PieceKind::ALL`]).
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::L => "L",
            PieceKind::J => "J",
        }
    }
}

/// Discrete commands accepted by the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind).
pub type Cell = Option<PieceKind>;
