use serde::Serialize;

/// A side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Wire code used by [`GameState`]: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 1,
            Self::White => 2,
        }
    }
}

/// Occupancy of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Wire code used by [`GameState::board`]: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Black => 1,
            Self::White => 2,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Public game state handed across the bindings boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 cells in row-major order: 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a normal move.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: list of flipped positions (0..=63).
    /// - Pass: must be an empty list.
    pub flipped: Vec<u8>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 1=black, 2=white, 0=tie.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}
