use crate::types::{Cell, Player, Position};

const BOARD_SIZE: usize = 8;
const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello board state represented by two bitboards.
///
/// Bit `i` maps to square `(i / 8, i % 8)`, so ascending bit order is the
/// row-major scan order used everywhere a deterministic move order matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self { black, white }
    }

    /// Returns legal move mask for the given side.
    pub fn legal_moves(&self, player: Player) -> u64 {
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            if self.flips_for(pos, player) != 0 {
                legal |= bit(pos);
            }
        }

        legal
    }

    /// Legal moves as `(row, col)` pairs, in row-major order.
    pub fn legal_positions(&self, player: Player) -> Vec<Position> {
        mask_to_positions(self.legal_moves(player))
    }

    /// Returns the full capture mask for placing at `pos`, unioned over all
    /// 8 rays. Zero iff the move is illegal (occupied square, out of range,
    /// or no ray brackets an opponent run).
    pub fn flips_for(&self, pos: usize, player: Player) -> u64 {
        if pos >= NUM_SQUARES {
            return 0;
        }

        let (me, opp) = self.sides(player);
        if ((me | opp) & bit(pos)) != 0 {
            return 0;
        }

        let mut flips = 0u64;
        for (dr, dc) in DIRECTIONS {
            flips |= flips_in_direction(pos, dr, dc, me, opp);
        }

        flips
    }

    /// Places one stone and flips captured stones.
    /// Returns flipped bit mask. Returns 0 when move is illegal.
    pub fn place(&mut self, pos: usize, player: Player) -> u64 {
        let flips = self.flips_for(pos, player);
        if flips == 0 {
            return 0;
        }

        let (me, opp) = self.sides(player);
        let next_me = me | bit(pos) | flips;
        let next_opp = opp & !flips;

        match player {
            Player::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Player::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        flips
    }

    /// Applies a move by coordinates. Returns `false` and leaves the board
    /// untouched when the move is illegal; out-of-range coordinates are just
    /// another illegal move.
    pub fn apply_move(&mut self, row: u8, col: u8, player: Player) -> bool {
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return false;
        }
        self.place((row as usize) * BOARD_SIZE + col as usize, player) != 0
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// True when neither side has a legal move. Recomputed on every call;
    /// mobility can swing both ways after a single placement, so this is
    /// never cached.
    pub fn is_terminal(&self) -> bool {
        self.legal_moves(Player::Black) == 0 && self.legal_moves(Player::White) == 0
    }

    pub fn cell(&self, row: u8, col: u8) -> Cell {
        let square = bit((row as usize) * BOARD_SIZE + col as usize);
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = self
                .cell((pos / BOARD_SIZE) as u8, (pos % BOARD_SIZE) as u8)
                .code();
        }
        board
    }

    fn sides(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks from `pos` along `(dr, dc)`, collecting consecutive opponent
/// stones. The run counts only if the walk ends in-bounds on an own stone;
/// running off the board, hitting an empty square, or collecting nothing all
/// yield an empty mask.
fn flips_in_direction(pos: usize, dr: i32, dc: i32, me: u64, opp: u64) -> u64 {
    let mut r = (pos / BOARD_SIZE) as i32 + dr;
    let mut c = (pos % BOARD_SIZE) as i32 + dc;
    let mut line = 0u64;

    while in_bounds(r, c) {
        let square = bit((r as usize) * BOARD_SIZE + c as usize);
        if (opp & square) != 0 {
            line |= square;
        } else if (me & square) != 0 {
            return line;
        } else {
            break;
        }

        r += dr;
        c += dc;
    }

    0
}

/// Expands a bit mask into `(row, col)` pairs in ascending square order.
pub fn mask_to_positions(mask: u64) -> Vec<Position> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        let idx = bits.trailing_zeros() as usize;
        out.push(Position {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        });
        bits &= bits - 1;
    }

    out
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
