use crate::board::Board;
use crate::types::{GameResult, GameState, Player, Position};

const BOARD_WIDTH: usize = 8;

/// One game of Othello: the authoritative board plus turn and pass
/// bookkeeping. The session never decides moves; a human caller or an
/// [`crate::ai::Agent`] supplies them and the session applies them.
pub struct GameSession {
    board: Board,
    pub current_player: Player,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a normal move.
    pub is_pass: bool,
    /// Display aid only ("White passes"); never consulted for termination.
    pub consecutive_passes: u8,
    /// Squares captured by the previous move, empty after a pass.
    pub flipped: Vec<u8>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            is_pass: false,
            consecutive_passes: 0,
            flipped: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Legal moves for the side to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_positions(self.current_player)
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.legal_moves(self.current_player) != 0
    }

    /// Applies a move for the side to move. Returns `false` and changes
    /// nothing when the move is illegal (including out-of-range
    /// coordinates); on success the turn switches to the opponent.
    pub fn apply_move(&mut self, row: u8, col: u8) -> bool {
        if row as usize >= BOARD_WIDTH || col as usize >= BOARD_WIDTH {
            return false;
        }

        let pos = (row as usize) * BOARD_WIDTH + col as usize;
        let flips = self.board.place(pos, self.current_player);
        if flips == 0 {
            return false;
        }

        self.is_pass = false;
        self.consecutive_passes = 0;
        self.flipped = bitmask_to_indices(flips);
        self.current_player = self.current_player.opponent();
        true
    }

    /// Passes the turn without touching the board. Caller invokes this when
    /// `legal_moves()` comes back empty.
    pub fn pass(&mut self) {
        self.is_pass = true;
        self.consecutive_passes += 1;
        self.flipped.clear();
        self.current_player = self.current_player.opponent();
    }

    /// True when neither side can move. Always recomputed from mobility;
    /// the pass counter plays no part here.
    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    /// Returns `(black_count, white_count)`.
    pub fn score(&self) -> (u8, u8) {
        self.board.count()
    }

    /// Side with the higher count, `None` on a tie. Only meaningful once
    /// the game is terminal.
    pub fn winner(&self) -> Option<Player> {
        let (black_count, white_count) = self.board.count();
        if black_count > white_count {
            Some(Player::Black)
        } else if white_count > black_count {
            Some(Player::White)
        } else {
            None
        }
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.code(),
            black_count,
            white_count,
            is_game_over: self.is_terminal(),
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: self.winner().map_or(0, Player::code),
            black_count,
            white_count,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.is_pass = false;
        self.consecutive_passes = 0;
        self.flipped.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn bitmask_to_indices(mask: u64) -> Vec<u8> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        let idx = bits.trailing_zeros() as u8;
        out.push(idx);
        bits &= bits - 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BOARD: u64 = u64::MAX;

    fn bit(row: usize, col: usize) -> u64 {
        1u64 << (row * BOARD_WIDTH + col)
    }

    #[test]
    fn initial_state_is_correct() {
        let game = GameSession::new();
        let state = game.to_game_state();

        assert_eq!(state.current_player, Player::Black.code());
        assert_eq!(state.black_count, 2);
        assert_eq!(state.white_count, 2);
        assert!(!state.is_game_over);
        assert!(!state.is_pass);
        assert!(state.flipped.is_empty());
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn t02_illegal_move_returns_false_and_changes_nothing() {
        let mut game = GameSession::new();
        let before = game.to_game_state();

        assert!(!game.apply_move(0, 0));
        assert!(!game.apply_move(9, 9));

        assert_eq!(game.to_game_state(), before);
        assert_eq!(game.current_player, Player::Black);
    }

    #[test]
    fn apply_move_flips_records_and_switches_turn() {
        let mut game = GameSession::new();

        assert!(game.apply_move(2, 3));

        assert_eq!(game.current_player, Player::White);
        assert_eq!(game.flipped, vec![27]); // d4
        assert!(!game.is_pass);
        assert_eq!(game.score(), (4, 1));
    }

    #[test]
    fn t03_pass_switches_turn_without_board_mutation() {
        let mut game = GameSession::new();
        let black = bit(0, 1);
        let white = FULL_BOARD ^ bit(0, 0) ^ black;
        game.set_board_for_test(Board::from_bitboards(black, white), Player::Black);

        assert!(!game.has_legal_moves_for_current());
        let board_before = *game.board();
        game.pass();

        assert_eq!(game.current_player, Player::White);
        assert!(game.is_pass);
        assert_eq!(game.consecutive_passes, 1);
        assert!(game.flipped.is_empty());
        assert_eq!(*game.board(), board_before);
        assert!(!game.is_terminal());
        assert!(game.has_legal_moves_for_current());
    }

    #[test]
    fn stuck_opponent_passes_back_and_play_continues() {
        let mut game = GameSession::new();
        // Lone white stone at c1 behind a black pair: white cannot bracket
        // anything, black can still take d1.
        let black = bit(0, 0) | bit(0, 1);
        let white = bit(0, 2);
        game.set_board_for_test(Board::from_bitboards(black, white), Player::White);

        assert!(!game.has_legal_moves_for_current());
        game.pass();

        assert_eq!(game.current_player, Player::Black);
        assert!(!game.is_terminal());
        assert!(game.apply_move(0, 3));
        assert_eq!(game.consecutive_passes, 0);
    }

    #[test]
    fn terminal_is_mobility_based_regardless_of_pass_counter() {
        let mut game = GameSession::new();
        let black = FULL_BOARD ^ bit(0, 0);
        game.set_board_for_test(Board::from_bitboards(black, 0), Player::Black);

        assert_eq!(game.consecutive_passes, 0);
        assert!(game.is_terminal());

        game.pass();
        game.pass();
        assert_eq!(game.consecutive_passes, 2);
        assert!(game.is_terminal());
    }

    #[test]
    fn winner_follows_the_higher_count() {
        let mut game = GameSession::new();

        game.set_board_for_test(Board::from_bitboards(0b111, 0b11000 << 8), Player::Black);
        assert_eq!(game.winner(), Some(Player::Black));
        assert_eq!(game.to_game_result().winner, Player::Black.code());

        game.set_board_for_test(Board::from_bitboards(0b1, 0b110 << 8), Player::Black);
        assert_eq!(game.winner(), Some(Player::White));

        game.set_board_for_test(Board::from_bitboards(0b11, 0b11 << 8), Player::Black);
        assert_eq!(game.winner(), None);
        assert_eq!(game.to_game_result().winner, 0);
    }
}
