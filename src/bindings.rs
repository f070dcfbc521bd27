//! WASM surface consumed by the presentation layer. The UI reaches the
//! core through three operations (query legal moves, apply a move, request
//! the agent's move); everything else here is session plumbing.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;

use crate::ai::Agent;
use crate::game::GameSession;
use crate::types::Player;

struct ActiveGame {
    session: GameSession,
    agent: Agent,
}

// WASM is single-threaded; the mutex exists for the native rlib build.
static ACTIVE_GAME: Lazy<Mutex<Option<ActiveGame>>> = Lazy::new(|| Mutex::new(None));

/// Starts a new game. The human plays black; the agent plays white at the
/// given level (1 = random, 2 = greedy, 3 and up = minimax at that depth).
/// Returns the initial [`crate::types::GameState`].
#[wasm_bindgen]
pub fn new_game(level: u8) -> Result<JsValue, JsValue> {
    let game = ActiveGame {
        session: GameSession::new(),
        agent: Agent::from_level(Player::White, level),
    };
    let state = serde_wasm_bindgen::to_value(&game.session.to_game_state())?;

    let mut guard = lock_active_game()?;
    *guard = Some(game);
    Ok(state)
}

/// Legal moves for the side to move, as `{row, col}` pairs.
#[wasm_bindgen]
pub fn legal_moves() -> Result<JsValue, JsValue> {
    with_game(|game| Ok(serde_wasm_bindgen::to_value(&game.session.legal_moves())?))
}

/// Applies the human move. An illegal square errors with "illegal move"
/// and leaves the session untouched.
#[wasm_bindgen]
pub fn place(row: u8, col: u8) -> Result<JsValue, JsValue> {
    with_game(|game| {
        if game.session.is_terminal() {
            return Err(JsValue::from_str("game is already over"));
        }
        if game.session.current_player != Player::Black {
            return Err(JsValue::from_str("it is not the player's turn"));
        }
        if !game.session.apply_move(row, col) {
            return Err(JsValue::from_str("illegal move"));
        }
        state_of(game)
    })
}

/// Passes the turn for the side to move. Only valid when that side has no
/// legal moves.
#[wasm_bindgen]
pub fn pass_turn() -> Result<JsValue, JsValue> {
    with_game(|game| {
        if game.session.has_legal_moves_for_current() {
            return Err(JsValue::from_str("side to move has legal moves"));
        }
        game.session.pass();
        state_of(game)
    })
}

/// Asks the agent for its move and applies it. A stuck agent passes
/// instead, which the returned state reports through `is_pass`.
#[wasm_bindgen]
pub fn ai_move() -> Result<JsValue, JsValue> {
    with_game(|game| {
        if game.session.is_terminal() {
            return Err(JsValue::from_str("game is already over"));
        }
        if game.session.current_player != game.agent.player() {
            return Err(JsValue::from_str("it is not the agent's turn"));
        }

        match game.agent.choose_move(game.session.board()) {
            Some(mv) => {
                if !game.session.apply_move(mv.row, mv.col) {
                    return Err(JsValue::from_str("agent selected an illegal move"));
                }
            }
            None => game.session.pass(),
        }
        state_of(game)
    })
}

/// Final result; errors while the game is still in progress.
#[wasm_bindgen]
pub fn game_result() -> Result<JsValue, JsValue> {
    with_game(|game| {
        if !game.session.is_terminal() {
            return Err(JsValue::from_str("game is not over yet"));
        }
        Ok(serde_wasm_bindgen::to_value(&game.session.to_game_result())?)
    })
}

fn with_game<T>(f: impl FnOnce(&mut ActiveGame) -> Result<T, JsValue>) -> Result<T, JsValue> {
    let mut guard = lock_active_game()?;
    let game = guard
        .as_mut()
        .ok_or_else(|| JsValue::from_str("no active game"))?;
    f(game)
}

fn lock_active_game() -> Result<std::sync::MutexGuard<'static, Option<ActiveGame>>, JsValue> {
    ACTIVE_GAME
        .lock()
        .map_err(|_| JsValue::from_str("session lock poisoned"))
}

fn state_of(game: &ActiveGame) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&game.session.to_game_state())?)
}
