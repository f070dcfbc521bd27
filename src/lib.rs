//! Othello rule engine and opposing agent.
//!
//! The core is two pieces: [`board`]/[`game`] own the rules (ray-cast
//! capture detection, turn and pass resolution, terminal detection,
//! scoring) and [`ai`] owns move selection (random, greedy, and
//! depth-bounded minimax with alpha-beta pruning). [`bindings`] is the thin
//! WASM surface the presentation layer calls; rendering, input mapping,
//! and "thinking" delays all live on that side of the boundary.

use wasm_bindgen::prelude::*;

pub mod ai;
pub mod bindings;
pub mod board;
pub mod game;
pub mod types;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
