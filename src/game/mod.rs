//! Core Reversi game logic: board representation, capture rules, and the
//! turn state machine with immutable transitions, plus a session facade that
//! ties the state machine to the flip choreographer and a CPU opponent.

mod board;
mod disc;
mod rules;
mod session;
mod state;

pub use board::{Board, Cell, Position, Rotation, Score, BOARD_SIZE, MIN_BOARD_SIZE};
pub use disc::DiscColor;
pub use rules::{
    flippable_all, flippable_in_direction, has_legal_move, legal_moves, placeability,
    Placeability, DIRECTIONS,
};
pub use session::{GameSession, PlacementReport};
pub use state::{GameState, MoveOutcome, Outcome};
