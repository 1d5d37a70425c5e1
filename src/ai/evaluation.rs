//! Positional evaluation shared by the heuristic strategies: board-relative
//! cell classification, game-phase detection, and the phase-weighted
//! strategic value used by the adaptive tier.

use crate::game::{Board, Position};

/// Strategic classification of a board cell.
///
/// Corners can never be recaptured; X-points (corner-adjacent, including the
/// diagonal) hand the corner to the opponent; C-points sit two in from a
/// corner along an edge and are a favorable compromise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionClass {
    Corner,
    XPoint,
    CPoint,
    Edge,
    Other,
}

impl PositionClass {
    /// Base value of the class before phase weighting.
    pub fn base_score(self) -> f64 {
        match self {
            PositionClass::Corner => 100.0,
            PositionClass::CPoint => 50.0,
            PositionClass::Edge => 30.0,
            PositionClass::Other => 10.0,
            PositionClass::XPoint => -20.0,
        }
    }
}

pub(crate) fn is_corner(position: Position, size: usize) -> bool {
    let Position { row, col } = position;
    (row == 0 || row == size - 1) && (col == 0 || col == size - 1)
}

/// Cells orthogonally or diagonally adjacent to a corner.
pub(crate) fn is_x_point(position: Position, size: usize) -> bool {
    let Position { row, col } = position;
    let edge = size - 1;
    let near = |v: usize| v == 1 || v == edge - 1;
    let on = |v: usize| v == 0 || v == edge;
    (on(row) && near(col)) || (near(row) && on(col)) || (near(row) && near(col))
}

/// Cells two steps in from a corner along an edge.
pub(crate) fn is_c_point(position: Position, size: usize) -> bool {
    let Position { row, col } = position;
    let edge = size - 1;
    let two_in = |v: usize| v == 2 || v == edge - 2;
    let on = |v: usize| v == 0 || v == edge;
    (on(row) && two_in(col)) || (two_in(row) && on(col))
}

pub(crate) fn on_border(position: Position, size: usize) -> bool {
    let Position { row, col } = position;
    row == 0 || row == size - 1 || col == 0 || col == size - 1
}

/// Full five-way classification, X-points taking precedence over C-points
/// where small boards make them coincide.
pub fn classify(position: Position, size: usize) -> PositionClass {
    if is_corner(position, size) {
        PositionClass::Corner
    } else if is_x_point(position, size) {
        PositionClass::XPoint
    } else if is_c_point(position, size) {
        PositionClass::CPoint
    } else if on_border(position, size) {
        PositionClass::Edge
    } else {
        PositionClass::Other
    }
}

/// Board fullness bracket used to reweight heuristics over the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

impl GamePhase {
    /// Classify by occupied-cell ratio: under 30% early, under 70% mid.
    pub fn of(board: &Board) -> GamePhase {
        let ratio = board.occupancy();
        if ratio < 0.3 {
            GamePhase::Early
        } else if ratio < 0.7 {
            GamePhase::Mid
        } else {
            GamePhase::Late
        }
    }

    /// Weight on positional value: board control matters most early.
    pub fn position_weight(self) -> f64 {
        match self {
            GamePhase::Early => 0.9,
            GamePhase::Mid => 0.7,
            GamePhase::Late => 0.2,
        }
    }

    /// Weight on captured material: disc count matters most late.
    pub fn flip_weight(self) -> f64 {
        match self {
            GamePhase::Early => 0.1,
            GamePhase::Mid => 0.3,
            GamePhase::Late => 0.8,
        }
    }
}

/// Phase-weighted move value for the adaptive strategy: positional tier
/// scaled by the phase's position weight, plus 5 points per flipped disc
/// scaled by the flip weight, plus an early-game bonus for staying near the
/// center.
pub(crate) fn strategic_value(
    class: PositionClass,
    flip_count: usize,
    phase: GamePhase,
    position: Position,
    size: usize,
) -> f64 {
    let mut bonus = 0.0;
    if phase == GamePhase::Early {
        let mid = size / 2;
        let distance = position.row.abs_diff(mid) + position.col.abs_diff(mid);
        if distance < 3 {
            bonus += (3 - distance) as f64 * 5.0;
        }
    }

    class.base_score() * phase.position_weight()
        + (flip_count * 5) as f64 * phase.flip_weight()
        + bonus
}
