use rand::rngs::StdRng;
use rand::SeedableRng;

use super::evaluation::{classify, strategic_value, GamePhase};
use super::strategy::{pick_random, CpuStrategy};
use crate::error::StrategyError;
use crate::game::{flippable_all, legal_moves, Board, DiscColor, Position};

/// Adaptive tier: scores every legal move with the phase-weighted strategic
/// value (positional class dominates early, capture count dominates late,
/// C-points rank just below corners) and picks the maximum, ties at random.
pub struct AdaptiveCpu {
    rng: StdRng,
}

impl AdaptiveCpu {
    pub fn new() -> Self {
        AdaptiveCpu {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        AdaptiveCpu {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for AdaptiveCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuStrategy for AdaptiveCpu {
    fn select_move(
        &mut self,
        board: &Board,
        color: DiscColor,
    ) -> Result<Position, StrategyError> {
        let moves = legal_moves(board, color);
        if moves.is_empty() {
            return Err(StrategyError::NoLegalMoves(color));
        }

        let size = board.size();
        let phase = GamePhase::of(board);

        let scored: Vec<(Position, f64)> = moves
            .into_iter()
            .map(|position| {
                let class = classify(position, size);
                let flips = flippable_all(board, position, color).len();
                (position, strategic_value(class, flips, phase, position, size))
            })
            .collect();

        let best_value = scored
            .iter()
            .map(|&(_, value)| value)
            .fold(f64::NEG_INFINITY, f64::max);
        // Ties come from identical formula inputs, so exact comparison holds.
        let best: Vec<Position> = scored
            .iter()
            .filter(|&&(_, value)| value == best_value)
            .map(|&(position, _)| position)
            .collect();
        Ok(pick_random(&mut self.rng, &best))
    }

    fn name(&self) -> &'static str {
        "Adaptive"
    }
}
