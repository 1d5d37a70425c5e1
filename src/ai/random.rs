use rand::rngs::StdRng;
use rand::SeedableRng;

use super::strategy::{pick_random, CpuStrategy};
use crate::error::StrategyError;
use crate::game::{legal_moves, Board, DiscColor, Position};

/// Weak tier: uniform random choice among the legal moves.
pub struct WeakCpu {
    rng: StdRng,
}

impl WeakCpu {
    pub fn new() -> Self {
        WeakCpu {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        WeakCpu {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for WeakCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuStrategy for WeakCpu {
    fn select_move(
        &mut self,
        board: &Board,
        color: DiscColor,
    ) -> Result<Position, StrategyError> {
        let moves = legal_moves(board, color);
        if moves.is_empty() {
            return Err(StrategyError::NoLegalMoves(color));
        }
        Ok(pick_random(&mut self.rng, &moves))
    }

    fn name(&self) -> &'static str {
        "Weak"
    }
}
