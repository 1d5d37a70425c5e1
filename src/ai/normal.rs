use rand::rngs::StdRng;
use rand::SeedableRng;

use super::evaluation::{is_corner, on_border};
use super::strategy::{pick_random, CpuStrategy};
use crate::error::StrategyError;
use crate::game::{legal_moves, Board, DiscColor, Position};

/// Normal tier: prefer corners, then edge cells, then everything else, with
/// random tie-breaking inside the chosen tier.
pub struct NormalCpu {
    rng: StdRng,
}

impl NormalCpu {
    pub fn new() -> Self {
        NormalCpu {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        NormalCpu {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for NormalCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuStrategy for NormalCpu {
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
        let mut corners = Vec::new();
        let mut edges = Vec::new();
        let mut others = Vec::new();

        for &position in &moves {
            if is_corner(position, size) {
                corners.push(position);
            } else if on_border(position, size) {
                edges.push(position);
            } else {
                others.push(position);
            }
        }

        let tier = if !corners.is_empty() {
            &corners
        } else if !edges.is_empty() {
            &edges
        } else {
            &others
        };
        Ok(pick_random(&mut self.rng, tier))
    }

    fn name(&self) -> &'static str {
        "Normal"
    }
}
