use rand::rngs::StdRng;
use rand::SeedableRng;

use super::evaluation::{is_corner, is_x_point, on_border};
use super::strategy::{pick_random, CpuStrategy};
use crate::error::StrategyError;
use crate::game::{flippable_all, legal_moves, Board, DiscColor, Position};

/// Tier ranking for the strong strategy, best first. X-points are actively
/// avoided, below even unremarkable interior cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Tier {
    Corner,
    Edge,
    Other,
    XPoint,
}

fn tier_of(position: Position, size: usize) -> Tier {
    if is_corner(position, size) {
        Tier::Corner
    } else if is_x_point(position, size) {
        Tier::XPoint
    } else if on_border(position, size) {
        Tier::Edge
    } else {
        Tier::Other
    }
}

/// Strong tier: corner > edge > other > X-point, and within the best tier
/// the move capturing the most discs; remaining ties break at random.
pub struct StrongCpu {
    rng: StdRng,
}

impl StrongCpu {
    pub fn new() -> Self {
        StrongCpu {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        StrongCpu {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StrongCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuStrategy for StrongCpu {
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
        let evaluated: Vec<(Position, Tier, usize)> = moves
            .into_iter()
            .map(|position| {
                let flips = flippable_all(board, position, color).len();
                (position, tier_of(position, size), flips)
            })
            .collect();

        // evaluated is non-empty, so both reductions are safe.
        let best_tier = evaluated.iter().map(|&(_, tier, _)| tier).min();
        let Some(best_tier) = best_tier else {
            return Err(StrategyError::NoLegalMoves(color));
        };
        let best_flips = evaluated
            .iter()
            .filter(|&&(_, tier, _)| tier == best_tier)
            .map(|&(_, _, flips)| flips)
            .max()
            .unwrap_or(0);

        let best: Vec<Position> = evaluated
            .iter()
            .filter(|&&(_, tier, flips)| tier == best_tier && flips == best_flips)
            .map(|&(position, _, _)| position)
            .collect();
        Ok(pick_random(&mut self.rng, &best))
    }

    fn name(&self) -> &'static str {
        "Strong"
    }
}
