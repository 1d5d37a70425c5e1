use rand::rngs::StdRng;
use rand::Rng;

use super::{AdaptiveCpu, NormalCpu, StrongCpu, WeakCpu};
use crate::error::StrategyError;
use crate::game::{Board, DiscColor, Position};

/// Universal interface for the CPU opponents.
///
/// Implementations are pure apart from their owned RNG: given the same board,
/// color and RNG state they return the same move. Callers must check
/// legality first; invoking a strategy with no legal moves is a contract
/// violation reported as [`StrategyError::NoLegalMoves`].
pub trait CpuStrategy {
    /// Select exactly one move from the legal set for `color`.
    fn select_move(&mut self, board: &Board, color: DiscColor)
        -> Result<Position, StrategyError>;

    /// Return the strategy's display name.
    fn name(&self) -> &'static str;
}

/// The difficulty ladder offered at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Weak,
    Normal,
    Strong,
    Adaptive,
}

impl Difficulty {
    /// Build the strategy for this difficulty with an OS-seeded RNG.
    pub fn strategy(self) -> Box<dyn CpuStrategy> {
        match self {
            Difficulty::Weak => Box::new(WeakCpu::new()),
            Difficulty::Normal => Box::new(NormalCpu::new()),
            Difficulty::Strong => Box::new(StrongCpu::new()),
            Difficulty::Adaptive => Box::new(AdaptiveCpu::new()),
        }
    }

    /// Build the strategy with a fixed seed, for reproducible games.
    pub fn seeded_strategy(self, seed: u64) -> Box<dyn CpuStrategy> {
        match self {
            Difficulty::Weak => Box::new(WeakCpu::seeded(seed)),
            Difficulty::Normal => Box::new(NormalCpu::seeded(seed)),
            Difficulty::Strong => Box::new(StrongCpu::seeded(seed)),
            Difficulty::Adaptive => Box::new(AdaptiveCpu::seeded(seed)),
        }
    }
}

/// Pick one element uniformly at random. Callers guarantee non-emptiness.
pub(crate) fn pick_random(rng: &mut StdRng, positions: &[Position]) -> Position {
    positions[rng.random_range(0..positions.len())]
}
