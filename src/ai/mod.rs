//! CPU opponents: a common strategy trait, a difficulty ladder to dispatch
//! on, positional evaluation helpers, and the four strategy tiers.

mod adaptive;
mod evaluation;
mod normal;
mod random;
mod strategy;
mod strong;

pub use adaptive::AdaptiveCpu;
pub use evaluation::{GamePhase, PositionClass};
pub use normal::NormalCpu;
pub use random::WeakCpu;
pub use strategy::{CpuStrategy, Difficulty};
pub use strong::StrongCpu;
