//! Flip choreography: the direction/rotation math for turning a disc over,
//! and the FIFO state machine that reveals a move's captures one cell at a
//! time.

mod choreographer;
mod rotation;

pub use choreographer::{FlipChoreographer, FlipQueueEntry};
pub use rotation::FlipDirection;
