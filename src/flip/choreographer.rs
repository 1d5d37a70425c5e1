use std::collections::VecDeque;

use super::rotation::FlipDirection;
use crate::game::{Board, DiscColor, Position};

/// One pending flip: which cell turns over, which way, and the color it
/// shows afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipQueueEntry {
    pub position: Position,
    pub direction: FlipDirection,
    pub target: DiscColor,
}

impl FlipQueueEntry {
    /// Build the entry sequence for one applied move, preserving the capture
    /// order handed over by the rules engine.
    pub fn sequence(
        placed: Position,
        captured: &[Position],
        target: DiscColor,
    ) -> Vec<FlipQueueEntry> {
        captured
            .iter()
            .map(|&position| FlipQueueEntry {
                position,
                direction: FlipDirection::between(placed, position),
                target,
            })
            .collect()
    }
}

/// FIFO state machine that realizes a capture one cell at a time.
///
/// `is_flipping` is true exactly while entries remain queued; the turn
/// controller uses it to refuse new placements until the caller has drained
/// the queue with [`step`].
///
/// [`step`]: FlipChoreographer::step
#[derive(Debug, Default)]
pub struct FlipChoreographer {
    queue: VecDeque<FlipQueueEntry>,
    flipping: bool,
}

impl FlipChoreographer {
    pub fn new() -> Self {
        FlipChoreographer::default()
    }

    /// Append entries to the queue. Enqueueing nothing changes nothing.
    pub fn enqueue(&mut self, entries: impl IntoIterator<Item = FlipQueueEntry>) {
        self.queue.extend(entries);
        if !self.queue.is_empty() {
            self.flipping = true;
        }
    }

    /// Pop the head entry and apply its color and rotation delta to `board`.
    /// Returns `None` once the queue is empty; `is_flipping` drops with the
    /// final entry.
    pub fn step(&mut self, board: &mut Board) -> Option<FlipQueueEntry> {
        let entry = self.queue.pop_front()?;

        let mut cell = board.get(entry.position);
        cell.disc = entry.target;
        cell.rotation = entry.direction.rotate(cell.rotation);
        board.set_cell(entry.position, cell);

        if self.queue.is_empty() {
            self.flipping = false;
        }
        Some(entry)
    }

    /// Drop all pending entries without applying them. Idempotent.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.flipping = false;
    }

    pub fn is_flipping(&self) -> bool {
        self.flipping
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
