use crate::game::{Position, Rotation};

/// Visual travel direction of a flip, derived from where the captured disc
/// sits relative to the placed disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl FlipDirection {
    /// Direction for a disc at `captured` flipped by a placement at
    /// `placed`. Horizontal movement wins on diagonals, so only captures
    /// straight above or below flip about the X axis.
    pub fn between(placed: Position, captured: Position) -> FlipDirection {
        let row_delta = captured.row as i32 - placed.row as i32;
        let col_delta = captured.col as i32 - placed.col as i32;

        if col_delta != 0 {
            if col_delta > 0 {
                FlipDirection::LeftToRight
            } else {
                FlipDirection::RightToLeft
            }
        } else if row_delta > 0 {
            FlipDirection::TopToBottom
        } else {
            FlipDirection::BottomToTop
        }
    }

    /// Apply this direction's ±180° delta to a rotation. Angles accumulate
    /// without wrapping.
    pub fn rotate(self, rotation: Rotation) -> Rotation {
        let mut rotated = rotation;
        match self {
            FlipDirection::LeftToRight => rotated.y_deg += 180,
            FlipDirection::RightToLeft => rotated.y_deg -= 180,
            FlipDirection::TopToBottom => rotated.x_deg += 180,
            FlipDirection::BottomToTop => rotated.x_deg -= 180,
        }
        rotated
    }
}
