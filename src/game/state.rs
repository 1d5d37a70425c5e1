use super::board::{Board, Position, Score};
use super::disc::DiscColor;
use super::rules;
use crate::error::MoveError;

/// Result of a finished (or still running) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    BlackWin,
    WhiteWin,
    Draw,
}

impl Outcome {
    /// Decide a terminal outcome from raw disc counts.
    pub fn from_score(score: Score) -> Outcome {
        if score.black > score.white {
            Outcome::BlackWin
        } else if score.white > score.black {
            Outcome::WhiteWin
        } else {
            Outcome::Draw
        }
    }

    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Everything a caller needs to react to one applied move: the successor
/// state, the captured cells (per-direction contiguous, nearest-first within
/// each direction), and the color that had to pass, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: GameState,
    pub captured: Vec<Position>,
    pub passed: Option<DiscColor>,
}

/// The turn state machine. PLAYING until neither color can move, then
/// GAME_OVER with a decided [`Outcome`]. Transitions are immutable:
/// [`apply_move`] returns a new state and never touches the old one.
///
/// [`apply_move`]: GameState::apply_move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_turn: DiscColor,
    outcome: Outcome,
}

impl GameState {
    /// Initial state: canonical board, black to move.
    pub fn new() -> Self {
        GameState::with_board(Board::default(), DiscColor::Black)
    }

    /// Start from an arbitrary position. Useful for fixtures and resuming.
    pub fn with_board(board: Board, current_turn: DiscColor) -> Self {
        GameState {
            board,
            current_turn,
            outcome: Outcome::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> DiscColor {
        self.current_turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.current_turn)
    }

    /// Place a disc of `color` at `position` and resolve captures and the
    /// turn advance.
    ///
    /// Fails with [`MoveError::IllegalPlacement`] when `color` is not the
    /// side to move, the cell is occupied, or the placement captures
    /// nothing; fails with [`MoveError::GameConcluded`] once the game has
    /// ended. The successor's turn stays with `color` when the opponent has
    /// no reply (reported via [`MoveOutcome::passed`]), and the game ends
    /// when neither color can move.
    pub fn apply_move(
        &self,
        color: DiscColor,
        position: Position,
    ) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameConcluded);
        }

        let illegal = MoveError::IllegalPlacement {
            row: position.row,
            col: position.col,
        };

        if color != self.current_turn {
            return Err(illegal);
        }

        let captured = rules::flippable_all(&self.board, position, color);
        if captured.is_empty() {
            return Err(illegal);
        }

        let mut board = self.board.clone();
        board.set_disc(position, color);
        for &flipped in &captured {
            board.set_disc(flipped, color);
        }

        let opponent = color.opponent();
        let (current_turn, passed, outcome) = if rules::has_legal_move(&board, opponent) {
            (opponent, None, Outcome::InProgress)
        } else if rules::has_legal_move(&board, color) {
            // Opponent is skipped; the mover goes again.
            (color, Some(opponent), Outcome::InProgress)
        } else {
            let outcome = Outcome::from_score(board.score());
            (opponent, None, outcome)
        };

        Ok(MoveOutcome {
            state: GameState {
                board,
                current_turn,
                outcome,
            },
            captured,
            passed,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: DiscColor = DiscColor::None;
    const B: DiscColor = DiscColor::Black;
    const W: DiscColor = DiscColor::White;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_turn(), DiscColor::Black);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(!state.is_over());
        assert_eq!(state.score(), Score { black: 2, white: 2 });
        assert_eq!(state.legal_moves().len(), 4);
    }

    #[test]
    fn test_opening_capture() {
        let state = GameState::new();
        let outcome = state
            .apply_move(DiscColor::Black, Position::new(2, 3))
            .unwrap();

        assert_eq!(outcome.captured, vec![Position::new(3, 3)]);
        assert_eq!(outcome.passed, None);
        assert_eq!(outcome.state.current_turn(), DiscColor::White);
        assert_eq!(outcome.state.score(), Score { black: 4, white: 1 });
        // The original state is untouched.
        assert_eq!(state.score(), Score { black: 2, white: 2 });
    }

    #[test]
    fn test_illegal_placements() {
        let state = GameState::new();
        let corner = Position::new(0, 0);
        assert_eq!(
            state.apply_move(DiscColor::Black, corner),
            Err(MoveError::IllegalPlacement { row: 0, col: 0 })
        );
        // Occupied cell.
        assert_eq!(
            state.apply_move(DiscColor::Black, Position::new(3, 3)),
            Err(MoveError::IllegalPlacement { row: 3, col: 3 })
        );
        // Wrong turn: (2,4) is legal for white, but black moves first.
        assert_eq!(
            state.apply_move(DiscColor::White, Position::new(2, 4)),
            Err(MoveError::IllegalPlacement { row: 2, col: 4 })
        );
    }

    #[test]
    fn test_pass_is_observable() {
        // Black plays (0,2), capturing (0,1). Afterwards the lone white at
        // (2,0) has no reply, while black can still bracket it via (1,0).
        let rows = vec![
            vec![B, W, N, N, N, N, N, N],
            vec![N; 8],
            vec![W, N, N, N, N, N, N, N],
            vec![B, N, N, N, N, N, N, N],
            vec![B, N, N, N, N, N, N, N],
            vec![B, N, N, N, N, N, N, N],
            vec![B, N, N, N, N, N, N, N],
            vec![B, N, N, N, N, N, N, N],
        ];
        let state = GameState::with_board(Board::from_rows(&rows).unwrap(), DiscColor::Black);

        let outcome = state
            .apply_move(DiscColor::Black, Position::new(0, 2))
            .unwrap();
        assert_eq!(outcome.passed, Some(DiscColor::White));
        assert_eq!(outcome.state.current_turn(), DiscColor::Black);
        assert!(!outcome.state.is_over());
        assert!(outcome
            .state
            .legal_moves()
            .contains(&Position::new(1, 0)));
    }

    #[test]
    fn test_game_over_when_board_fills() {
        // One empty cell left; black fills it and the count decides the game.
        let rows = vec![
            vec![B, W, W, W],
            vec![W, W, W, W],
            vec![W, W, W, W],
            vec![N, W, W, B],
        ];
        let state = GameState::with_board(Board::from_rows(&rows).unwrap(), DiscColor::Black);

        let outcome = state
            .apply_move(DiscColor::Black, Position::new(3, 0))
            .unwrap();
        assert!(outcome.state.is_over());
        assert_eq!(outcome.state.score(), Score { black: 7, white: 9 });
        assert_eq!(outcome.state.outcome(), Outcome::WhiteWin);
        assert!(outcome.state.legal_moves().is_empty());
    }

    #[test]
    fn test_game_over_by_elimination() {
        // Capturing the last white disc ends the game even with empty cells
        // left, since neither side can bracket anything.
        let rows = vec![
            vec![B, W, N, N],
            vec![N, N, N, N],
            vec![N, N, N, N],
            vec![N, N, N, N],
        ];
        let state = GameState::with_board(Board::from_rows(&rows).unwrap(), DiscColor::Black);

        let outcome = state
            .apply_move(DiscColor::Black, Position::new(0, 2))
            .unwrap();
        assert!(outcome.state.is_over());
        assert_eq!(outcome.state.outcome(), Outcome::BlackWin);
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let rows = vec![
            vec![B, W, N, N],
            vec![N, N, N, N],
            vec![N, N, N, N],
            vec![N, N, N, N],
        ];
        let state = GameState::with_board(Board::from_rows(&rows).unwrap(), DiscColor::Black);
        let finished = state
            .apply_move(DiscColor::Black, Position::new(0, 2))
            .unwrap()
            .state;

        assert_eq!(
            finished.apply_move(DiscColor::White, Position::new(3, 3)),
            Err(MoveError::GameConcluded)
        );
    }

    #[test]
    fn test_outcome_from_score() {
        assert_eq!(
            Outcome::from_score(Score {
                black: 40,
                white: 24
            }),
            Outcome::BlackWin
        );
        assert_eq!(
            Outcome::from_score(Score {
                black: 24,
                white: 40
            }),
            Outcome::WhiteWin
        );
        assert_eq!(
            Outcome::from_score(Score {
                black: 32,
                white: 32
            }),
            Outcome::Draw
        );
    }
}
