use rand::rngs::StdRng;
use rand::SeedableRng;

use super::board::{Board, Position, Score};
use super::disc::DiscColor;
use super::state::{GameState, Outcome};
use crate::ai::CpuStrategy;
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError, StrategyError};
use crate::flip::{FlipChoreographer, FlipQueueEntry};

/// What one accepted placement did, for the caller to render: the mover and
/// cell, the captured positions, the pass notice if the opponent was
/// skipped, and the game outcome afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReport {
    pub position: Position,
    pub color: DiscColor,
    pub captured: Vec<Position>,
    pub passed: Option<DiscColor>,
    pub outcome: Outcome,
}

/// One human-versus-CPU game: the turn state machine, the flip queue, a
/// display board the queue reveals captures on, and the CPU seat.
///
/// The engine state is always ahead of the display board: `place` applies
/// the full move immediately and enqueues the captures, and the display
/// board catches up as the caller drains [`step_flip`]. While the queue is
/// non-empty, further placements are refused with
/// [`MoveError::FlipInProgress`] — the caller cannot race an in-progress
/// capture reveal.
///
/// [`step_flip`]: GameSession::step_flip
pub struct GameSession {
    state: GameState,
    display: Board,
    flips: FlipChoreographer,
    human_color: DiscColor,
    cpu: Box<dyn CpuStrategy>,
}

impl GameSession {
    /// Start a game from a validated config with OS randomness for the
    /// color coin flip and the CPU's tie-breaking.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let mut rng = StdRng::from_os_rng();
        let human_color = config.human_color.resolve(&mut rng);
        Self::build(config, human_color, config.difficulty.strategy())
    }

    /// Start a reproducible game: the seed fixes both the color resolution
    /// and the CPU's random choices.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let human_color = config.human_color.resolve(&mut rng);
        Self::build(config, human_color, config.difficulty.seeded_strategy(seed))
    }

    fn build(
        config: &GameConfig,
        human_color: DiscColor,
        cpu: Box<dyn CpuStrategy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.board_size)?;
        Ok(GameSession {
            state: GameState::with_board(board.clone(), DiscColor::Black),
            display: board,
            flips: FlipChoreographer::new(),
            human_color,
            cpu,
        })
    }

    /// The board the caller should render: placements land immediately,
    /// captures appear as the flip queue drains.
    pub fn board(&self) -> &Board {
        &self.display
    }

    /// The authoritative engine state (final colors, no animation lag).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_turn(&self) -> DiscColor {
        self.state.current_turn()
    }

    pub fn human_color(&self) -> DiscColor {
        self.human_color
    }

    pub fn cpu_color(&self) -> DiscColor {
        self.human_color.opponent()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn score(&self) -> Score {
        self.state.score()
    }

    /// Legal moves for the side to move, for hint rendering.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.state.legal_moves()
    }

    pub fn is_flipping(&self) -> bool {
        self.flips.is_flipping()
    }

    /// Place a disc for the side to move.
    pub fn place(&mut self, position: Position) -> Result<PlacementReport, MoveError> {
        if self.flips.is_flipping() {
            return Err(MoveError::FlipInProgress);
        }

        let color = self.state.current_turn();
        let applied = self.state.apply_move(color, position)?;

        // The placed disc shows up at once; captures go through the queue.
        self.display.set_disc(position, color);
        self.flips
            .enqueue(FlipQueueEntry::sequence(position, &applied.captured, color));

        let report = PlacementReport {
            position,
            color,
            captured: applied.captured,
            passed: applied.passed,
            outcome: applied.state.outcome(),
        };
        self.state = applied.state;
        Ok(report)
    }

    /// Let the CPU seat pick and play its move.
    pub fn play_cpu(&mut self) -> Result<PlacementReport, MoveError> {
        if self.flips.is_flipping() {
            return Err(MoveError::FlipInProgress);
        }
        if self.state.is_over() {
            return Err(MoveError::GameConcluded);
        }

        let color = self.state.current_turn();
        let position = match self.cpu.select_move(self.state.board(), color) {
            Ok(position) => position,
            // The turn never rests on a color without moves while the game
            // is running, so a strategy refusal means the game is done.
            Err(StrategyError::NoLegalMoves(_)) => return Err(MoveError::GameConcluded),
        };
        self.place(position)
    }

    /// Reveal the next queued capture on the display board.
    pub fn step_flip(&mut self) -> Option<FlipQueueEntry> {
        self.flips.step(&mut self.display)
    }

    /// Abandon any in-flight animation and start the game over.
    pub fn restart(&mut self) {
        self.flips.clear();
        let board = match Board::new(self.display.size()) {
            Ok(board) => board,
            Err(_) => unreachable!("session board size was validated at construction"),
        };
        self.display = board.clone();
        self.state = GameState::with_board(board, DiscColor::Black);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::config::PlayerColor;

    fn session(difficulty: Difficulty) -> GameSession {
        let config = GameConfig {
            board_size: 8,
            difficulty,
            human_color: PlayerColor::Black,
        };
        GameSession::with_seed(&config, 4).unwrap()
    }

    #[test]
    fn test_placement_gated_while_flipping() {
        let mut game = session(Difficulty::Weak);
        let report = game.place(Position::new(2, 3)).unwrap();
        assert_eq!(report.captured, vec![Position::new(3, 3)]);
        assert!(game.is_flipping());

        assert_eq!(
            game.place(Position::new(2, 4)),
            Err(MoveError::FlipInProgress)
        );
        assert_eq!(game.play_cpu(), Err(MoveError::FlipInProgress));

        assert!(game.step_flip().is_some());
        assert!(!game.is_flipping());
        assert!(game.play_cpu().is_ok());
    }

    #[test]
    fn test_display_board_converges_after_draining() {
        let mut game = session(Difficulty::Weak);
        game.place(Position::new(2, 3)).unwrap();

        // Mid-animation the display still shows the old color at (3,3).
        assert_eq!(game.board().disc_at(Position::new(3, 3)), DiscColor::White);
        while game.step_flip().is_some() {}

        for position in game.state().board().positions().collect::<Vec<_>>() {
            assert_eq!(
                game.board().disc_at(position),
                game.state().board().disc_at(position)
            );
        }
    }

    #[test]
    fn test_cpu_plays_full_game_against_itself() {
        let mut game = session(Difficulty::Adaptive);
        let mut moves = 0;
        while !game.state().is_over() {
            game.play_cpu().unwrap();
            while game.step_flip().is_some() {}
            moves += 1;
            assert!(moves <= 64, "game did not terminate");
        }
        assert!(game.outcome().is_decided());
        assert!(game.play_cpu().is_err());

        let score = game.score();
        assert!(score.black + score.white <= 64);
    }

    #[test]
    fn test_restart_clears_queue_and_state() {
        let mut game = session(Difficulty::Normal);
        game.place(Position::new(2, 3)).unwrap();
        assert!(game.is_flipping());

        game.restart();
        assert!(!game.is_flipping());
        assert_eq!(game.current_turn(), DiscColor::Black);
        assert_eq!(game.score(), Score { black: 2, white: 2 });
        assert_eq!(game.board().disc_at(Position::new(3, 3)), DiscColor::White);
    }

    #[test]
    fn test_random_color_resolves_deterministically_with_seed() {
        let config = GameConfig {
            board_size: 8,
            difficulty: Difficulty::Weak,
            human_color: PlayerColor::Random,
        };
        let first = GameSession::with_seed(&config, 2).unwrap().human_color();
        let second = GameSession::with_seed(&config, 2).unwrap().human_color();
        assert_eq!(first, second);
        assert!(first.is_disc());
    }
}
