//! Capture and legality rules. Everything here is a pure function over a
//! borrowed board; the single primitive is the directional walk in
//! [`flippable_in_direction`], from which captures and legal moves derive.

use super::board::{Board, Position};
use super::disc::DiscColor;

/// The 8 unit direction vectors as (row delta, col delta).
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether each color currently has at least one legal move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placeability {
    pub black: bool,
    pub white: bool,
}

/// Walk from `position` along `direction`, collecting opponent discs, and
/// return them ordered nearest-first if the run is terminated by a disc of
/// `color`. Any other terminator (edge, empty cell) yields no captures.
pub fn flippable_in_direction(
    board: &Board,
    position: Position,
    color: DiscColor,
    direction: (i32, i32),
) -> Vec<Position> {
    if !color.is_disc() {
        return Vec::new();
    }

    let opponent = color.opponent();
    let (row_delta, col_delta) = direction;
    let mut flippable = Vec::new();

    let mut row = position.row as i32 + row_delta;
    let mut col = position.col as i32 + col_delta;

    // Keep walking while the next cell holds the opponent's color
    while board.in_bounds(row, col) && board.disc_at(Position::new(row as usize, col as usize)) == opponent
    {
        flippable.push(Position::new(row as usize, col as usize));
        row += row_delta;
        col += col_delta;
    }

    // The run only captures if it is closed off by our own disc
    if board.in_bounds(row, col)
        && board.disc_at(Position::new(row as usize, col as usize)) == color
        && !flippable.is_empty()
    {
        flippable
    } else {
        Vec::new()
    }
}

/// All discs captured by placing `color` at `position`, concatenated across
/// the 8 directions. Each direction's captures stay contiguous and ordered
/// nearest-to-farthest. Occupied target cells capture nothing.
pub fn flippable_all(board: &Board, position: Position, color: DiscColor) -> Vec<Position> {
    if board.disc_at(position) != DiscColor::None {
        return Vec::new();
    }

    DIRECTIONS
        .iter()
        .flat_map(|&direction| flippable_in_direction(board, position, color, direction))
        .collect()
}

/// Every empty cell where placing `color` captures at least one disc.
pub fn legal_moves(board: &Board, color: DiscColor) -> Vec<Position> {
    board
        .positions()
        .filter(|&position| {
            board.disc_at(position) == DiscColor::None
                && !flippable_all(board, position, color).is_empty()
        })
        .collect()
}

/// Short-circuiting form of `!legal_moves(board, color).is_empty()`.
pub fn has_legal_move(board: &Board, color: DiscColor) -> bool {
    board.positions().any(|position| {
        board.disc_at(position) == DiscColor::None
            && !flippable_all(board, position, color).is_empty()
    })
}

/// Evaluate both colors' ability to place anywhere on the board.
pub fn placeability(board: &Board) -> Placeability {
    Placeability {
        black: has_legal_move(board, DiscColor::Black),
        white: has_legal_move(board, DiscColor::White),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut positions: Vec<Position>) -> Vec<Position> {
        positions.sort_by_key(|p| (p.row, p.col));
        positions
    }

    #[test]
    fn test_initial_legal_moves_for_black() {
        let board = Board::default();
        let moves = sorted(legal_moves(&board, DiscColor::Black));
        assert_eq!(
            moves,
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 5),
                Position::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_initial_legal_moves_for_white() {
        let board = Board::default();
        let moves = sorted(legal_moves(&board, DiscColor::White));
        assert_eq!(
            moves,
            vec![
                Position::new(2, 4),
                Position::new(3, 5),
                Position::new(4, 2),
                Position::new(5, 3),
            ]
        );
    }

    #[test]
    fn test_flippable_in_direction_requires_terminator() {
        let board = Board::default();
        // Walking down from (2,3): (3,3) is white, (4,3) is black -> capture.
        let captured =
            flippable_in_direction(&board, Position::new(2, 3), DiscColor::Black, (1, 0));
        assert_eq!(captured, vec![Position::new(3, 3)]);

        // Walking right from (2,3): (2,4) is empty -> nothing.
        let captured =
            flippable_in_direction(&board, Position::new(2, 3), DiscColor::Black, (0, 1));
        assert!(captured.is_empty());
    }

    #[test]
    fn test_unterminated_run_to_edge_captures_nothing() {
        // B W W _ along the top row: placing black at (0,3) captures both
        // whites; white at (0,3) finds no white terminator walking left.
        let n = DiscColor::None;
        let b = DiscColor::Black;
        let w = DiscColor::White;
        let mut rows = vec![vec![n; 4]; 4];
        rows[0] = vec![b, w, w, n];
        let board = Board::from_rows(&rows).unwrap();

        let captured = flippable_all(&board, Position::new(0, 3), DiscColor::Black);
        assert_eq!(
            sorted(captured),
            vec![Position::new(0, 1), Position::new(0, 2)]
        );
        assert!(flippable_all(&board, Position::new(0, 3), DiscColor::White).is_empty());
    }

    #[test]
    fn test_occupied_cell_captures_nothing() {
        let board = Board::default();
        assert!(flippable_all(&board, Position::new(3, 3), DiscColor::Black).is_empty());
        assert!(flippable_all(&board, Position::new(3, 4), DiscColor::White).is_empty());
    }

    #[test]
    fn test_direction_captures_ordered_nearest_first() {
        // B W W W _ -> placing black at (0,4): (0,3) is nearest, (0,1) farthest.
        let n = DiscColor::None;
        let b = DiscColor::Black;
        let w = DiscColor::White;
        let mut rows = vec![vec![n; 6]; 6];
        rows[0] = vec![b, w, w, w, n, n];
        let board = Board::from_rows(&rows).unwrap();

        let captured =
            flippable_in_direction(&board, Position::new(0, 4), DiscColor::Black, (0, -1));
        assert_eq!(
            captured,
            vec![
                Position::new(0, 3),
                Position::new(0, 2),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_legal_moves_scan_is_idempotent() {
        let board = Board::default();
        let first = sorted(legal_moves(&board, DiscColor::Black));
        let second = sorted(legal_moves(&board, DiscColor::Black));
        assert_eq!(first, second);
    }

    #[test]
    fn test_none_color_has_no_moves() {
        let board = Board::default();
        assert!(legal_moves(&board, DiscColor::None).is_empty());
    }

    #[test]
    fn test_placeability_on_initial_board() {
        let board = Board::default();
        assert_eq!(
            placeability(&board),
            Placeability {
                black: true,
                white: true
            }
        );
    }

    #[test]
    fn test_placeability_when_one_side_is_stuck() {
        // Lone white disc: any bracket white forms must end on it, and the
        // only candidate line runs off the board.
        let n = DiscColor::None;
        let b = DiscColor::Black;
        let w = DiscColor::White;
        let rows = vec![
            vec![n, n, n, n],
            vec![n, n, n, n],
            vec![w, n, n, n],
            vec![b, n, n, n],
        ];
        let board = Board::from_rows(&rows).unwrap();
        let flags = placeability(&board);
        // Black can play (1,0): W then B walking down.
        assert!(flags.black);
        // White would need a white terminator beyond a black run; (4,0) is
        // off the board.
        assert!(!flags.white);
    }
}
