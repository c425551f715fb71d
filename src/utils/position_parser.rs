//! Position-string parser.
//!
//! Format: eight rows from row 7 down to row 0 separated by `/`, digits for
//! runs of empty squares, `l`/`L` for a light man/king and `d`/`D` for a
//! dark man/king, then a space and the side to move (`l` or `d`).

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;

pub fn parse_position(position: &str) -> CheckersResult<(Board, Side)> {
    let mut parts = position.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;

    if parts.next().is_some() {
        return Err(invalid("position has extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side = parse_side_to_move(side_part)?;
    Ok((board, side))
}

fn parse_board(board_part: &str) -> CheckersResult<Board> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(invalid("board layout must contain 8 rows"));
    }

    let mut board = Board::new_empty();

    for (index, row_str) in rows.iter().enumerate() {
        let row = BOARD_SIZE - 1 - index as i8;
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += run as usize;
                if col > BOARD_SIZE as usize {
                    return Err(invalid(format!("row {row} has too many columns")));
                }
                continue;
            }

            let piece = piece_from_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;

            if col >= BOARD_SIZE as usize {
                return Err(invalid(format!("row {row} has too many columns")));
            }
            let square = Square::new(row, col as i8);
            if !square.is_dark() {
                return Err(invalid(format!("piece on light square {square}")));
            }
            board.place(square, piece);
            col += 1;
        }

        if col != BOARD_SIZE as usize {
            return Err(invalid(format!("row {row} does not sum to 8 columns")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> CheckersResult<Side> {
    match side_part {
        "l" => Ok(Side::Light),
        "d" => Ok(Side::Dark),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn piece_from_char(ch: char) -> Option<Piece> {
    match ch {
        'l' => Some(Piece::man(Side::Light)),
        'L' => Some(Piece::king(Side::Light)),
        'd' => Some(Piece::man(Side::Dark)),
        'D' => Some(Piece::king(Side::Dark)),
        _ => None,
    }
}

fn invalid(reason: impl Into<String>) -> CheckersError {
    CheckersError::InvalidPosition(reason.into())
}

#[cfg(test)]
mod tests {
    use super::parse_position;
    use crate::checkers_errors::CheckersError;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_rules::STARTING_POSITION;
    use crate::game_state::checkers_types::*;
    use crate::utils::render_board::render_board;

    #[test]
    fn starting_position_matches_new_game() {
        let (board, side) = parse_position(STARTING_POSITION).expect("starting position should parse");

        println!("\n{}", render_board(&board));

        assert_eq!(board, Board::new_game());
        assert_eq!(side, Side::Light);
    }

    #[test]
    fn kings_and_side_are_read() {
        let (board, side) = parse_position("8/8/8/8/8/8/8/1L3D2 d").unwrap();
        assert_eq!(board.get(Square::new(0, 1)), Ok(Some(Piece::king(Side::Light))));
        assert_eq!(board.get(Square::new(0, 5)), Ok(Some(Piece::king(Side::Dark))));
        assert_eq!(board.get(Square::new(0, 7)), Ok(None));
        assert_eq!(side, Side::Dark);
    }

    #[test]
    fn malformed_positions_are_rejected() {
        for position in [
            "",
            "8/8/8/8/8/8/8 l",
            "8/8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8 x",
            "8/8/8/8/8/8/8/7 l",
            "8/8/8/8/8/8/8/1l7 l",
            "8/8/8/8/8/8/8/1q6 l",
            "8/8/8/8/8/8/8/8 l extra",
            "8888888888888888/8/8/8/8/8/8/8 l",
            "8/8/8/8/8/8/8/8l1l1l1l1l1l1l1l1l1l1l1l1l1l1l1l1l1l1l1l1l1l1 l",
        ] {
            assert!(
                matches!(parse_position(position), Err(CheckersError::InvalidPosition(_))),
                "{position:?} should be rejected"
            );
        }
    }

    #[test]
    fn pieces_on_light_squares_are_rejected() {
        assert!(matches!(
            parse_position("8/8/8/8/8/8/8/l7 l"),
            Err(CheckersError::InvalidPosition(_))
        ));
    }
}
