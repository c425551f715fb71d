use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;

/// Inverse of `parse_position`.
pub fn generate_position(board: &Board, side_to_move: Side) -> String {
    let side = match side_to_move {
        Side::Light => "l",
        Side::Dark => "d",
    };
    format!("{} {}", generate_board_field(board), side)
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..BOARD_SIZE).rev() {
        let mut empty_count = 0u8;

        for col in 0..BOARD_SIZE {
            if let Some(piece) = board.piece_at(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_char(piece: Piece) -> char {
    match (piece.owner, piece.rank) {
        (Side::Light, Rank::Man) => 'l',
        (Side::Light, Rank::King) => 'L',
        (Side::Dark, Rank::Man) => 'd',
        (Side::Dark, Rank::King) => 'D',
    }
}

#[cfg(test)]
mod tests {
    use super::generate_position;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_rules::STARTING_POSITION;
    use crate::game_state::checkers_types::*;
    use crate::utils::position_parser::parse_position;

    #[test]
    fn new_game_generates_starting_position() {
        assert_eq!(generate_position(&Board::new_game(), Side::Light), STARTING_POSITION);
    }

    #[test]
    fn kings_and_dark_to_move_survive_a_reparse() {
        let position = "8/3D4/8/8/8/3l4/8/1L6 d";
        let (board, side) = parse_position(position).unwrap();
        assert_eq!(board.piece_at(Square::new(6, 3)), Some(Piece::king(Side::Dark)));
        assert_eq!(generate_position(&board, side), position);
    }
}
