//! Terminal-oriented Unicode board renderer.
//!
//! Row 7 is printed first so light's men move up the screen. Light squares
//! print blank, empty dark squares as a middle dot.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in (0..BOARD_SIZE).rev() {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let square = Square::new(row, col);
            let ch = match board.piece_at(square) {
                Some(piece) => piece_to_unicode(piece),
                None if square.is_dark() => '·',
                None => ' ',
            };
            out.push(ch);

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.owner, piece.rank) {
        (Side::Light, Rank::Man) => '⛀',
        (Side::Light, Rank::King) => '⛁',
        (Side::Dark, Rank::Man) => '⛂',
        (Side::Dark, Rank::King) => '⛃',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_board_renders_both_sides() {
        let rendered = render_board(&Board::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "7 ⛂   ⛂   ⛂   ⛂   7");
        assert_eq!(lines[4], "4   ·   ·   ·   · 4");
        assert_eq!(rendered.chars().filter(|&c| c == '⛀').count(), 12);
        assert_eq!(rendered.chars().filter(|&c| c == '⛂').count(), 12);
    }
}
