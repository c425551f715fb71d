//! Core value types shared by the board, rule engine and match controller.

use std::fmt;
use std::sync::Arc;

/// Board edge length.
pub const BOARD_SIZE: i8 = 8;

/// Seat at the board. `Light` is player A (rows 0..=2, advancing toward
/// increasing row), `Dark` is player B (rows 5..=7, advancing toward row 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Row delta of a single forward step for a man of this side.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }

    /// Row on which a man of this side is crowned.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Side::Light => BOARD_SIZE - 1,
            Side::Dark => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Light => write!(f, "light"),
            Side::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// A single checker. The owner never changes; the rank only ever goes
/// from `Man` to `King`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Side,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub const fn man(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::Man,
        }
    }

    #[inline]
    pub const fn king(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::King,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    #[inline]
    pub const fn crowned(self) -> Self {
        Self::king(self.owner)
    }
}

/// Board coordinate. Out-of-range values are representable so that caller
/// input can be rejected with a proper error instead of a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Playable squares are the ones where `row + col` is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row as i16 + self.col as i16) % 2 != 0
    }

    /// Wraps on overflow; a wrapped square is always off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self::new(self.row.wrapping_add(d_row), self.col.wrapping_add(d_col))
    }

    /// Iterates all 64 squares, row-major from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Participant identity, keyed by nickname. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(Arc<str>);

impl PlayerId {
    pub fn new(nickname: impl Into<Arc<str>>) -> Self {
        Self(nickname.into())
    }

    #[inline]
    pub fn nickname(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
