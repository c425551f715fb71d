use std::fmt;

use crate::game_state::checkers_types::Square;

/// One turn's worth of movement. `captured` is empty for a simple move and
/// otherwise lists the jumped squares in the order they were jumped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Vec<Square>,
}

impl Move {
    #[inline]
    pub fn simple(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: Vec::new(),
        }
    }

    #[inline]
    pub fn capture(from: Square, to: Square, captured: Vec<Square>) -> Self {
        Self { from, to, captured }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captured.len()
    }

    /// Landing squares of each hop, ending with `to`. For a simple move this
    /// is just `[to]`. Stops early if a jumped square is so far out of range
    /// that the next landing cannot be represented.
    pub fn landings(&self) -> Vec<Square> {
        if self.captured.is_empty() {
            return vec![self.to];
        }
        let mut out = Vec::with_capacity(self.captured.len());
        let mut at = self.from;
        for &jumped in &self.captured {
            let Some(landing) = hop_beyond(at, jumped) else {
                break;
            };
            out.push(landing);
            at = landing;
        }
        out
    }
}

/// Square reached by jumping from `at` over `jumped`.
fn hop_beyond(at: Square, jumped: Square) -> Option<Square> {
    let row = jumped.row.checked_mul(2)?.checked_sub(at.row)?;
    let col = jumped.col.checked_mul(2)?.checked_sub(at.col)?;
    Some(Square::new(row, col))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.captured.is_empty() {
            return write!(f, "{}-{}", self.from, self.to);
        }
        let landings = self.landings();
        if landings.len() != self.captured.len() {
            return write!(f, "{}x{}", self.from, self.to);
        }
        write!(f, "{}", self.from)?;
        for landing in landings {
            write!(f, "x{landing}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landings_follow_the_jumped_squares() {
        let mv = Move::capture(
            Square::new(2, 1),
            Square::new(6, 1),
            vec![Square::new(3, 2), Square::new(5, 2)],
        );
        assert_eq!(mv.landings(), vec![Square::new(4, 3), Square::new(6, 1)]);
        assert_eq!(mv.to_string(), "(2,1)x(4,3)x(6,1)");
    }

    #[test]
    fn simple_moves_render_with_a_dash() {
        let mv = Move::simple(Square::new(2, 1), Square::new(3, 0));
        assert!(!mv.is_capture());
        assert_eq!(mv.to_string(), "(2,1)-(3,0)");
    }

    #[test]
    fn out_of_range_jumps_fall_back_to_endpoint_notation() {
        let mv = Move::capture(Square::new(2, 1), Square::new(4, 3), vec![Square::new(100, 2)]);
        assert!(mv.landings().is_empty());
        assert_eq!(mv.to_string(), "(2,1)x(4,3)");
    }
}
