//! Rule constants and the configurable parts of the rule set.

/// Standard starting position in the crate's position notation
/// (rows 7 down to 0, light to move).
pub const STARTING_POSITION: &str = "d1d1d1d1/1d1d1d1d/d1d1d1d1/8/8/1l1l1l1l/l1l1l1l1/1l1l1l1l l";

/// Men each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// Which captures satisfy the mandatory-capture rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePrecedence {
    /// Any maximal capture chain may be chosen.
    #[default]
    AnyCapture,
    /// Only chains capturing the most pieces on the whole board are legal.
    LongestChain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulesConfig {
    pub capture_precedence: CapturePrecedence,
}

impl RulesConfig {
    pub const fn longest_chain() -> Self {
        Self {
            capture_precedence: CapturePrecedence::LongestChain,
        }
    }
}
