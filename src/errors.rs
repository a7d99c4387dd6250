/// Represents all possible error types that can occur in the board engine.
/// Used throughout the codebase for error handling and reporting.
///
/// The interactive surface (`GameState::select_square` and the clock tick)
/// is infallible by design: malformed input degrades to a no-op there. The
/// variants below are only reachable from coordinate arithmetic and
/// algebraic-notation parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errors {
    /// Indicates an attempted access outside the bounds of the 8x8 board.
    OutOfBounds,
    /// The provided algebraic square name is invalid or could not be parsed.
    InvalidAlgebraic,
}
