//! Core value types shared by the board engine.
//!
//! Pieces are tagged `(team, class)` pairs compared structurally. They are
//! `Copy` value types: captures and promotions replace the record on the
//! square, never mutate it.

/// Represents the team (color) of a chess piece.
/// Used to distinguish between the two sides and to drive turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceTeam {
    /// The white side; moves first and pushes pawns toward rank 8.
    White,
    /// The black side; pushes pawns toward rank 1.
    Black,
}

impl PieceTeam {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::White => PieceTeam::Black,
            PieceTeam::Black => PieceTeam::White,
        }
    }

    /// The row this team's pawns start on (row 0 = rank 8).
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            PieceTeam::White => 6,
            PieceTeam::Black => 1,
        }
    }

    /// The row a pawn of this team promotes on.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            PieceTeam::White => 0,
            PieceTeam::Black => 7,
        }
    }

    /// Pawn forward direction as a row delta: white climbs toward row 0.
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            PieceTeam::White => -1,
            PieceTeam::Black => 1,
        }
    }
}

/// Represents the type (class) of a chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    /// A pawn piece.
    Pawn,
    /// A knight piece.
    Knight,
    /// A bishop piece.
    Bishop,
    /// A rook piece.
    Rook,
    /// A queen piece.
    Queen,
    /// A king piece.
    King,
}

/// Represents a chess piece with its class and team.
/// Used to store information about a piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// The team the piece fights for.
    pub team: PieceTeam,
}

impl PieceRecord {
    #[inline]
    pub const fn new(class: PieceClass, team: PieceTeam) -> Self {
        PieceRecord { class, team }
    }
}

/// Overall game status reported to adapters.
///
/// Only `Playing` and `Checkmate` are ever produced: the engine generates
/// pseudo-legal moves and does not evaluate check, so `Checkmate` here
/// means flag fall on the clock, and `Check`/`Stalemate` exist only to
/// round out the status vocabulary of the adapter contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

#[cfg(test)]
mod tests {
    use super::{PieceClass, PieceRecord, PieceTeam};

    #[test]
    fn opposite_flips_between_the_two_teams() {
        assert_eq!(PieceTeam::White.opposite(), PieceTeam::Black);
        assert_eq!(PieceTeam::Black.opposite(), PieceTeam::White);
    }

    #[test]
    fn pawn_geometry_is_mirrored() {
        assert_eq!(PieceTeam::White.pawn_start_row(), 6);
        assert_eq!(PieceTeam::Black.pawn_start_row(), 1);
        assert_eq!(PieceTeam::White.promotion_row(), 0);
        assert_eq!(PieceTeam::Black.promotion_row(), 7);
        assert_eq!(PieceTeam::White.forward_direction(), -1);
        assert_eq!(PieceTeam::Black.forward_direction(), 1);
    }

    #[test]
    fn piece_records_compare_structurally() {
        let a = PieceRecord::new(PieceClass::Queen, PieceTeam::White);
        let b = PieceRecord::new(PieceClass::Queen, PieceTeam::White);
        let c = PieceRecord::new(PieceClass::Queen, PieceTeam::Black);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
