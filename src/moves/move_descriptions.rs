//! Completed-move records kept in the game history.

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::PieceRecord;
use crate::utils::algebraic::location_to_algebraic;

/// One completed move: where the piece came from, where it landed, what
/// moved, and what (if anything) it captured. Append-only history entries;
/// insertion order is chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub piece: PieceRecord,
    pub captured: Option<PieceRecord>,
}

impl ChessMove {
    /// Formats this move in long algebraic notation (e.g., "e2e4"), with a
    /// trailing `x`-suffix square name for captures (e.g., "e4xd5").
    pub fn to_long_algebraic(&self) -> String {
        let from = location_to_algebraic(&self.from).unwrap_or_else(|_| "??".to_owned());
        let to = location_to_algebraic(&self.to).unwrap_or_else(|_| "??".to_owned());
        if self.captured.is_some() {
            format!("{from}x{to}")
        } else {
            format!("{from}{to}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::chess_types::{PieceClass, PieceRecord, PieceTeam};
    use crate::utils::algebraic::algebraic_to_location;

    #[test]
    fn long_algebraic_marks_captures() {
        let quiet = ChessMove {
            from: algebraic_to_location("e2").expect("e2"),
            to: algebraic_to_location("e4").expect("e4"),
            piece: PieceRecord::new(PieceClass::Pawn, PieceTeam::White),
            captured: None,
        };
        assert_eq!(quiet.to_long_algebraic(), "e2e4");

        let capture = ChessMove {
            from: algebraic_to_location("e4").expect("e4"),
            to: algebraic_to_location("d5").expect("d5"),
            piece: PieceRecord::new(PieceClass::Pawn, PieceTeam::White),
            captured: Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Black)),
        };
        assert_eq!(capture.to_long_algebraic(), "e4xd5");
    }
}
