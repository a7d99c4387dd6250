//! Rook candidate generation: slides along the four orthogonal rays until
//! blocked, including the blocking square only if it holds an enemy piece.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceTeam;
use crate::moves::move_generator::slide_along_rays;

pub const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn candidate_moves(
    board: &Board,
    location: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    slide_along_rays(board, location, team, &ROOK_RAYS)
}

#[cfg(test)]
mod tests {
    use super::candidate_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{PieceClass, PieceRecord, PieceTeam};
    use crate::utils::algebraic::algebraic_to_location;

    #[test]
    fn rook_on_a1_covers_fourteen_squares() {
        let mut board = Board::empty();
        let a1 = algebraic_to_location("a1").expect("a1");
        board.set_piece(&a1, Some(PieceRecord::new(PieceClass::Rook, PieceTeam::White)));

        let moves = candidate_moves(&board, &a1, PieceTeam::White);
        assert_eq!(moves.len(), 14);
        assert!(!moves.contains(&a1));
    }

    #[test]
    fn rays_stop_at_blockers() {
        let mut board = Board::empty();
        let a1 = algebraic_to_location("a1").expect("a1");
        let a4 = algebraic_to_location("a4").expect("a4");
        let d1 = algebraic_to_location("d1").expect("d1");
        board.set_piece(&a1, Some(PieceRecord::new(PieceClass::Rook, PieceTeam::White)));
        board.set_piece(&a4, Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Black)));
        board.set_piece(&d1, Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::White)));

        let moves = candidate_moves(&board, &a1, PieceTeam::White);
        // Up the a-file: a2, a3, then the enemy blocker a4 inclusively.
        // Along rank 1: b1, c1, stopping short of the friendly d1.
        assert_eq!(moves.len(), 5);
        assert!(moves.contains(&a4));
        assert!(!moves.contains(&d1));
    }
}
