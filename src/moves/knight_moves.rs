//! Knight candidate generation: the eight fixed L-shaped offsets, filtered
//! to on-board squares not occupied by a friendly piece.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceTeam;
use crate::moves::move_generator::step_to_offsets;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn candidate_moves(
    board: &Board,
    location: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    step_to_offsets(board, location, team, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::candidate_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{PieceClass, PieceRecord, PieceTeam};
    use crate::utils::algebraic::{algebraic_to_location, location_to_algebraic};

    #[test]
    fn knight_on_d4_has_exactly_eight_targets() {
        let mut board = Board::empty();
        let d4 = algebraic_to_location("d4").expect("d4");
        board.set_piece(&d4, Some(PieceRecord::new(PieceClass::Knight, PieceTeam::White)));

        let mut names: Vec<String> = candidate_moves(&board, &d4, PieceTeam::White)
            .iter()
            .map(|loc| location_to_algebraic(loc).expect("on board"))
            .collect();
        names.sort();
        assert_eq!(names, vec!["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]);
    }

    #[test]
    fn corner_knight_is_bounds_filtered() {
        let mut board = Board::empty();
        let a1 = algebraic_to_location("a1").expect("a1");
        board.set_piece(&a1, Some(PieceRecord::new(PieceClass::Knight, PieceTeam::White)));
        assert_eq!(candidate_moves(&board, &a1, PieceTeam::White).len(), 2);
    }

    #[test]
    fn friendly_pieces_block_but_enemies_are_targets() {
        let mut board = Board::empty();
        let d4 = algebraic_to_location("d4").expect("d4");
        let b3 = algebraic_to_location("b3").expect("b3");
        let b5 = algebraic_to_location("b5").expect("b5");
        board.set_piece(&d4, Some(PieceRecord::new(PieceClass::Knight, PieceTeam::White)));
        board.set_piece(&b3, Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::White)));
        board.set_piece(&b5, Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Black)));

        let moves = candidate_moves(&board, &d4, PieceTeam::White);
        assert!(!moves.contains(&b3));
        assert!(moves.contains(&b5));
        assert_eq!(moves.len(), 7);
    }
}
