//! Queen candidate generation: the union of the rook and bishop rays.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceTeam;
use crate::moves::move_generator::slide_along_rays;
use crate::moves::{bishop_moves::BISHOP_RAYS, rook_moves::ROOK_RAYS};

pub fn candidate_moves(
    board: &Board,
    location: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    let mut moves = slide_along_rays(board, location, team, &ROOK_RAYS);
    moves.extend(slide_along_rays(board, location, team, &BISHOP_RAYS));
    moves
}

#[cfg(test)]
mod tests {
    use super::candidate_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{PieceClass, PieceRecord, PieceTeam};
    use crate::moves::{bishop_moves, rook_moves};
    use crate::utils::algebraic::algebraic_to_location;

    #[test]
    fn queen_is_the_union_of_rook_and_bishop() {
        let mut board = Board::empty();
        let d4 = algebraic_to_location("d4").expect("d4");
        board.set_piece(&d4, Some(PieceRecord::new(PieceClass::Queen, PieceTeam::White)));

        let queen = candidate_moves(&board, &d4, PieceTeam::White);
        let rook = rook_moves::candidate_moves(&board, &d4, PieceTeam::White);
        let bishop = bishop_moves::candidate_moves(&board, &d4, PieceTeam::White);

        assert_eq!(queen.len(), rook.len() + bishop.len());
        assert_eq!(queen.len(), 27);
        for loc in rook.iter().chain(bishop.iter()) {
            assert!(queen.contains(loc));
        }
    }
}
