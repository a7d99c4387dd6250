//! Pawn candidate generation.
//!
//! Single push to an empty square, double push from the start rank through
//! two empty squares, and diagonal forward captures of enemy pieces. The
//! diagonal capture is the only capture rule; there is no en passant.

use crate::board_location::{offset_board_location, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceTeam;

pub fn candidate_moves(
    board: &Board,
    location: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    let forward = team.forward_direction();

    if let Ok(one_ahead) = offset_board_location(location, forward, 0) {
        if board.is_empty_square(&one_ahead) {
            moves.push(one_ahead);

            // Double push only from the start rank, and only through an
            // empty intervening square.
            if location.0 == team.pawn_start_row() {
                if let Ok(two_ahead) = offset_board_location(location, 2 * forward, 0) {
                    if board.is_empty_square(&two_ahead) {
                        moves.push(two_ahead);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Ok(diagonal) = offset_board_location(location, forward, d_col) {
            if let Some(target) = board.piece_at(&diagonal) {
                if target.team != team {
                    moves.push(diagonal);
                }
            }
        }
    }

    moves
}
