//! Bishop candidate generation: slides along the four diagonal rays with
//! the same blocking rule as the rook.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceTeam;
use crate::moves::move_generator::slide_along_rays;

pub const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn candidate_moves(
    board: &Board,
    location: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    slide_along_rays(board, location, team, &BISHOP_RAYS)
}
