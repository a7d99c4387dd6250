//! King candidate generation: the eight adjacent squares with the friendly
//! occupancy filter. No castling.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceTeam;
use crate::moves::move_generator::step_to_offsets;

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn candidate_moves(
    board: &Board,
    location: &BoardLocation,
    team: PieceTeam,
) -> Vec<BoardLocation> {
    step_to_offsets(board, location, team, &KING_OFFSETS)
}
