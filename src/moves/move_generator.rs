//! Pseudo-legal candidate generation entry point.
//!
//! Dispatches on the class of the piece standing on a square and returns
//! the destinations it may move to given only its movement pattern and
//! board occupancy. No king-safety test is applied: a candidate move may
//! leave the mover's own king capturable.

use crate::board_location::{offset_board_location, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceClass, PieceTeam};
use crate::moves::{
    bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves,
};

/// Generates the candidate destinations for the piece at `location`.
///
/// Empty squares and off-board locations produce an empty list; callers
/// never need to pre-validate their input.
pub fn candidate_moves(board: &Board, location: &BoardLocation) -> Vec<BoardLocation> {
    let Some(piece) = board.piece_at(location) else {
        return Vec::new();
    };

    match piece.class {
        PieceClass::Pawn => pawn_moves::candidate_moves(board, location, piece.team),
        PieceClass::Knight => knight_moves::candidate_moves(board, location, piece.team),
        PieceClass::Bishop => bishop_moves::candidate_moves(board, location, piece.team),
        PieceClass::Rook => rook_moves::candidate_moves(board, location, piece.team),
        PieceClass::Queen => queen_moves::candidate_moves(board, location, piece.team),
        PieceClass::King => king_moves::candidate_moves(board, location, piece.team),
    }
}

/// Slides along each `(d_row, d_col)` ray until blocked, including the
/// blocking square only when it holds an enemy piece. Shared by the three
/// sliding piece kinds.
pub(crate) fn slide_along_rays(
    board: &Board,
    start: &BoardLocation,
    team: PieceTeam,
    rays: &[(i8, i8)],
) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    for (d_row, d_col) in rays {
        let mut cursor = *start;
        while let Ok(next) = offset_board_location(&cursor, *d_row, *d_col) {
            match board.piece_at(&next) {
                None => {
                    moves.push(next);
                    cursor = next;
                }
                Some(blocker) => {
                    if blocker.team != team {
                        moves.push(next);
                    }
                    break;
                }
            }
        }
    }
    moves
}

/// Applies each fixed `(d_row, d_col)` offset once, keeping on-board
/// squares that are empty or enemy-occupied. Shared by knight and king.
pub(crate) fn step_to_offsets(
    board: &Board,
    start: &BoardLocation,
    team: PieceTeam,
    offsets: &[(i8, i8)],
) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    for (d_row, d_col) in offsets {
        if let Ok(next) = offset_board_location(start, *d_row, *d_col) {
            match board.piece_at(&next) {
                None => moves.push(next),
                Some(blocker) if blocker.team != team => moves.push(next),
                Some(_) => {}
            }
        }
    }
    moves
}
