//! The 8x8 mailbox board.
//!
//! Row-major grid of optional piece records: row 0 is rank 8, column 0 is
//! file 'a'. All reads are bounds-checked so off-board probes from move
//! generation degrade to "empty" lookups instead of panicking.

use crate::board_location::{location_in_bounds, BoardLocation};
use crate::game_state::chess_types::{PieceClass, PieceRecord, PieceTeam};

/// Back rank layout shared by both teams, from file 'a' to file 'h'.
const BACK_RANK: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

/// An 8x8 ordered grid of squares, each empty or holding one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<PieceRecord>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces on it.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates a board in the standard chess starting position: per team,
    /// pawns on the second rank and the back rank in canonical order
    /// (rook, knight, bishop, queen, king, bishop, knight, rook).
    pub fn standard_setup() -> Self {
        let mut board = Board::empty();
        for col in 0..8 {
            board.squares[0][col] = Some(PieceRecord::new(BACK_RANK[col], PieceTeam::Black));
            board.squares[1][col] = Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Black));
            board.squares[6][col] = Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::White));
            board.squares[7][col] = Some(PieceRecord::new(BACK_RANK[col], PieceTeam::White));
        }
        board
    }

    /// Returns the piece at a location, or `None` for empty or off-board
    /// locations.
    #[inline]
    pub fn piece_at(&self, location: &BoardLocation) -> Option<PieceRecord> {
        if !location_in_bounds(location) {
            return None;
        }
        self.squares[location.0 as usize][location.1 as usize]
    }

    /// Returns true when the location is on the board and empty.
    #[inline]
    pub fn is_empty_square(&self, location: &BoardLocation) -> bool {
        location_in_bounds(location) && self.piece_at(location).is_none()
    }

    /// Places (or clears, with `None`) the contents of a square.
    /// Off-board locations are ignored.
    pub fn set_piece(&mut self, location: &BoardLocation, piece: Option<PieceRecord>) {
        if location_in_bounds(location) {
            self.squares[location.0 as usize][location.1 as usize] = piece;
        }
    }

    /// Iterates over every occupied square as `(location, piece)` pairs in
    /// row-major order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (BoardLocation, PieceRecord)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(col, square)| {
                square.map(|piece| ((row as i8, col as i8), piece))
            })
        })
    }

    /// Counts pieces matching a team and class. Test and display helper.
    pub fn count_pieces(&self, team: PieceTeam, class: PieceClass) -> usize {
        self.occupied_squares()
            .filter(|(_, piece)| piece.team == team && piece.class == class)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard_setup()
    }
}
