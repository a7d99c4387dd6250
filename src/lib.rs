//! Crate root module declarations for the Pocket Chess board engine.
//!
//! This file exposes all top-level subsystems (game state, per-piece move
//! generation, coordinate utilities, and rendering) so binaries, tests,
//! and external tooling can import stable module paths.
//!
//! The engine is deliberately casual: move generation is pseudo-legal
//! (no check detection, castling, or en passant), pawns always promote
//! to queens, and the only terminal condition is a flag fall on the
//! countdown clock.

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod clock;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}

pub mod board_location;
pub mod errors;
