//! Terminal-oriented Unicode board renderers.
//!
//! One engine, swappable views: every renderer reads the same `GameState`
//! surface (board, selection, candidates, clocks) and produces a string
//! for its medium. The plain renderer here serves tests, logs, and dumb
//! terminals; the binary ships an ANSI color renderer over the same trait.

use crate::game_state::chess_types::{PieceClass, PieceRecord, PieceTeam};
use crate::game_state::game_state::GameState;

/// A read-only view over the engine. Renderers never mutate game state.
pub trait BoardRenderer {
    fn render(&self, game: &GameState) -> String;
}

/// Plain Unicode grid with file and rank labels, `·` for empty squares.
pub struct TextRenderer;

impl BoardRenderer for TextRenderer {
    fn render(&self, game: &GameState) -> String {
        let mut out = String::new();

        out.push_str("  a b c d e f g h\n");

        for row in 0..8i8 {
            let rank_char = char::from(b'8' - row as u8);
            out.push(rank_char);
            out.push(' ');

            for col in 0..8i8 {
                match game.board.piece_at(&(row, col)) {
                    Some(piece) => out.push(piece_to_unicode(&piece)),
                    None => out.push('·'),
                }

                if col < 7 {
                    out.push(' ');
                }
            }

            out.push(' ');
            out.push(rank_char);
            out.push('\n');
        }

        out.push_str("  a b c d e f g h");

        out
    }
}

/// Unicode figurine for a piece.
pub fn piece_to_unicode(piece: &PieceRecord) -> char {
    match (piece.team, piece.class) {
        (PieceTeam::White, PieceClass::Pawn) => '♙',
        (PieceTeam::White, PieceClass::Knight) => '♘',
        (PieceTeam::White, PieceClass::Bishop) => '♗',
        (PieceTeam::White, PieceClass::Rook) => '♖',
        (PieceTeam::White, PieceClass::Queen) => '♕',
        (PieceTeam::White, PieceClass::King) => '♔',
        (PieceTeam::Black, PieceClass::Pawn) => '♟',
        (PieceTeam::Black, PieceClass::Knight) => '♞',
        (PieceTeam::Black, PieceClass::Bishop) => '♝',
        (PieceTeam::Black, PieceClass::Rook) => '♜',
        (PieceTeam::Black, PieceClass::Queen) => '♛',
        (PieceTeam::Black, PieceClass::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardRenderer, TextRenderer};
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_renders_all_ranks() {
        let game = GameState::default();
        let rendered = TextRenderer.render(&game);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert!(lines[1].starts_with("8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
        assert!(lines[8].starts_with("1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖"));
        assert_eq!(rendered.matches('·').count(), 32);
    }
}
