//! The game controller.
//!
//! `GameState` owns the board, turn order, selection state, move history,
//! status flag, and clock, and provides the only entry points that mutate
//! them. A rendering adapter feeds it square clicks and once-per-second
//! ticks and redraws from the public fields after every call. All mutation
//! is synchronous; nothing here blocks or re-enters.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameStatus, PieceClass, PieceRecord, PieceTeam};
use crate::game_state::clock::{GameClock, DEFAULT_CLOCK_SECONDS};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_generator::candidate_moves;

#[derive(Debug, Clone)]
pub struct GameState {
    /// Current board contents.
    pub board: Board,
    /// Side to move; flips exactly once per completed move.
    pub current_player: PieceTeam,
    /// The square whose piece is currently selected, if any.
    pub selected: Option<BoardLocation>,
    /// Candidate destinations for the selected piece. Empty when nothing
    /// is selected.
    pub candidate_moves: Vec<BoardLocation>,
    /// Completed moves since the last reset, in chronological order.
    pub history: Vec<ChessMove>,
    /// Current game status. Only `Playing` and `Checkmate` are produced;
    /// `Checkmate` means a flag fell on the clock.
    pub status: GameStatus,
    /// Countdown clock for both sides.
    pub clock: GameClock,
}

impl GameState {
    /// Fresh game: standard starting position, white to move, both clocks
    /// at `clock_seconds`, clock not yet started.
    pub fn new(clock_seconds: u32) -> Self {
        GameState {
            board: Board::standard_setup(),
            current_player: PieceTeam::White,
            selected: None,
            candidate_moves: Vec::new(),
            history: Vec::new(),
            status: GameStatus::Playing,
            clock: GameClock::new(clock_seconds),
        }
    }

    /// The single interaction entry point, called once per square click.
    ///
    /// Behaviors in precedence order:
    /// 1. clicking the selected square deselects it;
    /// 2. clicking one of the current player's pieces selects it and
    ///    computes its candidate destinations (replacing any previous
    ///    selection);
    /// 3. clicking a candidate destination of the selection executes the
    ///    move;
    /// 4. anything else (empty square, enemy piece with nothing selected,
    ///    off-board coordinates) is ignored.
    pub fn select_square(&mut self, location: BoardLocation) {
        if self.selected == Some(location) {
            self.clear_selection();
            return;
        }

        if let Some(piece) = self.board.piece_at(&location) {
            if piece.team == self.current_player {
                self.selected = Some(location);
                self.candidate_moves = candidate_moves(&self.board, &location);
                return;
            }
        }

        if let Some(from) = self.selected {
            if self.candidate_moves.contains(&location) {
                self.execute_move(from, location);
            }
        }
    }

    /// Executes a move the selection machine has already vetted: captures
    /// whatever stands on `to`, promotes a pawn landing on its far rank to
    /// a queen, records the move, and passes the turn.
    fn execute_move(&mut self, from: BoardLocation, to: BoardLocation) {
        let Some(piece) = self.board.piece_at(&from) else {
            return;
        };
        let captured = self.board.piece_at(&to);

        let landed =
            if piece.class == PieceClass::Pawn && to.0 == piece.team.promotion_row() {
                PieceRecord::new(PieceClass::Queen, piece.team)
            } else {
                piece
            };
        self.board.set_piece(&to, Some(landed));
        self.board.set_piece(&from, None);

        self.history.push(ChessMove {
            from,
            to,
            piece,
            captured,
        });
        self.current_player = self.current_player.opposite();
        self.clear_selection();
    }

    /// Advances the clock by one second for the side to move. Called by
    /// the adapter's periodic tick source; inert once a flag has fallen,
    /// even if the running flag is still set.
    pub fn on_tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.clock.on_tick(self.current_player);
        if self.clock.flag_fallen() {
            self.status = GameStatus::Checkmate;
            self.clock.pause();
        }
    }

    /// Marks the game started and sets the clock running.
    pub fn start_clock(&mut self) {
        self.clock.start();
    }

    /// Pauses the clock; remaining time is retained.
    pub fn pause_clock(&mut self) {
        self.clock.pause();
    }

    /// Resumes a paused clock.
    pub fn resume_clock(&mut self) {
        self.clock.resume();
    }

    /// Returns the game to its initial state: standard board, empty
    /// history, white to move, clocks restored, selection cleared.
    pub fn reset(&mut self) {
        self.board = Board::standard_setup();
        self.current_player = PieceTeam::White;
        self.clear_selection();
        self.history.clear();
        self.status = GameStatus::Playing;
        self.clock.reset();
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.candidate_moves.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(DEFAULT_CLOCK_SECONDS)
    }
}
