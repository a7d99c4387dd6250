//! Interactive terminal adapter for the board engine.
//!
//! Owns one `GameState` on a single logical thread. A ticker thread sends
//! a once-per-second tick and a reader thread forwards stdin lines; both
//! feed the same channel, so clock ticks and square clicks are handled
//! strictly one at a time and the engine never needs locking.
//!
//! Each whitespace-separated token on a line is one square click, so
//! `e2 e4` selects the pawn and moves it in a single line. The remaining
//! words are lifecycle commands (`start`, `pause`, `resume`, `reset`,
//! `history`, `quit`).

use std::io::{self, BufRead};
use std::sync::mpsc::channel;
use std::thread;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use pocket_chess::game_state::chess_types::{GameStatus, PieceTeam};
use pocket_chess::game_state::clock::DEFAULT_CLOCK_SECONDS;
use pocket_chess::game_state::game_state::GameState;
use pocket_chess::utils::algebraic::algebraic_to_location;
use pocket_chess::utils::render_game_state::{piece_to_unicode, BoardRenderer, TextRenderer};

#[derive(Parser, Debug)]
#[command(name = "pocket_chess", about = "Casual chess with countdown clocks")]
struct Cli {
    /// Starting clock allotment per side, in seconds.
    #[arg(long, default_value_t = DEFAULT_CLOCK_SECONDS)]
    clock_seconds: u32,

    /// Render without ANSI colors (plain Unicode grid).
    #[arg(long)]
    plain: bool,
}

enum Event {
    Tick,
    Input(String),
}

fn main() {
    let args = Cli::parse();

    let mut game = GameState::new(args.clock_seconds);
    let renderer: Box<dyn BoardRenderer> = if args.plain {
        Box::new(TextRenderer)
    } else {
        Box::new(ColorRenderer)
    };

    let (event_tx, event_rx) = channel::<Event>();

    // Periodic tick source, external to the engine. One message per
    // elapsed second; the engine decides whose clock burns.
    let tick_tx = event_tx.clone();
    thread::spawn(move || loop {
        thread::sleep(Duration::from_secs(1));
        if tick_tx.send(Event::Tick).is_err() {
            break;
        }
    });

    // Stdin reader; every line becomes a sequence of clicks/commands.
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(Event::Input(line)).is_err() {
                break;
            }
        }
        // Stdin closed; end the session instead of ticking forever.
        let _ = event_tx.send(Event::Input("quit".to_owned()));
    });

    log_line("new game; type 'start' to run the clocks, 'quit' to leave");
    println!("{}", renderer.render(&game));
    print_status(&game);

    while let Ok(event) = event_rx.recv() {
        match event {
            Event::Tick => {
                let was_playing = game.status == GameStatus::Playing;
                game.on_tick();
                if was_playing && game.status == GameStatus::Checkmate {
                    let loser = if game.clock.white_seconds == 0 {
                        "white"
                    } else {
                        "black"
                    };
                    log_line(&format!("{loser} ran out of time; game over"));
                    print_status(&game);
                }
            }
            Event::Input(line) => {
                let mut quit = false;
                for token in line.split_whitespace() {
                    if !handle_token(&mut game, token) {
                        quit = true;
                        break;
                    }
                }
                if quit {
                    break;
                }
                println!("{}", renderer.render(&game));
                print_status(&game);
            }
        }
    }
}

/// Applies one token to the game. Returns false when the session should end.
fn handle_token(game: &mut GameState, token: &str) -> bool {
    match token {
        "quit" | "exit" => return false,
        "start" => {
            game.start_clock();
            log_line("clock started");
        }
        "pause" => {
            game.pause_clock();
            log_line("clock paused");
        }
        "resume" => {
            game.resume_clock();
            log_line("clock resumed");
        }
        "reset" | "new" => {
            game.reset();
            log_line("new game");
        }
        "history" => {
            if game.history.is_empty() {
                println!("no moves yet");
            }
            for (index, chess_move) in game.history.iter().enumerate() {
                println!("{:>3}. {}", index + 1, chess_move.to_long_algebraic());
            }
        }
        square => match algebraic_to_location(square) {
            Ok(location) => game.select_square(location),
            Err(_) => println!("unrecognized input: {square}"),
        },
    }
    true
}

fn print_status(game: &GameState) {
    let to_move = match game.current_player {
        PieceTeam::White => "white",
        PieceTeam::Black => "black",
    };
    let status = match game.status {
        GameStatus::Playing => "playing",
        GameStatus::Check => "check",
        GameStatus::Checkmate => "game over",
        GameStatus::Stalemate => "stalemate",
    };
    println!(
        "{to_move} to move | {status} | white {} | black {} | moves {}",
        game.clock.format_remaining(PieceTeam::White),
        game.clock.format_remaining(PieceTeam::Black),
        game.history.len()
    );
}

fn log_line(message: &str) {
    println!("[{}] {message}", chrono::Local::now().format("%H:%M:%S"));
}

/// ANSI renderer: same read contract as `TextRenderer`, with the selected
/// square and its candidate destinations highlighted.
struct ColorRenderer;

impl BoardRenderer for ColorRenderer {
    fn render(&self, game: &GameState) -> String {
        let mut out = String::new();

        out.push_str("   a  b  c  d  e  f  g  h\n");

        for row in 0..8i8 {
            let rank_char = char::from(b'8' - row as u8);
            out.push(rank_char);
            out.push(' ');

            for col in 0..8i8 {
                let location = (row, col);
                let glyph = match game.board.piece_at(&location) {
                    Some(piece) => piece_to_unicode(&piece),
                    None => ' ',
                };
                let cell = format!(" {glyph} ");

                let painted = if game.selected == Some(location) {
                    cell.as_str().black().on_bright_blue()
                } else if game.candidate_moves.contains(&location) {
                    cell.as_str().black().on_bright_green()
                } else if (row + col) % 2 == 0 {
                    cell.as_str().black().on_white()
                } else {
                    cell.as_str().white().on_bright_black()
                };
                out.push_str(&painted.to_string());
            }

            out.push(' ');
            out.push(rank_char);
            out.push('\n');
        }

        out.push_str("   a  b  c  d  e  f  g  h");

        out
    }
}
