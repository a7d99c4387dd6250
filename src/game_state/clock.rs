//! Dual countdown clock.
//!
//! Bookkeeping only: the clock never schedules anything itself. An external
//! tick source (the adapter) calls in once per elapsed second, and the
//! engine decides which side's time to burn. Pausing clears `running` and
//! suppresses decrements; resuming continues from the retained values.

use crate::game_state::chess_types::PieceTeam;

/// Default starting allotment per side, in seconds (five minutes).
pub const DEFAULT_CLOCK_SECONDS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    /// Remaining whole seconds for white.
    pub white_seconds: u32,
    /// Remaining whole seconds for black.
    pub black_seconds: u32,
    /// Ticks only decrement while this is set. Toggled by pause/resume.
    pub running: bool,
    /// Set once the game has been started; never ticks before then.
    pub started: bool,
    starting_seconds: u32,
}

impl GameClock {
    pub fn new(starting_seconds: u32) -> Self {
        GameClock {
            white_seconds: starting_seconds,
            black_seconds: starting_seconds,
            running: false,
            started: false,
            starting_seconds,
        }
    }

    /// Remaining seconds for one side.
    #[inline]
    pub fn remaining(&self, team: PieceTeam) -> u32 {
        match team {
            PieceTeam::White => self.white_seconds,
            PieceTeam::Black => self.black_seconds,
        }
    }

    /// True once either side has exhausted its time.
    #[inline]
    pub fn flag_fallen(&self) -> bool {
        self.white_seconds == 0 || self.black_seconds == 0
    }

    /// Burns one second from `side` if the clock is started and running,
    /// floored at zero. Inert otherwise.
    pub fn on_tick(&mut self, side: PieceTeam) {
        if !(self.running && self.started) {
            return;
        }
        let remaining = match side {
            PieceTeam::White => &mut self.white_seconds,
            PieceTeam::Black => &mut self.black_seconds,
        };
        *remaining = remaining.saturating_sub(1);
    }

    /// Marks the game started and begins running.
    pub fn start(&mut self) {
        self.started = true;
        self.running = true;
    }

    /// Suppresses further ticks; remaining time is retained.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resumes ticking from the retained values. Ignored before `start`.
    pub fn resume(&mut self) {
        if self.started {
            self.running = true;
        }
    }

    /// Restores both sides to the configured starting value and clears the
    /// running and started flags.
    pub fn reset(&mut self) {
        *self = GameClock::new(self.starting_seconds);
    }

    /// Formats a side's remaining time as `m:ss`.
    pub fn format_remaining(&self, team: PieceTeam) -> String {
        let seconds = self.remaining(team);
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }
}

impl Default for GameClock {
    fn default() -> Self {
        GameClock::new(DEFAULT_CLOCK_SECONDS)
    }
}
