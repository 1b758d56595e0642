// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simon game state machine.
//!
//! The engine owns every collaborator and runs the whole game from one cooperative loop. Time only
//! advances through [`TickWait`]; buttons are polled, never interrupt-driven.
//!
//! ```text
//! Idle --press--> Playback --> Listening --all matched--> RoundWon --> Playback
//!                                  |                          |
//!                                  +--mismatch--> RoundLost   +--score == threshold--> GameWon
//!                                                    |
//!                                                    +--> Idle
//! ```
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut engine = GameEngine::new(config, &TICKS, buttons, leds, tone, display, random, log)?;
//! engine.run();
//! ```

use core::fmt::Write;

use crate::drivers::display::{msg, score_digit};
use crate::drivers::{CharDisplay, SymbolSource};
use crate::game::{ConfigError, Direction, GameConfig, RoundSequence};
use crate::hw::{Buttons, Lamps, TickWait, Voice};

/// Where the game is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Waiting for any button to start a game.
    Idle,
    /// Replaying the round's sequence.
    Playback,
    /// Waiting for the player to repeat the sequence.
    Listening,
    /// Sequence fully matched.
    RoundWon,
    /// Player pressed the wrong button.
    RoundLost,
    /// Win threshold reached. Terminal.
    GameWon,
}

/// Per-game counters, reset whenever a game ends.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct Session {
    round: usize,
    score: u8,
    /// Symbols of the current sequence the player has reproduced so far.
    matched: usize,
}

/// Game state machine and the hardware it drives.
pub struct GameEngine<T, B, L, V, D, R, W> {
    config: GameConfig,

    ticks: T,
    buttons: B,
    leds: L,
    tone: V,
    display: D,
    random: R,
    /// Debug log sink.
    log: W,

    sequence: RoundSequence,
    session: Session,
    phase: Phase,

    /// Polls spent in `Idle`, mixed into the random source when a game starts.
    idle_polls: u32,
    /// Set after a loss; `Idle` ignores presses until every button reads released.
    await_release: bool,
}

impl<T, B, L, V, D, R, W> GameEngine<T, B, L, V, D, R, W>
where
    T: TickWait,
    B: Buttons,
    L: Lamps,
    V: Voice,
    D: CharDisplay,
    R: SymbolSource,
    W: Write,
{
    /// Validate `config` and take ownership of the collaborators. Nothing is driven until
    /// [`start`](Self::start).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: GameConfig,
        ticks: T,
        buttons: B,
        leds: L,
        tone: V,
        display: D,
        random: R,
        log: W,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ticks,
            buttons,
            leds,
            tone,
            display,
            random,
            log,
            sequence: RoundSequence::new(),
            session: Session::default(),
            phase: Phase::Idle,
            idle_polls: 0,
            await_release: false,
        })
    }

    /// Show the banner with LEDs dark and the tone silent, and wait for a first press.
    pub fn start(&mut self) {
        self.present(None);
        self.display.clear();
        self.display.write_str_at(msg::BANNER_POS, msg::BANNER);
        self.reset();
        self.phase = Phase::Idle;
        self.await_release = false;
        let _ = write!(self.log, "simon: ready\r\n");
    }

    /// Run until the game is won. Never returns otherwise.
    pub fn run(&mut self) {
        self.start();
        while self.step() != Phase::GameWon {}
    }

    /// Perform one state transition and return the new phase.
    ///
    /// `Idle` and `Listening` poll the buttons once per call; `Playback` plays the whole sequence.
    pub fn step(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Idle => self.idle(),
            Phase::Playback => self.playback(),
            Phase::Listening => self.listen(),
            Phase::RoundWon => self.round_won(),
            Phase::RoundLost => self.round_lost(),
            Phase::GameWon => Phase::GameWon,
        };
        self.phase
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds won since the last reset.
    #[inline]
    pub fn score(&self) -> u8 {
        self.session.score
    }

    /// 0-based index of the current round.
    #[inline]
    pub fn round(&self) -> usize {
        self.session.round
    }

    /// Symbols matched so far while listening.
    #[inline]
    pub fn matched(&self) -> usize {
        self.session.matched
    }

    #[inline]
    pub fn sequence(&self) -> &RoundSequence {
        &self.sequence
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    #[inline]
    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    #[inline]
    pub fn leds(&self) -> &L {
        &self.leds
    }

    #[inline]
    pub fn tone(&self) -> &V {
        &self.tone
    }

    #[inline]
    pub fn display(&self) -> &D {
        &self.display
    }

    #[inline]
    pub fn log(&self) -> &W {
        &self.log
    }

    fn idle(&mut self) -> Phase {
        if self.buttons.sample().is_none() {
            self.idle_polls = self.idle_polls.wrapping_add(1);
            self.await_release = false;
            return Phase::Idle;
        }
        // The losing press may still be held.
        if self.await_release {
            return Phase::Idle;
        }

        self.random.reseed(self.idle_polls);
        self.reset();
        self.show_score();
        self.grow_sequence();
        let _ = write!(self.log, "simon: game start\r\n");
        Phase::Playback
    }

    fn playback(&mut self) -> Phase {
        let _ = write!(
            self.log,
            "simon: round {} plays {} symbols\r\n",
            self.session.round + 1,
            self.sequence.len()
        );

        let (hold, gap) = (self.config.hold_ticks, self.config.gap_ticks);
        for i in 0..self.sequence.len() {
            let Some(symbol) = self.sequence.get(i) else {
                break;
            };
            self.ticks.wait_ticks(gap);
            self.present(Some(symbol));
            self.ticks.wait_ticks(hold);
            self.present(None);
        }
        self.ticks.wait_ticks(gap);

        self.session.matched = 0;
        Phase::Listening
    }

    fn listen(&mut self) -> Phase {
        let Some(pressed) = self.buttons.sample() else {
            return Phase::Listening;
        };
        let Some(expected) = self.sequence.get(self.session.matched) else {
            return Phase::RoundWon;
        };

        if pressed != expected {
            let _ = write!(
                self.log,
                "simon: expected {:?}, got {:?}\r\n",
                expected, pressed
            );
            return Phase::RoundLost;
        }

        // Echo the press for two tick widths.
        self.ticks.wait_tick();
        self.present(Some(pressed));
        self.ticks.wait_tick();
        self.present(None);

        self.session.matched += 1;
        if self.session.matched == self.sequence.len() {
            Phase::RoundWon
        } else {
            Phase::Listening
        }
    }

    fn round_won(&mut self) -> Phase {
        self.present(None);
        self.session.score = self.session.score.saturating_add(1);
        self.session.round += 1;
        self.session.matched = 0;

        self.ticks.wait_tick();
        self.show_score();
        self.ticks.wait_tick();
        let _ = write!(self.log, "simon: round won, score {}\r\n", self.session.score);

        if self.session.score >= self.config.win_threshold {
            self.display.clear();
            self.display.write_str_at(msg::STATUS_POS, msg::WIN);
            let _ = write!(self.log, "simon: game won\r\n");
            self.reset();
            return Phase::GameWon;
        }

        self.grow_sequence();
        Phase::Playback
    }

    fn round_lost(&mut self) -> Phase {
        self.present(None);
        self.display.clear();
        self.display.write_str_at(msg::STATUS_POS, msg::LOST);
        self.ticks.wait_ticks(self.config.loss_hold_ticks);

        let _ = write!(
            self.log,
            "simon: lost in round {} with score {}\r\n",
            self.session.round + 1,
            self.session.score
        );
        self.reset();
        self.await_release = true;
        Phase::Idle
    }

    /// Light and sound one symbol, or go dark and silent.
    fn present(&mut self, symbol: Option<Direction>) {
        self.leds.show(symbol);
        self.tone
            .set_frequency(symbol.map_or(0.0, Direction::tone_hz));
    }

    fn show_score(&mut self) {
        self.display.clear();
        self.display
            .write_str_at(msg::STATUS_POS, msg::SCORE_LABEL);
        self.display.write_char(score_digit(self.session.score));
    }

    /// Extend the sequence to this round's length. Earlier symbols stay as they were.
    fn grow_sequence(&mut self) {
        let len = self.config.round_length(self.session.round);
        self.sequence.extend_to(len, &mut self.random);
    }

    fn reset(&mut self) {
        self.sequence.clear();
        self.session = Session::default();
    }
}
