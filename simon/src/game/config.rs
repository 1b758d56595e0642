// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Game configuration.
//!
//! ```ignore
//! let config = GameConfig::new()
//!     .with_tick_period_ms(40)
//!     .with_round_lengths(&[3, 4, 5, 6]);
//! config.validate()?;
//! ```

use core::fmt;

use crate::game::SEQUENCE_CAPACITY;

/// Sequence length for each round, indexed by round number.
pub const DEFAULT_ROUND_LENGTHS: &[u8] = &[4, 5, 6, 7, 8, 9];

/// Rejected configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    EmptyRoundTable,
    ZeroLengthRound { round: usize },
    RoundTooLong { round: usize, length: u8, capacity: usize },
    /// Each round plays the previous round's sequence plus one symbol.
    NonConsecutiveRound { round: usize, length: u8, previous: u8 },
    /// The score is shown as one digit, so the threshold must be 1..=9.
    WinThresholdOutOfRange(u8),
    /// Winning would need rounds the length table doesn't have.
    WinThresholdPastTable { threshold: u8, rounds: usize },
    ZeroTickPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::EmptyRoundTable => write!(f, "round length table is empty"),
            ConfigError::ZeroLengthRound { round } => write!(f, "round {} has length 0", round),
            ConfigError::RoundTooLong {
                round,
                length,
                capacity,
            } => write!(
                f,
                "round {} wants {} symbols but the sequence holds {}",
                round, length, capacity
            ),
            ConfigError::NonConsecutiveRound {
                round,
                length,
                previous,
            } => write!(
                f,
                "round {} has length {} but must be one longer than {}",
                round, length, previous
            ),
            ConfigError::WinThresholdOutOfRange(n) => {
                write!(f, "win threshold {} is outside 1..=9", n)
            }
            ConfigError::WinThresholdPastTable { threshold, rounds } => write!(
                f,
                "win threshold {} exceeds the {} rounds in the length table",
                threshold, rounds
            ),
            ConfigError::ZeroTickPeriod => write!(f, "tick period is 0 ms"),
        }
    }
}

/// Timing, round-length table, and win threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Milliseconds per game tick.
    pub tick_period_ms: u32,
    round_lengths: &'static [u8],
    /// Rounds won needed to win the game.
    pub win_threshold: u8,
    /// Ticks a symbol stays lit during playback.
    pub hold_ticks: u32,
    /// Dark ticks before each symbol and after the last one.
    pub gap_ticks: u32,
    /// Ticks the failure message is held before returning to idle.
    pub loss_hold_ticks: u32,
}

impl GameConfig {
    pub const fn new() -> Self {
        Self {
            tick_period_ms: 50,
            round_lengths: DEFAULT_ROUND_LENGTHS,
            win_threshold: DEFAULT_ROUND_LENGTHS.len() as u8,
            hold_ticks: 1,
            gap_ticks: 1,
            loss_hold_ticks: 2,
        }
    }

    pub fn with_tick_period_ms(mut self, ms: u32) -> Self {
        self.tick_period_ms = ms;
        self
    }

    /// Replace the round-length table. The win threshold follows the table length.
    pub fn with_round_lengths(mut self, lengths: &'static [u8]) -> Self {
        self.round_lengths = lengths;
        self.win_threshold = lengths.len().min(u8::MAX as usize) as u8;
        self
    }

    pub fn with_win_threshold(mut self, rounds: u8) -> Self {
        self.win_threshold = rounds;
        self
    }

    pub fn with_playback_ticks(mut self, hold: u32, gap: u32) -> Self {
        self.hold_ticks = hold;
        self.gap_ticks = gap;
        self
    }

    pub fn with_loss_hold_ticks(mut self, ticks: u32) -> Self {
        self.loss_hold_ticks = ticks;
        self
    }

    #[inline]
    pub fn round_lengths(&self) -> &'static [u8] {
        self.round_lengths
    }

    /// Sequence length for `round`. Rounds past the end of the table reuse its last entry.
    pub fn round_length(&self, round: usize) -> usize {
        let last = self.round_lengths.len().saturating_sub(1);
        self.round_lengths
            .get(round.min(last))
            .map_or(0, |&len| len as usize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.round_lengths.is_empty() {
            return Err(ConfigError::EmptyRoundTable);
        }

        let mut prev: Option<u8> = None;
        for (round, &length) in self.round_lengths.iter().enumerate() {
            if length == 0 {
                return Err(ConfigError::ZeroLengthRound { round });
            }
            if length as usize > SEQUENCE_CAPACITY {
                return Err(ConfigError::RoundTooLong {
                    round,
                    length,
                    capacity: SEQUENCE_CAPACITY,
                });
            }
            if let Some(previous) = prev {
                if length as usize != previous as usize + 1 {
                    return Err(ConfigError::NonConsecutiveRound {
                        round,
                        length,
                        previous,
                    });
                }
            }
            prev = Some(length);
        }

        if !(1..=9).contains(&self.win_threshold) {
            return Err(ConfigError::WinThresholdOutOfRange(self.win_threshold));
        }
        if self.win_threshold as usize > self.round_lengths.len() {
            return Err(ConfigError::WinThresholdPastTable {
                threshold: self.win_threshold,
                rounds: self.round_lengths.len(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
