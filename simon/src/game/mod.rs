// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Game Logic
//!
//! The round-based Simon state machine and the data it works on.
//!
//! ## Modules
//!
//! - [`direction`] - The four symbols and their LED/tone/button table.
//! - [`sequence`] - Fixed-capacity growing symbol sequence.
//! - [`config`] - Round-length table, timing, and win threshold.
//! - [`engine`] - The game state machine.

pub mod config;
pub mod direction;
pub mod engine;
pub mod sequence;

pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, Phase};
pub use sequence::{RoundSequence, SEQUENCE_CAPACITY};
