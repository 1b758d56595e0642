// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Simon Firmware Core
//!
//! This crate contains the hardware-agnostic core of the Simon reflex-memory game: the millisecond
//! tick source, the square-wave tone generator, the button sampler, and the round-based game state
//! machine. Board bring-up for the STM32F767ZI lives in the `simon-firmware` package.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Tick source, tone generator, button sampler, LED bank |
//! | [`drivers`] | Collaborator contracts for the character display and the random source |
//! | [`game`] | Direction table, round sequence, configuration, game engine |
//!
//! ## Getting Started
//!
//! Run the host-side tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board (the firmware package pins its own target):
//!
//! ```bash
//! cd firmware && cargo run --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod drivers;
pub mod game;
pub mod hw;
