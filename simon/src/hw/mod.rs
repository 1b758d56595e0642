// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Abstractions
//!
//! MCU-facing building blocks. Everything here is reached through `embedded-hal` traits or a small
//! crate-local trait so the board package only supplies concrete pins and timers.
//!
//! ## Modules
//!
//! - [`tick`] - Interrupt-fed cooperative tick source.
//! - [`tone`] - Square-wave tone generator over a compare-match timer.
//! - [`input`] - Four active-low buttons sampled as one reading.
//! - [`led`] - Four one-hot LEDs.

pub mod input;
pub mod led;
pub mod tick;
pub mod tone;

pub use input::{Buttons, InputSampler};
pub use led::{ActiveLevel, Lamps, LedBank};
pub use tick::{TickSource, TickWait};
pub use tone::{ToneClock, ToneGenerator, ToneTimer, Voice};
