// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Collaborator Contracts
//!
//! Devices the game talks to but does not own the implementation of.
//!
//! ## Existing drivers
//!
//! - [`display`] – character display sink and the game's fixed messages
//! - [`random`] – source of symbols in `0..4`, with an adapter over `rand` generators

pub mod display;
pub mod random;

pub use display::CharDisplay;
pub use random::{RngSymbols, SymbolSource};
