// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board-level wrappers around the STM32F767ZI peripherals the game uses.

pub mod gpio;
pub mod pins;
pub mod terminal;
pub mod tone_timer;
pub mod usart;

pub use gpio::{Button, Lamp};
pub use pins::BoardPins;
pub use terminal::TerminalDisplay;
pub use tone_timer::TimerTone;
pub use usart::Usart;
