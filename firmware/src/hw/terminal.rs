// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Character display rendered on an ANSI terminal.
//!
//! Stands in for a 16x2 character LCD: cell positions 1..=16 map to row 1, 17..=32 to row 2.

use core::fmt::Write;

use simon::drivers::CharDisplay;
use stm32f7xx_hal::serial::Instance;

use crate::hw::Usart;

const COLUMNS: u8 = 16;

pub struct TerminalDisplay<U: Instance> {
    usart: Usart<U>,
}

impl<U: Instance> TerminalDisplay<U> {
    pub fn new(usart: Usart<U>) -> Self {
        Self { usart }
    }

    pub fn free(self) -> Usart<U> {
        self.usart
    }
}

impl<U: Instance> CharDisplay for TerminalDisplay<U> {
    fn clear(&mut self) {
        // Erase screen, cursor home.
        self.usart.write_str("\x1b[2J\x1b[H");
    }

    fn write_str_at(&mut self, position: u8, text: &str) {
        let cell = position.saturating_sub(1);
        let row = cell / COLUMNS + 1;
        let col = cell % COLUMNS + 1;
        let _ = write!(self.usart, "\x1b[{};{}H", row, col);

        // Wrap onto the second row the way the LCD does.
        for (i, c) in text.chars().enumerate() {
            if (cell as usize + i) == COLUMNS as usize {
                self.usart.write_str("\x1b[2;1H");
            }
            self.write_char(c);
        }
    }

    fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.usart.write_str(c.encode_utf8(&mut buf));
    }
}
