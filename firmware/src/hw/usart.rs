// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Transmit-only serial port.
//!
//! The board uses two of these: USART2 on the ST-LINK virtual COM port carries the engine's log,
//! and USART3 feeds the [`TerminalDisplay`](crate::hw::TerminalDisplay). Every log line is written
//! with an explicit `"\r\n"` terminator, so a raw terminal shows one event per line.
//!
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

/// TX half of a HAL serial port. The RX half is dropped; the game never reads serial input.
pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    /// Send raw bytes, blocking on each.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            let _ = block!(self.tx.write(b));
        }
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// One log line, CRLF terminated.
    pub fn write_line(&mut self, line: &str) {
        self.write_str(line);
        self.write_bytes(b"\r\n");
    }

    /// Wait for the last byte to leave the shifter, e.g. before parking the core.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }
}

impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
