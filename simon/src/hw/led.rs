// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bank of four direction LEDs, lit one-hot.

use embedded_hal::digital::OutputPin;

use crate::game::Direction;

/// Whether the LEDs are driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// Anything that can light the LED for one direction, or none.
pub trait Lamps {
    fn show(&mut self, lit: Option<Direction>);

    #[inline]
    fn clear(&mut self) {
        self.show(None);
    }
}

/// Four LEDs that remember their active level and the last written pattern.
pub struct LedBank<N, E, S, W> {
    north: N,
    east: E,
    south: S,
    west: W,
    active: ActiveLevel,
    mask: u8,
}

impl<N, E, S, W> LedBank<N, E, S, W>
where
    N: OutputPin,
    E: OutputPin,
    S: OutputPin,
    W: OutputPin,
{
    /// Create the bank with every LED off.
    pub fn new(north: N, east: E, south: S, west: W, active: ActiveLevel) -> Self {
        let mut bank = Self {
            north,
            east,
            south,
            west,
            active,
            mask: 0,
        };
        bank.write_mask(0);
        bank
    }

    pub fn active_high(north: N, east: E, south: S, west: W) -> Self {
        Self::new(north, east, south, west, ActiveLevel::High)
    }

    pub fn active_low(north: N, east: E, south: S, west: W) -> Self {
        Self::new(north, east, south, west, ActiveLevel::Low)
    }

    /// Drive every LED from a [`Direction::led_mask`] bitmask.
    pub fn write_mask(&mut self, mask: u8) {
        let active = self.active;
        drive(&mut self.north, active, mask & Direction::North.led_mask() != 0);
        drive(&mut self.east, active, mask & Direction::East.led_mask() != 0);
        drive(&mut self.south, active, mask & Direction::South.led_mask() != 0);
        drive(&mut self.west, active, mask & Direction::West.led_mask() != 0);
        self.mask = mask & 0x0F;
    }

    /// Last pattern written.
    #[inline]
    pub fn mask(&self) -> u8 {
        self.mask
    }

    pub fn free(self) -> (N, E, S, W) {
        (self.north, self.east, self.south, self.west)
    }
}

impl<N, E, S, W> Lamps for LedBank<N, E, S, W>
where
    N: OutputPin,
    E: OutputPin,
    S: OutputPin,
    W: OutputPin,
{
    #[inline]
    fn show(&mut self, lit: Option<Direction>) {
        self.write_mask(lit.map_or(0, Direction::led_mask));
    }
}

fn drive<P: OutputPin>(pin: &mut P, active: ActiveLevel, on: bool) {
    match (active, on) {
        (ActiveLevel::High, true) | (ActiveLevel::Low, false) => pin.set_high().ok(),
        (ActiveLevel::High, false) | (ActiveLevel::Low, true) => pin.set_low().ok(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Output level: `true` = high.
    #[derive(Default)]
    struct Out(bool);

    impl ErrorType for Out {
        type Error = Infallible;
    }

    impl OutputPin for Out {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0 = false;
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0 = true;
            Ok(())
        }
    }

    fn levels(bank: LedBank<Out, Out, Out, Out>) -> [bool; 4] {
        let (n, e, s, w) = bank.free();
        [n.0, e.0, s.0, w.0]
    }

    #[test]
    fn starts_dark() {
        let bank = LedBank::active_high(Out(true), Out(true), Out(true), Out(true));
        assert_eq!(bank.mask(), 0);
        assert_eq!(levels(bank), [false; 4]);
    }

    #[test]
    fn show_lights_exactly_one() {
        let mut bank = LedBank::active_high(Out::default(), Out::default(), Out::default(), Out::default());
        bank.show(Some(Direction::South));
        assert_eq!(bank.mask(), 0x04);
        assert_eq!(levels(bank), [false, false, true, false]);
    }

    #[test]
    fn active_low_inverts_levels() {
        let mut bank = LedBank::active_low(Out::default(), Out::default(), Out::default(), Out::default());
        bank.show(Some(Direction::East));
        assert_eq!(levels(bank), [true, false, true, true]);
    }

    #[test]
    fn clear_turns_everything_off() {
        let mut bank = LedBank::active_high(Out::default(), Out::default(), Out::default(), Out::default());
        bank.write_mask(0xFF);
        assert_eq!(bank.mask(), 0x0F);
        bank.clear();
        assert_eq!(bank.mask(), 0);
        assert_eq!(levels(bank), [false; 4]);
    }
}
