// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Four-button input sampler.
//!
//! Each button pulls its line low when pressed. A sample reads all four lines once and resolves
//! simultaneous presses by the fixed North > East > South > West priority of
//! [`Direction::from_input_mask`]. There is no debounce filter; the game loop's polling rate is the
//! only smoothing.

use embedded_hal::digital::InputPin;

use crate::game::Direction;

/// Anything that yields at most one pressed direction per poll.
pub trait Buttons {
    fn sample(&mut self) -> Option<Direction>;
}

/// Samples four active-low input pins.
pub struct InputSampler<N, E, S, W> {
    north: N,
    east: E,
    south: S,
    west: W,
}

impl<N, E, S, W> InputSampler<N, E, S, W>
where
    N: InputPin,
    E: InputPin,
    S: InputPin,
    W: InputPin,
{
    pub fn new(north: N, east: E, south: S, west: W) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// All currently asserted lines as a [`Direction::input_mask`] bitmask.
    pub fn raw_mask(&mut self) -> u8 {
        let mut mask = 0;
        if asserted(&mut self.north) {
            mask |= Direction::North.input_mask();
        }
        if asserted(&mut self.east) {
            mask |= Direction::East.input_mask();
        }
        if asserted(&mut self.south) {
            mask |= Direction::South.input_mask();
        }
        if asserted(&mut self.west) {
            mask |= Direction::West.input_mask();
        }
        mask
    }

    /// The highest-priority pressed button, if any.
    #[inline]
    pub fn sample(&mut self) -> Option<Direction> {
        Direction::from_input_mask(self.raw_mask())
    }

    pub fn free(self) -> (N, E, S, W) {
        (self.north, self.east, self.south, self.west)
    }
}

impl<N, E, S, W> Buttons for InputSampler<N, E, S, W>
where
    N: InputPin,
    E: InputPin,
    S: InputPin,
    W: InputPin,
{
    #[inline]
    fn sample(&mut self) -> Option<Direction> {
        InputSampler::sample(self)
    }
}

/// Active-low read. A line that can't be read counts as released.
#[inline]
fn asserted<P: InputPin>(pin: &mut P) -> bool {
    pin.is_low().unwrap_or(false)
}
