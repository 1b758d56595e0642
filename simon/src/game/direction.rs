// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The four game symbols.
//!
//! Each direction owns one button, one LED and one tone. The mapping lives in a single table so the
//! input priority and output patterns can't drift apart.

/// One of the four buttons/LEDs/tones.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

struct Voicing {
    led_mask: u8,
    input_mask: u8,
    tone_hz: f32,
}

/// Indexed by `Direction as usize`.
const TABLE: [Voicing; 4] = [
    Voicing {
        led_mask: 0x01,
        input_mask: 0x01,
        tone_hz: 523.251,
    },
    Voicing {
        led_mask: 0x02,
        input_mask: 0x02,
        tone_hz: 329.63,
    },
    Voicing {
        led_mask: 0x04,
        input_mask: 0x04,
        tone_hz: 392.00,
    },
    Voicing {
        led_mask: 0x08,
        input_mask: 0x08,
        tone_hz: 493.88,
    },
];

impl Direction {
    /// All directions, in input priority order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Map a random-source value onto a direction. Values past 3 wrap.
    #[inline]
    pub fn from_random(value: u8) -> Self {
        Self::ALL[(value % 4) as usize]
    }

    #[inline]
    pub fn led_mask(self) -> u8 {
        TABLE[self.index()].led_mask
    }

    #[inline]
    pub fn input_mask(self) -> u8 {
        TABLE[self.index()].input_mask
    }

    #[inline]
    pub fn tone_hz(self) -> f32 {
        TABLE[self.index()].tone_hz
    }

    /// First asserted direction in North, East, South, West order.
    pub fn from_input_mask(mask: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| mask & dir.input_mask() != 0)
    }
}
