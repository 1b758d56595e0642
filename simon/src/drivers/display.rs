// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Character display contract.
//!
//! The display is a 16x2 character panel addressed by 1-based cell position: 1..=16 is the top
//! row, 17..=32 the bottom row.

/// Opaque text sink.
pub trait CharDisplay {
    /// Blank the panel and home the cursor.
    fn clear(&mut self);

    /// Write `text` starting at cell `position`, leaving the cursor after it.
    fn write_str_at(&mut self, position: u8, text: &str);

    /// Write one character at the cursor.
    fn write_char(&mut self, c: char);
}

/// Fixed messages and where they go.
pub mod msg {
    pub const BANNER_POS: u8 = 6;
    pub const BANNER: &str = "SIMON       PRESS TO START";

    pub const STATUS_POS: u8 = 1;
    pub const SCORE_LABEL: &str = "Score: ";
    pub const LOST: &str = "Wrong! You lost!";
    pub const WIN: &str = "You Win!";
}

/// Single ASCII digit for a score. Scores above 9 pin to `'9'`.
#[inline]
pub fn score_digit(score: u8) -> char {
    (b'0' + score.min(9)) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_digits() {
        assert_eq!(score_digit(0), '0');
        assert_eq!(score_digit(6), '6');
        assert_eq!(score_digit(9), '9');
        assert_eq!(score_digit(42), '9');
    }

    #[test]
    fn messages_fit_the_panel() {
        assert!(msg::LOST.len() <= 16);
        assert!(msg::BANNER_POS as usize + msg::BANNER.len() - 1 <= 32);
    }
}
