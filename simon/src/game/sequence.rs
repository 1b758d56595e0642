// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed-capacity round sequence.
//!
//! A sequence only ever grows at the tail, so each round's sequence is the previous round's with new
//! symbols appended. It is emptied when a game ends.

use crate::drivers::SymbolSource;
use crate::game::Direction;

/// Longest sequence a round can ask for.
pub const SEQUENCE_CAPACITY: usize = 9;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundSequence {
    symbols: [Direction; SEQUENCE_CAPACITY],
    len: usize,
}

impl RoundSequence {
    pub const fn new() -> Self {
        Self {
            symbols: [Direction::North; SEQUENCE_CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        SEQUENCE_CAPACITY
    }

    #[inline]
    pub fn as_slice(&self) -> &[Direction] {
        &self.symbols[..self.len]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Direction> {
        self.as_slice().get(index).copied()
    }

    /// Append one symbol. Returns `false` if the sequence is full.
    pub fn push(&mut self, symbol: Direction) -> bool {
        if self.len == SEQUENCE_CAPACITY {
            return false;
        }
        self.symbols[self.len] = symbol;
        self.len += 1;
        true
    }

    /// Draw new trailing symbols until the sequence holds `len` (capped at capacity).
    ///
    /// Existing symbols are never touched. Returns how many symbols were drawn.
    pub fn extend_to<R: SymbolSource>(&mut self, len: usize, source: &mut R) -> usize {
        let target = len.min(SEQUENCE_CAPACITY);
        let mut drawn = 0;
        while self.len < target {
            self.push(Direction::from_random(source.next_symbol()));
            drawn += 1;
        }
        drawn
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for RoundSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting(u8);

    impl SymbolSource for Counting {
        fn next_symbol(&mut self) -> u8 {
            let v = self.0;
            self.0 = self.0.wrapping_add(1);
            v % 4
        }
    }

    #[test]
    fn starts_empty() {
        let seq = RoundSequence::new();
        assert!(seq.is_empty());
        assert!(seq.as_slice().is_empty());
        assert_eq!(seq.get(0), None);
    }

    #[test]
    fn extend_keeps_prefix() {
        let mut source = Counting(0);
        let mut seq = RoundSequence::new();

        assert_eq!(seq.extend_to(4, &mut source), 4);
        let before: Vec<Direction> = seq.as_slice().to_vec();
        assert_eq!(
            before,
            [Direction::North, Direction::East, Direction::South, Direction::West]
        );

        assert_eq!(seq.extend_to(5, &mut source), 1);
        assert_eq!(&seq.as_slice()[..4], &before[..]);
        assert_eq!(seq.get(4), Some(Direction::North));
    }

    #[test]
    fn extend_to_shorter_length_is_a_no_op() {
        let mut source = Counting(0);
        let mut seq = RoundSequence::new();
        seq.extend_to(5, &mut source);
        assert_eq!(seq.extend_to(3, &mut source), 0);
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn capacity_is_respected() {
        let mut source = Counting(0);
        let mut seq = RoundSequence::new();
        assert_eq!(seq.extend_to(20, &mut source), SEQUENCE_CAPACITY);
        assert_eq!(seq.len(), SEQUENCE_CAPACITY);
        assert!(!seq.push(Direction::West));
    }

    #[test]
    fn clear_empties() {
        let mut source = Counting(1);
        let mut seq = RoundSequence::new();
        seq.extend_to(3, &mut source);
        seq.clear();
        assert!(seq.is_empty());
    }
}
