// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Random symbol source.

use rand::{Rng, RngCore, SeedableRng};

/// Yields one value in `0..4` per new sequence symbol.
pub trait SymbolSource {
    fn next_symbol(&mut self) -> u8;

    /// Mix in some entropy. Called once when a game starts.
    fn reseed(&mut self, _entropy: u32) {}
}

/// [`SymbolSource`] over any seedable `rand` generator.
pub struct RngSymbols<R> {
    rng: R,
}

impl<R: RngCore + SeedableRng> RngSymbols<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }

    pub fn free(self) -> R {
        self.rng
    }
}

impl<R: RngCore + SeedableRng> SymbolSource for RngSymbols<R> {
    #[inline]
    fn next_symbol(&mut self) -> u8 {
        self.rng.random_range(0..4)
    }

    fn reseed(&mut self, entropy: u32) {
        let seed = self.rng.next_u64() ^ u64::from(entropy);
        self.rng = R::seed_from_u64(seed);
    }
}
