//! Uniform index sampling from a cryptographically secure source.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

// =============================================================================
// Entropy
// =============================================================================

/// Name of the default randomness source, for diagnostics.
pub fn entropy_source() -> &'static str {
    "OS CSPRNG (getrandom)"
}

// =============================================================================
// RNG
// =============================================================================

/// Unbiased sampler over a secure random source.
///
/// The `CryptoRng` bound keeps non-cryptographic generators out at the type
/// level. `Rand::new()` draws from the operating system.
pub struct Rand<R = OsRng> {
    rng: R,
}

impl Rand<OsRng> {
    #[inline]
    pub fn new() -> Self {
        Rand { rng: OsRng }
    }
}

impl Default for Rand<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> Rand<R> {
    #[inline]
    pub fn with_rng(rng: R) -> Self {
        Rand { rng }
    }

    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    pub fn fill(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    /// Returns a value in `[0, n)`, every value equally likely.
    ///
    /// Powers of two are masked. Anything else rejects draws at or above the
    /// largest multiple of `n` that fits in 2^32 so no residue is favoured.
    ///
    /// # Panics
    ///
    /// If `n` is zero.
    pub fn uniform(&mut self, n: u32) -> u32 {
        assert!(n > 0, "uniform: n must be positive");
        if n == 1 {
            return 0;
        }
        if n.is_power_of_two() {
            return self.next_u32() & (n - 1);
        }

        let range = 1u64 << 32;
        let zone = range - range % u64::from(n);
        loop {
            let v = u64::from(self.next_u32());
            if v < zone {
                return (v % u64::from(n)) as u32;
            }
        }
    }

    /// Picks one element of `items` uniformly.
    ///
    /// # Panics
    ///
    /// If `items` is empty or longer than `u32::MAX`.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(items.len() <= u32::MAX as usize, "choose: slice too long");
        &items[self.uniform(items.len() as u32) as usize]
    }
}
