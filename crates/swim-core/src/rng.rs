//! Reproducible 48-bit linear-congruential RNG.
//!
//! # Determinism strategy
//!
//! Trace comparison across implementations requires the exact draw stream
//! of `java.util.Random`, so the generator is reproduced bit for bit:
//!
//!   state₀   = (seed XOR 0x5DEECE66D) & (2⁴⁸ − 1)
//!   stateₙ₊₁ = (stateₙ · 0x5DEECE66D + 0xB) & (2⁴⁸ − 1)
//!   next(b)  = stateₙ₊₁ >> (48 − b)
//!
//! All arithmetic is `u64` with wrapping multiply and a mask after every step.
//! The simulation owns exactly one `JavaRng`; every random decision (initial
//! placement, destination cell, point in cell, waiting time) draws from it in
//! event order, so the stream is a pure function of seed and configuration.

use rand::RngCore;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND:     u64 = 0xB;
const MASK:       u64 = (1 << 48) - 1;

/// 2⁵³, the denominator of `next_double`.
const DOUBLE_UNIT: f64 = (1u64 << 53) as f64;

/// Bit-exact port of the `java.util.Random` generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JavaRng {
    state: u64,
}

impl JavaRng {
    /// Seed the generator.  The seed is scrambled exactly as Java does.
    pub fn new(seed: u64) -> Self {
        Self { state: (seed ^ MULTIPLIER) & MASK }
    }

    /// Advance the state and return its top `bits` bits (`1..=32`).
    #[inline]
    pub fn next(&mut self, bits: u32) -> u32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = (self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND)) & MASK;
        (self.state >> (48 - bits)) as u32
    }

    /// Uniform double in `[0, 1)` from a 26-bit and a 27-bit draw.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        let a = self.next(26) as u64;
        let b = self.next(27) as u64;
        ((a << 27) + b) as f64 / DOUBLE_UNIT
    }

    /// Uniform double in `[lo, hi)`: `lo + (hi − lo) · next_double()`.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_double()
    }
}

impl RngCore for JavaRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next(32)
    }

    /// Java's `nextLong`: high word shifted, low word added as signed.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = self.next(32) as i32 as i64;
        let lo = self.next(32) as i32 as i64;
        (hi << 32).wrapping_add(lo) as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
