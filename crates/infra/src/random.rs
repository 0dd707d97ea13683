// crates/infra/src/random.rs
//! Seedable [`UniformIntSource`] backed by xxh3.
//!
//! Draw `n` is `xxh3_64_with_seed(n.to_le_bytes(), seed)`, so a sequence is
//! fully determined by its seed and can be resumed from any position.

use std::time::{SystemTime, UNIX_EPOCH};

use rangekit_ports::UniformIntSource;
use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xxh3Source {
    seed: u64,
    counter: u64,
}

impl Xxh3Source {
    pub const fn seeded(seed: u64) -> Self {
        Self { seed, counter: 0 }
    }

    /// Seeds from the process id and the wall clock.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let mut material = [0u8; 20];
        material[..16].copy_from_slice(&nanos.to_le_bytes());
        material[16..].copy_from_slice(&std::process::id().to_le_bytes());
        let seed = xxh3_64(&material);
        log::debug!("seeded random source from entropy: {seed:#018x}");
        Self::seeded(seed)
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of raw words drawn so far.
    pub const fn position(&self) -> u64 {
        self.counter
    }

    fn next_u64(&mut self) -> u64 {
        let word = xxh3_64_with_seed(&self.counter.to_le_bytes(), self.seed);
        self.counter = self.counter.wrapping_add(1);
        word
    }
}

impl UniformIntSource for Xxh3Source {
    fn next_in(&mut self, low: i64, high_exclusive: i64) -> i64 {
        if high_exclusive <= low {
            return low;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let span = (i128::from(high_exclusive) - i128::from(low)) as u64;
        // Reject the low 2^64 mod span words so every residue is equally likely.
        let threshold = span.wrapping_neg() % span;
        loop {
            let word = self.next_u64();
            if word >= threshold {
                #[allow(clippy::cast_possible_truncation)]
                return (i128::from(low) + i128::from(word % span)) as i64;
            }
        }
    }
}
