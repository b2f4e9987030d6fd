//! Benchmark profiles and utilities for Holdfast.
//!
//! - [`filled_array`]: an array of `n` boxed integers built by appends
//! - [`access_pattern`]: deterministic pseudo-random in-range indices
//! - [`Payload`] / [`Particle`]: a small polymorphic hierarchy for copy benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use holdfast_array::OwningArray;
use holdfast_value::{subtype, CloneToBox};

/// Build an array of `n` boxed integers by repeated appends from an empty
/// array, so every doubling step is exercised.
pub fn filled_array(n: usize) -> OwningArray<u64> {
    let mut arr = OwningArray::new();
    for i in 0..n as u64 {
        arr.push(Box::new(i));
    }
    arr
}

/// `count` deterministic pseudo-random indices below `len`.
pub fn access_pattern(len: usize, count: usize) -> Vec<usize> {
    assert!(len > 0, "access pattern needs a non-empty range");
    (0..count as u64)
        .map(|i| (i.wrapping_mul(6364136223846793007) >> 17) as usize % len)
        .collect()
}

/// Polymorphic payload for copy benchmarks.
pub trait Payload: CloneToBox {
    /// Sum of the payload's contents.
    fn checksum(&self) -> f64;
}

/// A mid-sized concrete payload (64 floats).
#[derive(Clone)]
pub struct Particle {
    /// Position, velocity and history samples.
    pub samples: [f64; 64],
}

impl Particle {
    /// A particle whose samples are `seed, seed + 1, ...`.
    pub fn new(seed: f64) -> Self {
        let mut samples = [0.0; 64];
        for (i, s) in samples.iter_mut().enumerate() {
            *s = seed + i as f64;
        }
        Self { samples }
    }
}

impl Payload for Particle {
    fn checksum(&self) -> f64 {
        self.samples.iter().sum()
    }
}

subtype!(Particle => dyn Payload);
