//! RNG module - word and column selection
//!
//! Provides a simple LCG for deterministic testing and an index "bag" that
//! hands out every word of the list once, shuffled, before refilling.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Shuffled index bag over `len` items.
///
/// Every index is drawn exactly once per bag; the bag is reshuffled when empty.
#[derive(Debug, Clone)]
pub struct IndexBag {
    order: Vec<usize>,
    next: usize,
}

impl IndexBag {
    pub fn new(len: usize, rng: &mut SimpleRng) -> Self {
        let mut bag = Self {
            order: (0..len).collect(),
            next: 0,
        };
        rng.shuffle(&mut bag.order);
        bag
    }

    /// Draw the next index, refilling from `rng` when the bag runs out.
    ///
    /// Returns `None` only for an empty bag.
    pub fn draw(&mut self, rng: &mut SimpleRng) -> Option<usize> {
        if self.order.is_empty() {
            return None;
        }
        if self.next >= self.order.len() {
            rng.shuffle(&mut self.order);
            self.next = 0;
        }
        let idx = self.order.get(self.next).copied();
        self.next += 1;
        idx
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
