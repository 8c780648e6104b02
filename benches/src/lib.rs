//! Benchmark utilities for fracvar.
//!
//! Deterministic synthetic bar series so benchmark runs are comparable.

use fracvar_lib::Bar;

/// Shape of a synthetic series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Random walk with random wicks.
    RandomWalk,
    /// Linear ramp with unit-range bars.
    Ramp,
    /// Sine wave with constant-range bars.
    Sine,
}

impl SeriesKind {
    /// Returns a short label for benchmark ids.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RandomWalk => "random-walk",
            Self::Ramp => "ramp",
            Self::Sine => "sine",
        }
    }

    /// Returns all series kinds.
    pub const fn all() -> &'static [Self] {
        &[Self::RandomWalk, Self::Ramp, Self::Sine]
    }
}

/// Xorshift64 generator returning uniforms in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct Xorshift(u64);

impl Xorshift {
    /// Creates a generator. A zero seed is replaced by a fixed constant.
    pub const fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    /// Returns the next uniform sample.
    pub fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Generates parallel low and high vectors of length `n`.
pub fn generate(kind: SeriesKind, n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    match kind {
        SeriesKind::RandomWalk => {
            let mut rng = Xorshift::new(seed);
            let mut price = 100.0;
            let mut low = Vec::with_capacity(n);
            let mut high = Vec::with_capacity(n);
            for _ in 0..n {
                let open = price;
                price += rng.next_f64() - 0.5;
                let wick = rng.next_f64() * 0.1;
                low.push(open.min(price) - wick);
                high.push(open.max(price) + wick);
            }
            (low, high)
        }
        SeriesKind::Ramp => {
            let low: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let high = low.iter().map(|l| l + 1.0).collect();
            (low, high)
        }
        SeriesKind::Sine => {
            let low: Vec<f64> = (0..n).map(|i| (i as f64 * 0.05).sin()).collect();
            let high = low.iter().map(|l| l + 0.1).collect();
            (low, high)
        }
    }
}

/// Generates `n` bars without timestamps.
pub fn generate_bars(kind: SeriesKind, n: usize, seed: u64) -> Vec<Bar> {
    let (low, high) = generate(kind, n, seed);
    low.into_iter()
        .zip(high)
        .map(|(l, h)| Bar::new(h, l))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_lengths() {
        for &kind in SeriesKind::all() {
            let (low, high) = generate(kind, 100, 1);
            assert_eq!(low.len(), 100);
            assert_eq!(high.len(), 100);
            assert!(low.iter().zip(&high).all(|(l, h)| h > l));
        }
    }

    #[test]
    fn test_random_walk_is_deterministic() {
        assert_eq!(
            generate(SeriesKind::RandomWalk, 64, 42),
            generate(SeriesKind::RandomWalk, 64, 42)
        );
    }
}
