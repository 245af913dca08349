//! Randomness sources.
//!
//! Phrase selection, conversation ids and report suffixes draw from an
//! [`Entropy`] passed in by the caller, so tests can pin every choice.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform choices.
pub trait Entropy {
    /// A value in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;

    /// A lowercase base-36 token of `len` characters.
    fn token(&mut self, len: usize) -> String {
        (0..len)
            .filter_map(|_| std::char::from_digit(self.below(36) as u32, 36))
            .collect()
    }
}

/// OS-seeded generator used outside tests.
pub struct SystemEntropy {
    rng: StdRng,
}

impl SystemEntropy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for SystemEntropy {
    fn below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Reproducible generator.
pub struct SeededEntropy {
    rng: StdRng,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Entropy for SeededEntropy {
    fn below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed script of values, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound.
pub struct ScriptedEntropy {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedEntropy {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            position: 0,
        }
    }
}

impl Entropy for ScriptedEntropy {
    fn below(&mut self, upper: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value % upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut entropy = ScriptedEntropy::new(vec![1, 5]);
        assert_eq!(entropy.below(3), 1);
        assert_eq!(entropy.below(3), 2);
        assert_eq!(entropy.below(3), 1);
    }

    #[test]
    fn test_token_is_base36() {
        let mut entropy = ScriptedEntropy::new(vec![0, 10, 35]);
        assert_eq!(entropy.token(3), "0az");
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = SeededEntropy::new(7).token(9);
        let b = SeededEntropy::new(7).token(9);
        assert_eq!(a, b);
        assert_eq!(a.len(), 9);
    }

    #[test]
    fn test_system_stays_in_bounds() {
        let mut entropy = SystemEntropy::new();
        for _ in 0..100 {
            assert!(entropy.below(3) < 3);
        }
    }
}
