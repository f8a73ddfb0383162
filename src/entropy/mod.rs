//! Entropy and success-probability arithmetic.
//!
//! Counts are exact big integers; floats appear only when taking logarithms.

mod count;

pub use count::{count, total};

use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::charset::CharSet;
use crate::recipe::Alphabet;

/// `length · log2(size)`.
///
/// Zero for `length == 0`, `-inf` for an empty alphabet and `length > 0`.
pub fn entropy_unconstrained(length: usize, size: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    if size == 0 {
        return f64::NEG_INFINITY;
    }
    length as f64 * (size as f64).log2()
}

/// Base-2 logarithm of an arbitrarily large integer; `-inf` for zero.
///
/// Only the top 64 bits go through a float, so values far beyond `f64::MAX`
/// still come out finite and accurate.
pub fn log2_big(n: &BigUint) -> f64 {
    if n.is_zero() {
        return f64::NEG_INFINITY;
    }
    let shift = n.bits().saturating_sub(64);
    let top = (n >> shift).to_u64().unwrap_or(u64::MAX);
    (top as f64).log2() + shift as f64
}

/// Entropy of a resolved recipe.
pub fn recipe_entropy(alphabet: &Alphabet, length: usize) -> f64 {
    if alphabet.required().is_empty() {
        return entropy_unconstrained(length, alphabet.full().len());
    }
    log2_big(&count(alphabet.allowed(), &required_sets(alphabet), length))
}

fn required_sets(alphabet: &Alphabet) -> Vec<CharSet> {
    alphabet.required().iter().map(|r| r.set.clone()).collect()
}

/// `2^(constrained − relaxed)`, clamped into `[0, 1]`.
///
/// `constrained` is the recipe's entropy, `relaxed` the entropy of the same
/// alphabet with no requirements.
pub fn success_probability(constrained: f64, relaxed: f64) -> f64 {
    if constrained == f64::NEG_INFINITY || constrained.is_nan() {
        return 0.0;
    }
    let mut diff = constrained - relaxed;
    if diff > 0.0 {
        warn!("success_probability: entropy difference {diff} is positive, clamping to 0");
        diff = 0.0;
    }
    let p = diff.exp2();
    if p.is_nan() {
        return 0.0;
    }
    p.clamp(0.0, 1.0)
}

/// Exact size of the space a recipe draws from.
#[derive(Debug, Clone)]
pub struct Space {
    length: usize,
    alphabet_size: usize,
    constrained: bool,
    satisfying: BigUint,
    total: BigUint,
}

impl Space {
    pub fn of(alphabet: &Alphabet, length: usize) -> Space {
        let alphabet_size = alphabet.full().len();
        let total = total(alphabet_size, length);
        let constrained = !alphabet.required().is_empty();
        let satisfying = if constrained {
            count(alphabet.allowed(), &required_sets(alphabet), length)
        } else {
            total.clone()
        };
        Space {
            length,
            alphabet_size,
            constrained,
            satisfying,
            total,
        }
    }

    /// Strings meeting every requirement.
    pub fn satisfying(&self) -> &BigUint {
        &self.satisfying
    }

    /// All strings over the full alphabet.
    pub fn total(&self) -> &BigUint {
        &self.total
    }

    pub fn entropy(&self) -> f64 {
        if self.constrained {
            log2_big(&self.satisfying)
        } else {
            entropy_unconstrained(self.length, self.alphabet_size)
        }
    }

    /// `satisfying / total`, through logarithms of the exact operands.
    pub fn success_probability(&self) -> f64 {
        if self.satisfying.is_zero() {
            return 0.0;
        }
        if self.satisfying >= self.total {
            return 1.0;
        }
        (log2_big(&self.satisfying) - log2_big(&self.total))
            .exp2()
            .clamp(0.0, 1.0)
    }

    /// `log2` of the chance that `trials` independent draws all miss.
    ///
    /// Works from `total − satisfying` directly, so the result stays precise
    /// whether success is nearly certain or nearly impossible.
    pub fn log2_failure_probability(&self, trials: u32) -> f64 {
        if trials == 0 || self.satisfying.is_zero() {
            return 0.0;
        }
        if self.satisfying >= self.total {
            return f64::NEG_INFINITY;
        }
        let misses = &self.total - &self.satisfying;
        let per_trial = log2_big(&misses) - log2_big(&self.total);
        let log2_fail = f64::from(trials) * per_trial.min(0.0);
        debug!("failure probability over {trials} trials: 2^{log2_fail:.3}");
        log2_fail
    }

    pub fn failure_probability(&self, trials: u32) -> f64 {
        self.log2_failure_probability(trials).exp2()
    }

    /// True if `trials` draws miss with probability at most `tolerance`.
    pub fn is_acceptable(&self, trials: u32, tolerance: f64) -> bool {
        if tolerance >= 1.0 {
            return true;
        }
        if tolerance <= 0.0 {
            return self.log2_failure_probability(trials) == f64::NEG_INFINITY;
        }
        self.log2_failure_probability(trials) <= tolerance.log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Classes;
    use crate::recipe::Recipe;

    #[test]
    fn unconstrained() {
        assert_eq!(entropy_unconstrained(1, 1024), 10.0);
        assert_eq!(entropy_unconstrained(5, 1024), 50.0);
        assert_eq!(entropy_unconstrained(5, 1), 0.0);
        assert_eq!(entropy_unconstrained(0, 0), 0.0);
        assert_eq!(entropy_unconstrained(3, 0), f64::NEG_INFINITY);
    }

    #[test]
    fn log2_of_big_values() {
        assert_eq!(log2_big(&BigUint::zero()), f64::NEG_INFINITY);
        assert_eq!(log2_big(&BigUint::from(1u32)), 0.0);
        assert_eq!(log2_big(&BigUint::from(1024u32)), 10.0);
        assert_eq!(log2_big(&(BigUint::from(1u32) << 5000u32)), 5000.0);

        // 62^400 is far past f64::MAX.
        let n = total(62, 400);
        assert!(n.to_f64().map_or(true, f64::is_infinite));
        let expected = 400.0 * 62f64.log2();
        assert!((log2_big(&n) - expected).abs() < 1e-9);
    }

    #[test]
    fn success_probability_clamps() {
        assert_eq!(success_probability(f64::NEG_INFINITY, 10.0), 0.0);
        assert_eq!(success_probability(f64::NEG_INFINITY, f64::NEG_INFINITY), 0.0);
        assert_eq!(success_probability(10.0 + 1e-12, 10.0), 1.0);
        assert!((success_probability(9.0, 10.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn space_of_required_digits() {
        let recipe = Recipe {
            length: 10,
            allow: Classes::LETTERS,
            require: Classes::DIGITS,
            ..Default::default()
        };
        let space = Space::of(&recipe.build(), recipe.length);
        assert_eq!(space.total(), &total(62, 10));
        assert_eq!(space.satisfying(), &(total(62, 10) - total(52, 10)));
        assert_eq!(space.entropy(), recipe.entropy());

        let exact = 1.0 - (52.0f64 / 62.0).powi(10);
        assert!((space.success_probability() - exact).abs() < 1e-12);
        assert!((space.success_probability() - recipe.success_probability()).abs() < 1e-9);

        let fail = (52.0f64 / 62.0).powi(10).powi(200);
        assert!((space.failure_probability(200) / fail - 1.0).abs() < 1e-6);
        assert!(space.is_acceptable(200, 1e-9));
    }

    #[test]
    fn impossible_space_always_fails() {
        let recipe = Recipe {
            length: 2,
            require: Classes::UPPERS | Classes::LOWERS | Classes::DIGITS,
            ..Default::default()
        };
        let space = Space::of(&recipe.build(), recipe.length);
        assert!(space.satisfying().is_zero());
        assert_eq!(space.entropy(), f64::NEG_INFINITY);
        assert_eq!(space.success_probability(), 0.0);
        assert_eq!(space.failure_probability(200), 1.0);
        assert!(!space.is_acceptable(200, 1e-9));
    }

    #[test]
    fn unconstrained_space_never_fails() {
        let recipe = Recipe::pin(12);
        let space = Space::of(&recipe.build(), recipe.length);
        assert_eq!(space.success_probability(), 1.0);
        assert_eq!(space.failure_probability(200), 0.0);
        assert!(space.is_acceptable(200, 0.0));
    }

    #[test]
    fn rare_requirement_is_rejected() {
        // One required symbol out of 82: (81/82)^200 is about 0.086.
        let recipe = Recipe {
            length: 1,
            allow: Classes::ALL,
            require_sets: vec!["€".into()],
            ..Default::default()
        };
        let space = Space::of(&recipe.build(), recipe.length);
        let expected = (81.0f64 / 82.0).powi(200);
        assert!((space.failure_probability(200) - expected).abs() < 1e-9);
        assert!(!space.is_acceptable(200, 1e-9));
        assert!(space.is_acceptable(200, 0.1));
    }

    #[test]
    fn near_certain_success_stays_precise() {
        // Missing all 10 digits in 400 draws from 81 characters.
        let recipe = Recipe {
            length: 400,
            allow: Classes::ALL,
            require: Classes::DIGITS,
            ..Default::default()
        };
        let space = Space::of(&recipe.build(), recipe.length);
        let per_trial = 400.0 * (71.0f64 / 81.0).log2();
        let expected = 200.0 * per_trial;
        let got = space.log2_failure_probability(200);
        assert!((got - expected).abs() < 1e-6 * expected.abs(), "{got} vs {expected}");
    }
}
