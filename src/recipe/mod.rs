//! Character recipes: what may, must and must not appear in a password.

mod alphabet;

pub use alphabet::{Alphabet, RequiredSet};

use rand::{CryptoRng, RngCore};

use crate::charset::Classes;
use crate::config::GeneratorConfig;
use crate::entropy;
use crate::error::Result;
use crate::pass::{self, GeneratedPassword};
use crate::rand::Rand;

/// Anything that can produce passwords and report their entropy.
///
/// Word-list generators implement this too; they typically build a small
/// [`Recipe`] for their separators and add its entropy to their own.
pub trait Generator {
    fn generate(&self) -> Result<GeneratedPassword>;
    fn entropy(&self) -> f64;
}

/// Describes the space a character password is drawn from.
///
/// Exclusion overrides both `allow` and `require`. Characters required by
/// `require` or `require_sets` are implicitly allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    /// Length in characters, not bytes.
    pub length: usize,

    /// Classes which may appear.
    pub allow: Classes,
    /// Classes which must appear, at least one character from each.
    pub require: Classes,
    /// Classes which must not appear.
    pub exclude: Classes,

    pub allow_chars: String,
    /// Each non-empty string must contribute at least one character.
    pub require_sets: Vec<String>,
    pub exclude_chars: String,
}

impl Recipe {
    /// Letters, digits and symbols, without ambiguous characters.
    pub fn new(length: usize) -> Self {
        Recipe {
            length,
            allow: Classes::ALL,
            exclude: Classes::AMBIGUOUS,
            ..Default::default()
        }
    }

    /// Digits only.
    pub fn pin(length: usize) -> Self {
        Recipe {
            length,
            allow: Classes::DIGITS,
            ..Default::default()
        }
    }

    /// The recipe with every requirement demoted to a mere allowance.
    ///
    /// It draws from the same alphabet but imposes no constraints.
    pub fn relaxed(&self) -> Recipe {
        let mut allow_chars = self.allow_chars.clone();
        for set in &self.require_sets {
            allow_chars.push_str(set);
        }
        Recipe {
            length: self.length,
            allow: self.allow | self.require,
            require: Classes::NONE,
            exclude: self.exclude,
            allow_chars,
            require_sets: Vec::new(),
            exclude_chars: self.exclude_chars.clone(),
        }
    }

    pub fn build(&self) -> Alphabet {
        Alphabet::build(self)
    }

    /// Characters passwords are drawn from, sorted.
    pub fn alphabet(&self) -> Vec<char> {
        self.build().chars()
    }

    /// Min-entropy in bits. `-inf` when no password satisfies the recipe.
    pub fn entropy(&self) -> f64 {
        entropy::recipe_entropy(&self.build(), self.length)
    }

    /// Chance that one unconstrained draw already meets every requirement.
    pub fn success_probability(&self) -> f64 {
        entropy::success_probability(self.entropy(), self.relaxed().entropy())
    }

    pub fn generate(&self) -> Result<GeneratedPassword> {
        self.generate_with(&GeneratorConfig::default(), &mut Rand::new())
    }

    pub fn generate_with<R: RngCore + CryptoRng>(
        &self,
        config: &GeneratorConfig,
        rand: &mut Rand<R>,
    ) -> Result<GeneratedPassword> {
        pass::generate(self, config, rand)
    }
}

impl Generator for Recipe {
    fn generate(&self) -> Result<GeneratedPassword> {
        Recipe::generate(self)
    }

    fn entropy(&self) -> f64 {
        Recipe::entropy(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
    const DIGITS: &str = "0123456789";

    #[test]
    fn unconstrained_entropy() {
        let recipe = Recipe {
            length: 5,
            allow_chars: ('\u{4e00}'..'\u{5200}').collect(),
            ..Default::default()
        };
        assert_eq!(recipe.alphabet().len(), 1024);
        assert_eq!(recipe.entropy(), 50.0);
    }

    #[test]
    fn empty_alphabet_is_negative_infinity() {
        let recipe = Recipe {
            length: 4,
            ..Default::default()
        };
        assert_eq!(recipe.entropy(), f64::NEG_INFINITY);
    }

    #[test]
    fn too_short_for_requirements() {
        let recipe = Recipe {
            length: 2,
            require_sets: vec![UPPER.into(), LOWER.into(), DIGITS.into()],
            ..Default::default()
        };
        assert_eq!(recipe.entropy(), f64::NEG_INFINITY);
        assert_eq!(recipe.success_probability(), 0.0);
    }

    #[test]
    fn required_entropy_uses_exact_count() {
        let recipe = Recipe {
            length: 2,
            allow_chars: "A1".into(),
            require_sets: vec!["a".into()],
            ..Default::default()
        };
        // 3^2 strings, 2^2 of them without 'a'.
        assert!((recipe.entropy() - 5f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn entropy_is_repeatable() {
        let recipe = Recipe {
            length: 17,
            require: Classes::ALL,
            exclude_chars: "xyz".into(),
            ..Recipe::new(17)
        };
        assert_eq!(recipe.entropy().to_bits(), recipe.entropy().to_bits());
    }

    #[test]
    fn pin_digits() {
        let recipe = Recipe::pin(12);
        assert_eq!(recipe.alphabet(), DIGITS.chars().collect::<Vec<_>>());
        assert!((recipe.entropy() - 12.0 * 10f64.log2()).abs() < 1e-9);
        assert!((recipe.entropy() - 39.863).abs() < 1e-3);
    }

    #[test]
    fn default_recipe_excludes_ambiguous() {
        let alphabet = Recipe::new(20).alphabet();
        assert_eq!(alphabet.len(), 81 - 7);
        for c in "0O1Il5S".chars() {
            assert!(!alphabet.contains(&c), "{c} should be excluded");
        }
    }

    #[test]
    fn relaxed_keeps_alphabet() {
        let recipe = Recipe {
            length: 8,
            allow: Classes::LOWERS,
            require: Classes::DIGITS,
            require_sets: vec!["€".into()],
            exclude_chars: "9".into(),
            ..Default::default()
        };
        let relaxed = recipe.relaxed();
        assert_eq!(relaxed.alphabet(), recipe.alphabet());
        assert!(relaxed.build().required().is_empty());
        assert!(relaxed.entropy() > recipe.entropy());
    }

    #[test]
    fn success_probability_matches_ratio() {
        let recipe = Recipe {
            length: 10,
            allow: Classes::LETTERS,
            require: Classes::DIGITS,
            ..Default::default()
        };
        let expected = 1.0 - (52.0f64 / 62.0).powi(10);
        assert!((recipe.success_probability() - expected).abs() < 1e-9);
    }

    #[test]
    fn no_requirements_always_succeed() {
        assert_eq!(Recipe::new(12).success_probability(), 1.0);
    }

    #[test]
    fn generator_trait() {
        let recipe = Recipe::pin(1);
        let g: &dyn Generator = &recipe;
        let pwd = g.generate().expect("single digit");
        assert_eq!(pwd.to_string().len(), 1);
        assert_eq!(g.entropy(), recipe.entropy());
    }
}
