//! Password generation.

use log::{debug, error, trace};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{GeneratedPassword, Token};
use crate::config::GeneratorConfig;
use crate::entropy::Space;
use crate::error::{GenerationError, Result};
use crate::rand::Rand;
use crate::recipe::Recipe;

/// Generate a password satisfying every requirement of `recipe`.
///
/// Everything that can fail deterministically is checked before the first
/// random draw. Sampling only starts once `config.trials` attempts are known
/// to all miss with probability at most `config.max_failure_rate`, so the
/// result is never biased and the loop is always bounded.
pub fn generate<R: RngCore + CryptoRng>(
    recipe: &Recipe,
    config: &GeneratorConfig,
    rand: &mut Rand<R>,
) -> Result<GeneratedPassword> {
    if recipe.length < 1 {
        return Err(GenerationError::InvalidLength(recipe.length));
    }

    let alphabet = recipe.build();
    let chars = alphabet.chars();
    if chars.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }
    // there are fewer than 2^21 Unicode scalar values
    let size = chars.len() as u32;

    let space = Space::of(&alphabet, recipe.length);
    let entropy = space.entropy();
    if !space.is_acceptable(config.trials, config.max_failure_rate) {
        return Err(GenerationError::UnacceptableFailureRate {
            success_probability: space.success_probability(),
            failure_rate: space.failure_probability(config.trials),
            tolerance: config.max_failure_rate,
            trials: config.trials,
        });
    }
    debug!(
        "generating {} chars from {} symbols, {:.3} bits, {} required set(s)",
        recipe.length,
        size,
        entropy,
        alphabet.required().len()
    );

    let mut buf = Vec::with_capacity(recipe.length);
    let mut unmet = String::new();
    for attempt in 1..=config.trials {
        generate_from_charset(&chars, size, recipe.length, &mut buf, rand);
        match alphabet.unmet(&buf) {
            None => {
                let tokens = buf.iter().copied().map(Token::atom).collect();
                buf.zeroize();
                trace!("accepted candidate on attempt {attempt}");
                return Ok(GeneratedPassword::new(tokens, entropy));
            }
            Some(req) => {
                trace!("attempt {attempt} missed {:?}", req.name);
                unmet.clone_from(&req.name);
            }
        }
        buf.zeroize();
    }

    error!(
        "no candidate met requirements after {} attempts despite passing the failure-rate gate",
        config.trials
    );
    Err(GenerationError::RequirementsUnsatisfied {
        attempts: config.trials,
        unmet,
    })
}

/// Fill `buf` with `length` characters drawn uniformly from `chars`.
/// Caller owns the buffer; clear/zeroize between calls.
#[inline]
fn generate_from_charset<R: RngCore + CryptoRng>(
    chars: &[char],
    size: u32,
    length: usize,
    buf: &mut Vec<char>,
    rand: &mut Rand<R>,
) {
    buf.clear();
    buf.extend((0..length).map(|_| chars[rand.uniform(size) as usize]));
}
