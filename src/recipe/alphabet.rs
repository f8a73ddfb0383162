//! Alphabet construction: resolving a recipe into disjoint character sets.

use log::{debug, warn};

use super::Recipe;
use crate::charset::CharSet;

/// A character set from which at least one character must appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredSet {
    /// Reported when the set is not met.
    pub name: String,
    pub set: CharSet,
}

impl RequiredSet {
    pub fn new(name: impl Into<String>, set: CharSet) -> Self {
        RequiredSet {
            name: name.into(),
            set,
        }
    }

    #[inline]
    pub fn is_met_by(&self, candidate: &[char]) -> bool {
        self.set.is_hit_by(candidate)
    }
}

/// The resolved form of a [`Recipe`].
///
/// `allowed` holds characters that may appear but satisfy no requirement. It
/// is disjoint from every required set. Required sets may overlap each other;
/// a shared character counts toward all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    allowed: CharSet,
    required: Vec<RequiredSet>,
}

impl Alphabet {
    pub fn build(recipe: &Recipe) -> Alphabet {
        let mut allowed = recipe.allow.chars();
        allowed.extend(recipe.allow_chars.chars());

        let mut excluded = recipe.exclude.chars();
        excluded.extend(recipe.exclude_chars.chars());

        let mut required: Vec<RequiredSet> = recipe
            .require
            .iter()
            .map(|class| RequiredSet::new(class.name(), class.set()))
            .collect();
        for (i, chars) in recipe.require_sets.iter().enumerate() {
            if !chars.is_empty() {
                required.push(RequiredSet::new(
                    format!("Custom {}", i + 1),
                    CharSet::from(chars.as_str()),
                ));
            }
        }

        let allowed = allowed.difference(&excluded);
        let mut kept = Vec::with_capacity(required.len());
        for req in required {
            let set = req.set.difference(&excluded);
            if set.is_empty() {
                warn!("required set {:?} is entirely excluded; dropping it", req.name);
                continue;
            }
            kept.push(RequiredSet::new(req.name, set));
        }

        let required_union = CharSet::union_all(kept.iter().map(|r| &r.set));
        let allowed = allowed.difference(&required_union);

        debug!(
            "alphabet: {} allowed-only, {} required across {} set(s)",
            allowed.len(),
            required_union.len(),
            kept.len()
        );

        Alphabet {
            allowed,
            required: kept,
        }
    }

    /// Characters that may appear without satisfying any requirement.
    pub fn allowed(&self) -> &CharSet {
        &self.allowed
    }

    pub fn required(&self) -> &[RequiredSet] {
        &self.required
    }

    /// Every character a password may contain.
    pub fn full(&self) -> CharSet {
        let mut full = self.allowed.clone();
        for req in &self.required {
            full.extend(req.set.iter().copied());
        }
        full
    }

    /// The full alphabet, sorted.
    pub fn chars(&self) -> Vec<char> {
        self.full().to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty() && self.required.is_empty()
    }

    /// First required set `candidate` fails to hit, if any.
    pub fn unmet(&self, candidate: &[char]) -> Option<&RequiredSet> {
        self.required.iter().find(|req| !req.is_met_by(candidate))
    }
}
