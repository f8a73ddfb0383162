//! Sets of characters.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

/// A duplicate-free, ordered set of Unicode scalar values.
///
/// Multi-byte characters count as one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharSet(BTreeSet<char>);

impl CharSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// True if any character of `candidate` is in the set.
    pub fn is_hit_by(&self, candidate: &[char]) -> bool {
        candidate.iter().any(|c| self.0.contains(c))
    }

    pub fn insert(&mut self, c: char) -> bool {
        self.0.insert(c)
    }

    pub fn union(&self, other: &CharSet) -> CharSet {
        CharSet(self.0.union(&other.0).copied().collect())
    }

    pub fn difference(&self, other: &CharSet) -> CharSet {
        CharSet(self.0.difference(&other.0).copied().collect())
    }

    pub fn is_disjoint(&self, other: &CharSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Union of every set yielded by `sets`.
    pub fn union_all<'a>(sets: impl IntoIterator<Item = &'a CharSet>) -> CharSet {
        let mut out = CharSet::new();
        for set in sets {
            out.0.extend(set.0.iter().copied());
        }
        out
    }

    pub fn iter(&self) -> btree_set::Iter<'_, char> {
        self.0.iter()
    }

    /// Characters in ascending code point order.
    pub fn to_vec(&self) -> Vec<char> {
        self.0.iter().copied().collect()
    }
}

impl From<&str> for CharSet {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        CharSet(iter.into_iter().collect())
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CharSet {
    type Item = &'a char;
    type IntoIter = btree_set::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
