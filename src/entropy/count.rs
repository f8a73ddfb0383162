//! Exact counting of strings that meet every requirement.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::charset::CharSet;

/// Number of `length`-character strings over `allowed ∪ ⋃required` that
/// contain at least one character from every set in `required`.
///
/// Inclusion–exclusion over subsets of `required`, enumerated as bitmasks:
/// each subset `S` contributes `(-1)^|S| · |alphabet \ ⋃S|^length`, the
/// strings that avoid every set in `S`. For pairwise disjoint sets this is
/// the familiar "total minus every proper subset's count" recurrence; the
/// signed form also stays exact when required sets share characters, where
/// a shared character satisfies each set that contains it.
///
/// `length == 0` yields 0 whenever `required` is non-empty. An empty
/// alphabet with `length > 0` yields 0.
pub fn count(allowed: &CharSet, required: &[CharSet], length: usize) -> BigUint {
    let k = required.len();
    assert!(k < usize::BITS as usize, "count: too many required sets ({k})");

    let alphabet = allowed.union(&CharSet::union_all(required));
    let subsets = 1usize << k;

    // avoided[mask] = union of the required sets selected by mask
    let mut avoided: Vec<CharSet> = Vec::with_capacity(subsets);
    avoided.push(CharSet::new());

    let mut sum = BigInt::zero();
    for mask in 0..subsets {
        if mask > 0 {
            let low = mask.trailing_zeros() as usize;
            let next = avoided[mask & (mask - 1)].union(&required[low]);
            avoided.push(next);
        }

        let size = alphabet.difference(&avoided[mask]).len();
        let term = BigInt::from(num_traits::pow(BigUint::from(size), length));
        if mask.count_ones() % 2 == 0 {
            sum += term;
        } else {
            sum -= term;
        }
    }

    // A negative sum would mean a broken enumeration, not a real count.
    sum.to_biguint().unwrap_or_else(BigUint::zero)
}

/// `size^length`, exactly.
pub fn total(size: usize, length: usize) -> BigUint {
    if length == 0 {
        return BigUint::one();
    }
    num_traits::pow(BigUint::from(size), length)
}
