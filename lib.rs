/* ************************************************************************ **
** This file is part of perm-pattern, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Permutations of `0..n` as immutable values, with pattern containment
//! and substitution decomposition.
//!
//! ```rust
//! use perm_pattern::Permutation;
//!
//! let text = Permutation::from_sequence(&[40, 10, 30, 20]).unwrap();
//! let pattern = Permutation::from_sequence(&['b', 'a']).unwrap();
//! assert_eq!(text.as_slice(), &[3, 0, 2, 1]);
//! assert!(text.contains(&pattern));
//!
//! let decomposition = text.decompose();
//! assert!(decomposition.base.is_simple());
//! assert_eq!(decomposition.inflate(), text);
//! ```

use std::fmt;
use std::ops::{Index, Mul};

use thiserror::Error;

mod bounds;
mod decompose;
mod display;
mod enumerate;
mod interval;
mod involvement;
mod stats;

pub use crate::bounds::Bounds;
pub use crate::decompose::{decompose, inflate, Decomposition};
pub use crate::display::{Displayed, Notation};
pub use crate::enumerate::AllPermutations;
pub use crate::interval::{is_simple, maximal_interval, Interval};
pub use crate::involvement::{contains, Pattern};

/// A permutation of `0..n`, stored in one-line notation.
///
/// The `i`th entry is the image of `i`.  A `Permutation` is never mutated
/// after construction; every operation that "changes" one builds a new value.
///
/// Equality, hashing and ordering are those of the underlying sequence, so
/// permutations of different lengths are never equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
    vals: Vec<usize>,
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.vals, f)
    }
}

/// Input validation failures.
///
/// These are raised at the boundary of the offending operation and never
/// silently corrected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermutationError {
    #[error("elements of a permutation must be distinct")]
    NotDistinct,
    #[error("a non-empty sequence is required")]
    EmptyInput,
    #[error("expected {expected} operands of matching length, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("index {index} is out of range (must be below {bound})")]
    IndexRange { index: u128, bound: u128 },
    #[error("value {value} is out of range (must be below {bound})")]
    ValueRange { value: usize, bound: usize },
    #[error("could not parse {0:?} as a permutation")]
    Parse(String),
}

/// `n!`, or `None` if it does not fit in a `u128` (`n > 34`).
pub fn factorial(n: usize) -> Option<u128> {
    (2..=n as u128).try_fold(1u128, |acc, i| acc.checked_mul(i))
}

impl Permutation {
    /// The identity permutation of length `n`.
    pub fn identity(n: usize) -> Permutation
    { Permutation { vals: (0..n).collect() } }

    /// Standardize a sequence of distinct elements.
    ///
    /// The `i`th entry of the result is the number of input elements that are
    /// strictly smaller than `xs[i]`, so the result is order-isomorphic to `xs`.
    /// An empty input produces the empty permutation.
    ///
    /// Fails with [`PermutationError::NotDistinct`] if any element repeats.
    pub fn from_sequence<T: Ord>(xs: &[T]) -> Result<Permutation, PermutationError>
    {
        let order = argsort(xs);
        if order.windows(2).any(|w| xs[w[0]] == xs[w[1]]) {
            return Err(PermutationError::NotDistinct);
        }
        Ok(Permutation::from_sorted_order(&order))
    }

    /// Like [`Permutation::from_sequence`], but rejects empty input.
    pub fn from_sequence_nonempty<T: Ord>(xs: &[T]) -> Result<Permutation, PermutationError>
    {
        if xs.is_empty() {
            return Err(PermutationError::EmptyInput);
        }
        Permutation::from_sequence(xs)
    }

    /// Construct a permutation directly from its one-line notation.
    ///
    /// Unlike [`Permutation::from_sequence`], this does not standardize: `vals`
    /// must already contain every value in `0..vals.len()` exactly once.
    pub fn from_values(vals: Vec<usize>) -> Result<Permutation, PermutationError>
    {
        let n = vals.len();
        let mut seen = vec![false; n];
        for &value in &vals {
            if value >= n {
                return Err(PermutationError::ValueRange { value, bound: n });
            }
            if std::mem::replace(&mut seen[value], true) {
                return Err(PermutationError::NotDistinct);
            }
        }
        Ok(Permutation { vals })
    }

    /// The `k`th permutation of length `n` in lexicographic order.
    ///
    /// `k` is read in the factorial number system: its digits (extracted by
    /// repeatedly taking `k mod i` and dividing by `i`) form the Lehmer code
    /// of the result.  Index `0` is the identity and index `n! - 1` is the
    /// reversal.  [`Permutation::to_index`] is the inverse.
    ///
    /// Fails with [`PermutationError::IndexRange`] if `k >= n!`.
    pub fn from_index(mut k: u128, n: usize) -> Result<Permutation, PermutationError>
    {
        if let Some(bound) = factorial(n) {
            if k >= bound {
                return Err(PermutationError::IndexRange { index: k, bound });
            }
        }

        let mut digits = vec![0; n];
        for i in 1..=n {
            digits[n - i] = (k % i as u128) as usize;
            k /= i as u128;
        }

        // scratch list of unused values, discarded afterwards
        let mut unused: Vec<usize> = (0..n).collect();
        let vals = digits.into_iter().map(|d| unused.remove(d)).collect();
        Ok(Permutation { vals })
    }

    /// The lexicographic rank of this permutation among those of its length.
    ///
    /// Returns `None` only when the rank does not fit in a `u128`.
    pub fn to_index(&self) -> Option<u128>
    {
        let n = self.len();
        let mut index = 0u128;
        for (i, &value) in self.vals.iter().enumerate() {
            let digit = self.vals[i + 1..].iter().filter(|&&later| later < value).count();
            index = index.checked_mul((n - i) as u128)?.checked_add(digit as u128)?;
        }
        Some(index)
    }

    pub fn len(&self) -> usize
    { self.vals.len() }

    pub fn is_empty(&self) -> bool
    { self.vals.is_empty() }

    /// The one-line notation.
    pub fn as_slice(&self) -> &[usize]
    { &self.vals }

    pub fn into_vec(self) -> Vec<usize>
    { self.vals }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>>
    { self.vals.iter().copied() }

    /// The entry at position `i`.
    pub fn value_at(&self, i: usize) -> Result<usize, PermutationError>
    {
        self.vals.get(i).copied().ok_or(PermutationError::IndexRange {
            index: i as u128,
            bound: self.len() as u128,
        })
    }

    /// Use the permutation as a function.  O(1).
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds for the permutation length.
    pub fn apply(&self, i: usize) -> usize
    { self.vals[i] }

    /// Compose two permutations, so that `a.compose(&b)?.apply(i) == a.apply(b.apply(i))`.
    pub fn compose(&self, other: &Permutation) -> Result<Permutation, PermutationError>
    {
        if self.len() != other.len() {
            return Err(PermutationError::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(self.composed_unchecked(other))
    }

    fn composed_unchecked(&self, other: &Permutation) -> Permutation
    { Permutation { vals: other.vals.iter().map(|&i| self.vals[i]).collect() }.debug_validated() }

    #[must_use = "not an in-place operation"]
    pub fn inverse(&self) -> Permutation
    {
        let mut inv = vec![::std::usize::MAX; self.len()];
        for (i, &x) in self.vals.iter().enumerate() {
            inv[x] = i;
        }
        Permutation { vals: inv }.debug_validated()
    }

    /// The permutation read right to left.
    #[must_use = "not an in-place operation"]
    pub fn reverse(&self) -> Permutation
    { Permutation { vals: self.vals.iter().rev().copied().collect() } }

    /// The permutation with every value `v` replaced by `n - 1 - v`.
    #[must_use = "not an in-place operation"]
    pub fn complement(&self) -> Permutation
    {
        let n = self.len();
        Permutation { vals: self.vals.iter().map(|&v| n - 1 - v).collect() }
    }

    /// Remove the entry at index `i` and standardize what remains.
    pub fn delete(&self, i: usize) -> Result<Permutation, PermutationError>
    {
        let removed = self.value_at(i)?;
        let vals = self.vals.iter().enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &v)| if v > removed { v - 1 } else { v })
            .collect();
        Ok(Permutation { vals }.debug_validated())
    }

    /// Insert `value` at index `i`, first shifting every entry `>= value` up by one.
    ///
    /// Both `i` and `value` may range over `0..=n`.
    pub fn insert(&self, i: usize, value: usize) -> Result<Permutation, PermutationError>
    {
        let n = self.len();
        if i > n {
            return Err(PermutationError::IndexRange { index: i as u128, bound: n as u128 + 1 });
        }
        if value > n {
            return Err(PermutationError::ValueRange { value, bound: n + 1 });
        }
        Ok(self.inserted(i, value))
    }

    pub(crate) fn inserted(&self, i: usize, value: usize) -> Permutation
    {
        let mut vals: Vec<usize> = self.vals.iter()
            .map(|&v| if v >= value { v + 1 } else { v })
            .collect();
        vals.insert(i, value);
        Permutation { vals }.debug_validated()
    }

    /// Compose the permutation with itself `exp` times.
    ///
    /// This uses exponentiation by squaring to run in `O(log(exp))` compositions.
    pub fn pow(&self, mut exp: u64) -> Permutation
    {
        let mut acc = Permutation::identity(self.len());
        let mut base = self.clone();
        while exp > 0 {
            if (exp & 1) == 1 {
                acc = &acc * &base;
            }
            base = &base * &base;
            exp /= 2;
        }
        acc
    }

    pub fn is_involution(&self) -> bool
    { self.vals.iter().enumerate().all(|(i, &v)| self.vals[v] == i) }
}

// Helpers for code that already knows its input is valid.
impl Permutation {
    /// Standardize elements which the caller guarantees to be distinct.
    pub(crate) fn from_distinct<T: Ord>(xs: &[T]) -> Permutation
    {
        let order = argsort(xs);
        debug_assert!(order.windows(2).all(|w| xs[w[0]] != xs[w[1]]));
        Permutation::from_sorted_order(&order)
    }

    pub(crate) fn from_vec_unchecked(vals: Vec<usize>) -> Permutation
    { Permutation { vals }.debug_validated() }

    // `order[r]` is the index of the element with rank `r`.
    fn from_sorted_order(order: &[usize]) -> Permutation
    {
        let mut vals = vec![0; order.len()];
        for (rank, &index) in order.iter().enumerate() {
            vals[index] = rank;
        }
        Permutation { vals }
    }

    fn debug_validated(self) -> Permutation {
        debug_assert!(Permutation::from_values(self.vals.clone()).is_ok());
        self
    }
}

fn argsort<T: Ord>(xs: &[T]) -> Vec<usize>
{
    let mut order: Vec<_> = (0..xs.len()).collect();
    order.sort_by(|&a, &b| xs[a].cmp(&xs[b]));
    order
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, i: usize) -> &usize
    { &self.vals[i] }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter
    { self.iter() }
}

impl IntoIterator for Permutation {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter
    { self.vals.into_iter() }
}

/// Composition: `(a * b)[i] == a[b[i]]`.
///
/// # Panics
///
/// Panics if the lengths differ.  Use [`Permutation::compose`] for a fallible version.
impl<'a, 'b> Mul<&'b Permutation> for &'a Permutation {
    type Output = Permutation;

    fn mul(self, other: &'b Permutation) -> Permutation
    {
        assert_eq!(self.len(), other.len(), "Incorrect permutation length");
        self.composed_unchecked(other)
    }
}

impl Mul for Permutation {
    type Output = Permutation;

    fn mul(self, other: Permutation) -> Permutation
    { &self * &other }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::Permutation;
    use proptest::prelude::*;

    /// Uniformly shuffled permutations with lengths in `lengths`.
    pub fn arb_permutation(lengths: std::ops::Range<usize>) -> impl Strategy<Value = Permutation> {
        lengths.prop_flat_map(|n| {
            Just((0..n).collect::<Vec<usize>>())
                .prop_shuffle()
                .prop_map(Permutation::from_vec_unchecked)
        })
    }

    pub fn perm(vals: &[usize]) -> Permutation {
        Permutation::from_values(vals.to_vec()).unwrap()
    }
}
