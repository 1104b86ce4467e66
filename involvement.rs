/* ************************************************************************ **
** This file is part of perm-pattern, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use log::debug;

use crate::{Bounds, Permutation};

/// A permutation prepared for repeated containment queries.
///
/// The [`Bounds`] of the pattern are computed once here and then shared
/// (read-only) by every search.  Each search allocates its own scratch space,
/// so a `Pattern` can be queried from several threads at once.
///
/// ```rust
/// use perm_pattern::{Pattern, Permutation};
///
/// let p132 = Permutation::from_sequence(&[1, 3, 2]).unwrap();
/// let pattern = Pattern::new(&p132);
///
/// let avoiders = Permutation::all(4)
///     .filter(|text| !pattern.is_contained_in(text))
///     .count();
/// assert_eq!(avoiders, 14); // the Catalan number C_4
/// ```
#[derive(Debug, Clone)]
pub struct Pattern<'p> {
    perm: &'p Permutation,
    bounds: Bounds,
}

impl<'p> Pattern<'p> {
    pub fn new(perm: &'p Permutation) -> Self
    { Pattern { perm, bounds: perm.bounds() } }

    pub fn permutation(&self) -> &'p Permutation
    { self.perm }

    pub fn bounds(&self) -> &Bounds
    { &self.bounds }

    pub fn len(&self) -> usize
    { self.perm.len() }

    pub fn is_empty(&self) -> bool
    { self.perm.is_empty() }

    /// Does some subsequence of `text` have the same relative order as the pattern?
    pub fn is_contained_in(&self, text: &Permutation) -> bool
    { self.occurrence_in(text).is_some() }

    /// Find the lexicographically first occurrence of the pattern in `text`.
    ///
    /// Returns strictly increasing indices `i_0 < ... < i_{p-1}` such that
    /// `text[i_0], ..., text[i_{p-1}]` is order-isomorphic to the pattern.
    pub fn occurrence_in(&self, text: &Permutation) -> Option<Vec<usize>>
    {
        let p = self.len();
        let t = text.len();
        if p > t {
            return None;
        }
        if p == 0 {
            return Some(vec![]);
        }

        let text = text.as_slice();
        let mut indices = vec![0; p];
        // the first slot needs room for the p - 1 slots after it
        for first in 0..=t - p {
            indices[0] = first;
            if self.extend(text, &mut indices, 1) {
                return Some(indices);
            }
        }
        debug!("pattern {:?} does not occur in text of length {}", self.perm, t);
        None
    }

    // Try every candidate for `indices[slot]`, recursing on the slots after it.
    // `indices[..slot]` is already a valid partial occurrence.
    fn extend(&self, text: &[usize], indices: &mut [usize], slot: usize) -> bool
    {
        let p = indices.len();
        if slot == p {
            return true;
        }

        let last = text.len() - (p - slot);
        for candidate in indices[slot - 1] + 1..=last {
            indices[slot] = candidate;
            let fits = self.bounds.admits(slot, |k| text[indices[k]]);
            if fits && self.extend(text, indices, slot + 1) {
                return true;
            }
        }
        false
    }
}

/// Does `text` contain `pattern` as a classical permutation pattern?
///
/// A pattern of length `p` is contained in `text` iff some `p` entries of
/// `text`, read left to right, have the same relative order as `pattern`.
/// The empty pattern is contained in everything, and a pattern longer than
/// the text is never contained.
///
/// To test one pattern against many texts, build a [`Pattern`] once instead.
pub fn contains(pattern: &Permutation, text: &Permutation) -> bool
{ Pattern::new(pattern).is_contained_in(text) }

impl Permutation {
    /// Does `self` contain `pattern`?  See [`contains`].
    pub fn contains(&self, pattern: &Permutation) -> bool
    { contains(pattern, self) }

    /// Does `self` occur as a pattern in `text`?
    pub fn is_contained_in(&self, text: &Permutation) -> bool
    { contains(self, text) }

    pub fn avoids(&self, pattern: &Permutation) -> bool
    { !self.contains(pattern) }
}
