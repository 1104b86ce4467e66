/* ************************************************************************ **
** This file is part of perm-pattern, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Permutation;

/// Relative-order bounds of each entry against the entries before it.
///
/// For position `i`:
///
/// * `lower[i]` is the index `j < i` holding the largest value still below `perm[i]`;
/// * `upper[i]` is the index `j < i` holding the smallest value above `perm[i]`.
///
/// Either is `None` when no earlier entry lies on that side.  Knowing these two
/// neighbours is enough to place `perm[i]` relative to the *whole* prefix, which
/// is what makes incremental pattern matching cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    lower: Vec<Option<usize>>,
    upper: Vec<Option<usize>>,
}

impl Bounds {
    /// Compute the bounds of a permutation.  O(n²) time, O(n) space.
    pub fn of(perm: &Permutation) -> Bounds
    {
        let vals = perm.as_slice();
        let n = vals.len();
        let mut lower = vec![None; n];
        let mut upper = vec![None; n];

        for i in 0..n {
            let mut max_below: Option<usize> = None;
            let mut min_above: Option<usize> = None;
            for j in 0..i {
                if vals[j] < vals[i] {
                    if max_below.map_or(true, |m| vals[j] > m) {
                        max_below = Some(vals[j]);
                        lower[i] = Some(j);
                    }
                } else if min_above.map_or(true, |m| vals[j] < m) {
                    min_above = Some(vals[j]);
                    upper[i] = Some(j);
                }
            }
        }
        Bounds { lower, upper }
    }

    pub fn len(&self) -> usize
    { self.lower.len() }

    pub fn is_empty(&self) -> bool
    { self.lower.is_empty() }

    pub fn lower(&self) -> &[Option<usize>]
    { &self.lower }

    pub fn upper(&self) -> &[Option<usize>]
    { &self.upper }

    /// Check whether `values[slot]` sits between the values at the bound
    /// positions of `slot`, which must already be filled in.
    pub(crate) fn admits(&self, slot: usize, values: impl Fn(usize) -> usize) -> bool
    {
        let value = values(slot);
        self.lower[slot].map_or(true, |j| value > values(j))
            && self.upper[slot].map_or(true, |j| value < values(j))
    }
}

impl Permutation {
    /// See [`Bounds`].
    ///
    /// This is recomputed on every call; hold on to the result (or use a
    /// [`Pattern`](crate::Pattern)) when matching the same permutation repeatedly.
    pub fn bounds(&self) -> Bounds
    { Bounds::of(self) }
}
