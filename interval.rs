/* ************************************************************************ **
** This file is part of perm-pattern, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::BTreeMap;
use std::ops::Range;

use crate::Permutation;

/// A window of positions `start..start + len` whose values also form a
/// contiguous range of integers.
///
/// Also known as a block.  Every permutation has the trivial intervals of
/// length 0, 1 and `n`; only the others are ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    pub start: usize,
    pub len: usize,
}

impl Interval {
    pub fn end(&self) -> usize
    { self.start + self.len }

    pub fn range(&self) -> Range<usize>
    { self.start..self.end() }
}

impl Permutation {
    fn is_interval_window(&self, window: Range<usize>) -> bool
    {
        let vals = &self.as_slice()[window];
        match (vals.iter().min(), vals.iter().max()) {
            (Some(lo), Some(hi)) => hi - lo == vals.len() - 1,
            _ => true,
        }
    }

    /// Start positions of all non-trivial intervals, grouped by length.
    ///
    /// Every length in `2..n` has an entry (possibly empty), and each list of
    /// starts is in increasing order.
    pub fn all_intervals(&self) -> BTreeMap<usize, Vec<usize>>
    {
        let vals = self.as_slice();
        let n = vals.len();
        let mut blocks: BTreeMap<usize, Vec<usize>> = (2..n).map(|len| (len, vec![])).collect();

        for start in 0..n {
            let (mut lo, mut hi) = (vals[start], vals[start]);
            for end in start + 1..n {
                lo = lo.min(vals[end]);
                hi = hi.max(vals[end]);
                let len = end - start + 1;
                if len < n && hi - lo == len - 1 {
                    blocks.entry(len).or_default().push(start);
                }
            }
        }
        blocks
    }

    /// The standardized contents of every non-trivial interval,
    /// ordered by length and then by start position.
    pub fn interval_patterns(&self) -> Vec<Permutation>
    {
        self.all_intervals().into_iter()
            .flat_map(|(len, starts)| {
                starts.into_iter().map(move |start| Interval { start, len })
            })
            .map(|interval| Permutation::from_distinct(&self.as_slice()[interval.range()]))
            .collect()
    }

    /// Maximal runs of entries that step by +1 (or by -1) at every position.
    ///
    /// Each run covers at least two entries, and is returned as a half-open
    /// range of positions.
    pub fn monotone_intervals(&self) -> Vec<Range<usize>>
    {
        let vals = self.as_slice();
        let mut runs = vec![];
        // (start, ascending?)
        let mut current: Option<(usize, bool)> = None;

        for (i, w) in vals.windows(2).enumerate() {
            let step = if w[1] == w[0] + 1 {
                Some(true)
            } else if w[0] == w[1] + 1 {
                Some(false)
            } else {
                None
            };

            match (current, step) {
                (Some((_, up)), Some(dir)) if up == dir => {},
                (Some((start, _)), _) => {
                    runs.push(start..i + 1);
                    current = step.map(|dir| (i, dir));
                },
                (None, _) => current = step.map(|dir| (i, dir)),
            }
        }
        if let Some((start, _)) = current {
            runs.push(start..vals.len());
        }
        runs
    }

    /// The longest non-trivial interval, or `None` if the permutation is simple.
    ///
    /// Among the longest intervals, the one with the lowest start wins.
    pub fn maximal_interval(&self) -> Option<Interval>
    {
        let n = self.len();
        (2..n).rev()
            .flat_map(|len| (0..=n - len).map(move |start| Interval { start, len }))
            .find(|interval| self.is_interval_window(interval.range()))
    }

    /// Some non-trivial interval, or `None` if the permutation is simple.
    ///
    /// This is the O(n²) scan behind [`Permutation::is_simple`]: for each left
    /// endpoint it grows the window to the right, maintaining the running
    /// minimum and maximum.  It reports the shortest interval at the lowest
    /// start, using the same `(start, len)` convention as
    /// [`Permutation::maximal_interval`].
    pub fn simple_location(&self) -> Option<Interval>
    {
        let vals = self.as_slice();
        let n = vals.len();
        for start in 0..n {
            let (mut lo, mut hi) = (vals[start], vals[start]);
            for end in start + 1..n {
                let len = end - start + 1;
                if len == n {
                    break;
                }
                lo = lo.min(vals[end]);
                hi = hi.max(vals[end]);
                if hi - lo == len - 1 {
                    return Some(Interval { start, len });
                }
            }
        }
        None
    }

    /// A permutation is simple if its only intervals are the trivial ones.
    ///
    /// Permutations of length 2 or less are always simple.
    pub fn is_simple(&self) -> bool
    { self.simple_location().is_none() }

    pub fn is_sum_decomposable(&self) -> bool
    {
        let mut hi = 0;
        for (i, &v) in self.as_slice().iter().enumerate().take(self.len().saturating_sub(1)) {
            hi = hi.max(v);
            if hi == i {
                return true;
            }
        }
        false
    }

    pub fn is_skew_decomposable(&self) -> bool
    { self.complement().is_sum_decomposable() }
}

/// See [`Permutation::is_simple`].
pub fn is_simple(perm: &Permutation) -> bool
{ perm.is_simple() }

/// See [`Permutation::maximal_interval`].
pub fn maximal_interval(perm: &Permutation) -> Option<Interval>
{ perm.maximal_interval() }

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::test_util::{arb_permutation, perm};
    use proptest::prelude::*;

    #[test]
    fn all_intervals() {
        let blocks = perm(&[1, 2, 0, 4, 3]).all_intervals();
        let expected: BTreeMap<usize, Vec<usize>> = vec![
            (2, vec![0, 3]),
            (3, vec![0]),
            (4, vec![]),
        ].into_iter().collect();
        assert_eq!(blocks, expected);

        assert!(perm(&[1, 0]).all_intervals().is_empty());
        assert!(Permutation::identity(0).all_intervals().is_empty());
    }

    #[test]
    fn interval_patterns() {
        assert_eq!(
            perm(&[1, 2, 0, 4, 3]).interval_patterns(),
            vec![perm(&[0, 1]), perm(&[1, 0]), perm(&[1, 2, 0])],
        );
    }

    #[test]
    fn monotone_intervals() {
        assert_eq!(perm(&[0, 1, 3, 2]).monotone_intervals(), vec![0..2, 2..4]);
        assert_eq!(perm(&[4, 3, 2, 0, 1]).monotone_intervals(), vec![0..3, 3..5]);
        assert_eq!(perm(&[1, 3, 0, 2]).monotone_intervals(), Vec::<Range<usize>>::new());
        assert_eq!(Permutation::identity(5).monotone_intervals(), vec![0..5]);
        assert!(Permutation::identity(1).monotone_intervals().is_empty());
    }

    #[test]
    fn longest_interval_wins() {
        assert_eq!(
            perm(&[1, 2, 0, 4, 3]).maximal_interval(),
            Some(Interval { start: 0, len: 3 }),
        );
        // ties go to the lowest start
        assert_eq!(
            perm(&[1, 0, 3, 2]).maximal_interval(),
            Some(Interval { start: 0, len: 2 }),
        );
        assert_eq!(
            Permutation::identity(6).maximal_interval(),
            Some(Interval { start: 0, len: 5 }),
        );
        assert_eq!(perm(&[1, 3, 0, 2]).maximal_interval(), None);
    }

    #[test]
    fn simple() {
        assert!(perm(&[1, 3, 0, 2]).is_simple());
        assert!(perm(&[2, 0, 3, 1]).is_simple());
        assert!(perm(&[1, 3, 0, 4, 2]).is_simple());
        // 0 and 1 are adjacent
        assert!(!perm(&[2, 4, 0, 1, 3]).is_simple());
        assert_eq!(
            perm(&[2, 4, 0, 1, 3]).simple_location(),
            Some(Interval { start: 2, len: 2 }),
        );

        for n in 0..=2 {
            for p in Permutation::all(n) {
                assert!(p.is_simple());
            }
        }
        assert!(Permutation::all(3).all(|p| !p.is_simple()));
    }

    #[test]
    fn simple_counts() {
        // OEIS A111111
        let counts: Vec<usize> = (4..=7)
            .map(|n| Permutation::all(n).filter(|p| p.is_simple()).count())
            .collect();
        assert_eq!(counts, vec![2, 6, 46, 338]);
    }

    #[test]
    fn decomposable() {
        assert!(perm(&[1, 0, 2]).is_sum_decomposable());
        assert!(!perm(&[1, 0, 2]).is_skew_decomposable());
        assert!(perm(&[2, 1, 0]).is_skew_decomposable());
        assert!(!perm(&[1, 3, 0, 2]).is_sum_decomposable());
        assert!(!Permutation::identity(1).is_sum_decomposable());
        assert!(!Permutation::identity(0).is_skew_decomposable());
    }

    proptest! {
        #[test]
        fn simple_iff_no_maximal_interval(p in arb_permutation(0..10)) {
            prop_assert_eq!(p.is_simple(), p.maximal_interval().is_none());
            prop_assert_eq!(is_simple(&p), maximal_interval(&p).is_none());
        }

        #[test]
        fn reported_intervals_are_intervals(p in arb_permutation(0..10)) {
            let n = p.len();
            for interval in p.maximal_interval().into_iter().chain(p.simple_location()) {
                prop_assert!(interval.len >= 2 && interval.len < n);
                prop_assert!(interval.end() <= n);
                prop_assert!(p.is_interval_window(interval.range()));
            }
            if let Some(longest) = p.maximal_interval() {
                for (&len, starts) in &p.all_intervals() {
                    prop_assert!(len <= longest.len || starts.is_empty());
                }
            }
        }
    }
}
